//! JSON envelope types for CLI output.
//!
//! Structured output lets reelcut act as a backend for other tools: every
//! result is wrapped in the same versioned envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::GeneratedShort;

/// Envelope schema version.
pub const ENVELOPE_VERSION: &str = "1.0";

/// JSON envelope wrapping all CLI output events.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct JsonEnvelope<T> {
    /// Envelope schema version.
    pub spec_version: String,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: ENVELOPE_VERSION.to_string(),
            timestamp: Utc::now(),
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Final result.
    Result,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Generated shorts.
    Shorts,
    /// Configuration display.
    Config,
}

/// Payload for a highlight run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortsPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Source video.
    pub video: PathBuf,
    /// Source duration in seconds.
    pub duration: f64,
    /// Directory the clips were (or would be) written to.
    pub output_dir: PathBuf,
    /// Whether extraction was skipped.
    pub dry_run: bool,
    /// Number of shorts requested.
    pub requested: usize,
    /// Whether the relaxed selection pass contributed clips.
    pub used_fallback: bool,
    /// Generated shorts in timeline order.
    pub shorts: Vec<ShortEntry>,
}

/// A single generated short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortEntry {
    /// 1-based position.
    pub index: usize,
    /// Start second.
    pub start: u64,
    /// End second.
    pub end: u64,
    /// Length in seconds.
    pub duration: u64,
    /// Combined score in `[0, 1]`.
    pub score: f64,
    /// Clip path.
    pub path: PathBuf,
}

impl From<&GeneratedShort> for ShortEntry {
    fn from(short: &GeneratedShort) -> Self {
        Self {
            index: short.index,
            start: short.start,
            end: short.end,
            duration: short.duration(),
            score: short.score,
            path: short.path.clone(),
        }
    }
}

/// Payload for config show result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// The configuration contents (as JSON value for flexibility).
    pub config: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let payload = ShortsPayload {
            result_type: ResultType::Shorts,
            video: PathBuf::from("talk.mp4"),
            duration: 120.0,
            output_dir: PathBuf::from("output"),
            dry_run: true,
            requested: 3,
            used_fallback: false,
            shorts: vec![],
        };
        let envelope = JsonEnvelope::new(EventType::Result, payload);

        let json = serde_json::to_string(&envelope).expect("serialize");
        assert!(json.contains("\"spec_version\":\"1.0\""));
        assert!(json.contains("\"event\":\"result\""));
        assert!(json.contains("\"result_type\":\"shorts\""));
        assert!(json.contains("\"requested\":3"));
    }

    #[test]
    fn test_short_entry_from_generated() {
        let short = GeneratedShort {
            index: 2,
            path: PathBuf::from("output/short_2_score_80_time_30_55.mp4"),
            start: 30,
            end: 55,
            score: 0.8,
        };
        let entry = ShortEntry::from(&short);
        assert_eq!(entry.duration, 25);
        assert_eq!(entry.path, short.path);
    }

    #[test]
    fn test_result_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ResultType::Shorts).expect("serialize"),
            "\"shorts\""
        );
        assert_eq!(
            serde_json::to_string(&ResultType::Config).expect("serialize"),
            "\"config\""
        );
    }
}
