//! Configuration type definitions.

use crate::constants::candidates::{DEFAULT_MAX_CANDIDATES, DEFAULT_STEP_SIZE, DEFAULT_WINDOW_SIZES};
use crate::constants::extract::{
    DEFAULT_AUDIO_CODEC, DEFAULT_CONTAINER, DEFAULT_PRESET, DEFAULT_THREADS, DEFAULT_VIDEO_CODEC,
};
use crate::constants::selection::{
    DEFAULT_FOOTPRINT_THRESHOLD, DEFAULT_MIN_SEPARATION_FLOOR, DEFAULT_OVERLAP_THRESHOLD,
    DEFAULT_REGION_COUNT,
};
use crate::constants::text::{DEFAULT_KEYWORDS, DEFAULT_QUESTION_WORDS};
use crate::constants::{DEFAULT_MIN_DURATION, DEFAULT_NUM_SHORTS};
use crate::engine::ScoreWeights;
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selection settings.
    pub selection: SelectionConfig,

    /// Candidate window settings.
    pub candidates: CandidatesConfig,

    /// Analyzer weights.
    pub weights: ScoreWeights,

    /// Transcript vocabulary.
    pub text: TextConfig,

    /// ffmpeg encoding settings.
    pub extract: ExtractConfig,
}

/// How many clips to pick and how far apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of shorts to produce.
    pub num_shorts: usize,

    /// Minimum clip duration in seconds.
    pub min_duration: f64,

    /// Maximum overlap / candidate length against any selected clip.
    pub overlap_threshold: f64,

    /// Mean footprint occupancy at which a candidate is rejected.
    pub footprint_threshold: f64,

    /// Lower bound of the midpoint separation in seconds.
    pub min_separation_floor: f64,

    /// Number of temporal diversity regions.
    pub region_count: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            num_shorts: DEFAULT_NUM_SHORTS,
            min_duration: DEFAULT_MIN_DURATION,
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            footprint_threshold: DEFAULT_FOOTPRINT_THRESHOLD,
            min_separation_floor: DEFAULT_MIN_SEPARATION_FLOOR,
            region_count: DEFAULT_REGION_COUNT,
        }
    }
}

/// Candidate window layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidatesConfig {
    /// Stride between window starts in seconds.
    pub step_size: u32,

    /// Window durations in seconds.
    pub window_sizes: Vec<u32>,

    /// Estimated candidate volume above which the stride grows.
    pub max_candidates: usize,
}

impl Default for CandidatesConfig {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            window_sizes: DEFAULT_WINDOW_SIZES.to_vec(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Transcript keyword and question vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Highlight keywords, matched case-insensitively anywhere in the text.
    pub keywords: Vec<String>,

    /// Interrogatives, matched at the start of the text.
    pub question_words: Vec<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect(),
            question_words: DEFAULT_QUESTION_WORDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// ffmpeg encoding settings for extracted clips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Video codec (`-c:v`).
    pub video_codec: String,

    /// Audio codec (`-c:a`).
    pub audio_codec: String,

    /// Encoder preset (`-preset`).
    pub preset: String,

    /// Encoder threads (`-threads`).
    pub threads: u32,

    /// Output container extension.
    pub container: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            preset: DEFAULT_PRESET.to_string(),
            threads: DEFAULT_THREADS,
            container: DEFAULT_CONTAINER.to_string(),
        }
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable summary.
    #[default]
    Human,
    /// JSON result envelope.
    Json,
}

impl OutputMode {
    /// Whether stdout carries machine-readable output.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("human".parse::<OutputMode>().ok(), Some(OutputMode::Human));
        assert_eq!("JSON".parse::<OutputMode>().ok(), Some(OutputMode::Json));
        assert!("xml".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_output_mode_display() {
        assert_eq!(OutputMode::Human.to_string(), "human");
        assert_eq!(OutputMode::Json.to_string(), "json");
        assert!(OutputMode::Json.is_structured());
    }

    #[test]
    fn test_selection_config_default_values() {
        let selection = SelectionConfig::default();
        assert_eq!(selection.num_shorts, 3);
        assert_eq!(selection.min_duration, 10.0);
        assert_eq!(selection.region_count, 5);
    }

    #[test]
    fn test_text_config_defaults_cover_french() {
        let text = TextConfig::default();
        assert!(text.keywords.iter().any(|k| k == "n'oubliez pas"));
        assert!(text.question_words.iter().any(|w| w == "est-ce que"));
    }
}
