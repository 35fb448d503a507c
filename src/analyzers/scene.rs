//! Scene-cut proximity scoring.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::Error;
use crate::constants::analyzers::{NEUTRAL_SCORE, SCENE_DECAY_SECS};
use crate::engine::{CriterionScorer, Interval};

/// Internal record for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CutRecord {
    #[serde(rename = "Cut (s)")]
    cut: f64,
}

/// Scores intervals by how close they are to a detected scene cut.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneCutScorer {
    cuts: Vec<f64>,
}

impl SceneCutScorer {
    /// Create a scorer from cut timestamps in seconds.
    ///
    /// Non-finite and negative timestamps are discarded.
    #[must_use]
    pub fn new(mut cuts: Vec<f64>) -> Self {
        cuts.retain(|c| c.is_finite() && *c >= 0.0);
        cuts.sort_by(f64::total_cmp);
        Self { cuts }
    }

    /// Load cut timestamps from a CSV file with a `Cut (s)` column.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let cuts = parse_scene_cuts(path)?;
        debug!("Loaded {} scene cuts from {}", cuts.len(), path.display());
        Ok(Self::new(cuts))
    }

    /// Sorted cut timestamps.
    #[must_use]
    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }

    /// Distance from the nearest cut to the nearer boundary of `interval`.
    fn nearest_distance(&self, interval: &Interval) -> Option<f64> {
        self.cuts
            .iter()
            .map(|&cut| (cut - interval.start).abs().min((cut - interval.end).abs()))
            .min_by(f64::total_cmp)
    }
}

impl CriterionScorer for SceneCutScorer {
    fn score(&self, interval: &Interval) -> f64 {
        if self.cuts.is_empty() {
            return NEUTRAL_SCORE;
        }
        if self
            .cuts
            .iter()
            .any(|&cut| interval.start <= cut && cut <= interval.end)
        {
            return 1.0;
        }
        self.nearest_distance(interval)
            .map_or(NEUTRAL_SCORE, |d| (1.0 - d / SCENE_DECAY_SECS).max(0.0))
    }

    fn name(&self) -> &str {
        "scene"
    }
}

/// Parse a scene cut list.
///
/// Returns `Ok(vec![])` for a header-only file.
pub fn parse_scene_cuts(path: &Path) -> Result<Vec<f64>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::AnalysisParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut cuts = Vec::new();
    for (line_num, result) in reader.deserialize::<CutRecord>().enumerate() {
        let record = result.map_err(|e| Error::InvalidAnalysisFormat {
            message: format!("{} line {}: {e}", path.display(), line_num + 2),
        })?;
        if !record.cut.is_finite() || record.cut < 0.0 {
            return Err(Error::InvalidAnalysisFormat {
                message: format!(
                    "{} line {}: cut time must be a non-negative number, got {}",
                    path.display(),
                    line_num + 2,
                    record.cut
                ),
            });
        }
        cuts.push(record.cut);
    }

    Ok(cuts)
}
