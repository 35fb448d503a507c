//! Constant-score analyzer for skipped criteria.

use crate::constants::analyzers::NEUTRAL_SCORE;
use crate::engine::{CriterionScorer, Interval};

/// Returns the same score for every interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralScorer(pub f64);

impl Default for NeutralScorer {
    fn default() -> Self {
        Self(NEUTRAL_SCORE)
    }
}

impl CriterionScorer for NeutralScorer {
    fn score(&self, _interval: &Interval) -> f64 {
        self.0.clamp(0.0, 1.0)
    }

    fn name(&self) -> &str {
        "neutral"
    }
}
