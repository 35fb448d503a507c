//! Multi-criteria interval scoring.
//!
//! Combines the video, audio and text analyzer scores with a weighted sum,
//! then shapes the result by clip length so platform-friendly durations
//! rank higher.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_DURATION;
use crate::constants::scoring::{
    AUDIO_WEIGHT, LONG_MULTIPLIER, MAX, MIN, NEAR_MULTIPLIER, OPTIMAL_MULTIPLIER, TEXT_WEIGHT,
    VIDEO_WEIGHT,
};

use super::timeline::{CriterionScores, Interval};

/// Relative weight of each analyzer in the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the visual scene score.
    pub video: f64,
    /// Weight of the audio energy score.
    pub audio: f64,
    /// Weight of the transcript score.
    pub text: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            video: VIDEO_WEIGHT,
            audio: AUDIO_WEIGHT,
            text: TEXT_WEIGHT,
        }
    }
}

impl ScoreWeights {
    /// Weighted sum of the three criteria.
    #[must_use]
    pub fn combine(&self, scores: &CriterionScores) -> f64 {
        scores.video * self.video + scores.audio * self.audio + scores.text * self.text
    }
}

/// Length-based multiplier applied to the weighted sum.
///
/// | seconds   | multiplier |
/// |-----------|------------|
/// | 15 to 30  | 1.2        |
/// | 10 to <15 | 0.9        |
/// | >30 to 45 | 0.9        |
/// | >45       | 0.7        |
/// | otherwise | 1.0        |
#[must_use]
pub fn duration_multiplier(seconds: f64) -> f64 {
    if (15.0..=30.0).contains(&seconds) {
        OPTIMAL_MULTIPLIER
    } else if (10.0..15.0).contains(&seconds) || (seconds > 30.0 && seconds <= 45.0) {
        NEAR_MULTIPLIER
    } else if seconds > 45.0 {
        LONG_MULTIPLIER
    } else {
        1.0
    }
}

/// Scores candidate intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalScorer {
    /// Analyzer weights.
    pub weights: ScoreWeights,
    /// Intervals shorter than this score exactly zero.
    pub min_duration: f64,
}

impl Default for IntervalScorer {
    fn default() -> Self {
        Self::new(ScoreWeights::default(), DEFAULT_MIN_DURATION)
    }
}

impl IntervalScorer {
    /// Create a scorer.
    #[must_use]
    pub const fn new(weights: ScoreWeights, min_duration: f64) -> Self {
        Self {
            weights,
            min_duration,
        }
    }

    /// Combined score for `interval` in `[0, 1]`.
    ///
    /// Too-short intervals are hard-rejected with `0.0` so they can never be
    /// selected.
    #[must_use]
    pub fn score(&self, interval: &Interval, scores: &CriterionScores) -> f64 {
        let length = interval.duration();
        if length < self.min_duration {
            return 0.0;
        }

        let combined = self.weights.combine(scores) * duration_multiplier(length);
        if combined.is_nan() {
            return MIN;
        }
        combined.clamp(MIN, MAX)
    }
}
