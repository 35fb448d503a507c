//! Candidate window generation.
//!
//! Enumerates overlapping fixed-length windows across the timeline at
//! several durations and a shared stride. Window starts are whole seconds.

use tracing::debug;

use crate::constants::candidates::{
    DEFAULT_MAX_CANDIDATES, DEFAULT_STEP_SIZE, DEFAULT_WINDOW_SIZES, ESTIMATE_FACTOR,
};

use super::timeline::{Interval, VideoTimeline};

/// Generates candidate intervals for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGenerator {
    /// Stride between window starts in seconds.
    pub step_size: u32,
    /// Window durations in seconds.
    pub window_sizes: Vec<u32>,
    /// Estimated candidate volume above which the stride is enlarged.
    pub max_candidates: usize,
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            window_sizes: DEFAULT_WINDOW_SIZES.to_vec(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl CandidateGenerator {
    /// Create a generator with the given stride and window sizes.
    #[must_use]
    pub fn new(step_size: u32, window_sizes: Vec<u32>) -> Self {
        Self {
            step_size,
            window_sizes,
            ..Self::default()
        }
    }

    /// Stride actually used for `timeline`, after the volume guard.
    ///
    /// When `floor(duration / min_window) * 3` exceeds `max_candidates`, the
    /// stride grows to `floor(duration / (max_candidates / window_count))`.
    #[must_use]
    pub fn effective_step(&self, timeline: &VideoTimeline) -> u32 {
        let step = self.step_size.max(1);
        let Some(&min_window) = self.window_sizes.iter().filter(|&&w| w > 0).min() else {
            return step;
        };

        let duration = timeline.duration();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let estimate = (duration / f64::from(min_window)) as usize * ESTIMATE_FACTOR;
        if estimate <= self.max_candidates {
            return step;
        }

        #[allow(clippy::cast_precision_loss)]
        let per_window = self.max_candidates as f64 / self.window_sizes.len() as f64;
        if per_window <= 0.0 {
            return step;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let enlarged = (duration / per_window) as u32;
        step.max(enlarged)
    }

    /// Enumerate candidate windows across `timeline`.
    ///
    /// Windows longer than the video are skipped; an empty timeline yields
    /// no candidates. Output order is by window size, then start.
    #[must_use]
    pub fn generate(&self, timeline: &VideoTimeline) -> Vec<Interval> {
        if timeline.is_empty() {
            return Vec::new();
        }

        let duration = timeline.duration();
        let step = self.effective_step(timeline);
        debug!(
            "Generating candidates with {}s stride over windows {:?}",
            step, self.window_sizes
        );

        let mut candidates = Vec::new();
        for &window in &self.window_sizes {
            let window_secs = f64::from(window);
            if window == 0 || window_secs > duration {
                continue;
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let last_start = (duration - window_secs) as u64;
            for start in (0..=last_start).step_by(step as usize) {
                #[allow(clippy::cast_precision_loss)]
                let start = start as f64;
                let end = start + window_secs;
                if end > duration {
                    break;
                }
                if let Some(interval) = Interval::new(start, end) {
                    candidates.push(interval);
                }
            }
        }

        candidates
    }
}
