//! Overlap-aware greedy selection.
//!
//! Two passes over candidates sorted by score. The strict pass only looks at
//! the top slice of the ranking and applies three independent gates: midpoint
//! separation, pairwise overlap ratio and mean footprint occupancy. When it
//! yields too few clips, a relaxed pass fills from the remaining candidates
//! using half the separation and no overlap gates.

use serde::Serialize;
use tracing::debug;

use crate::constants::selection::{
    DEFAULT_FOOTPRINT_THRESHOLD, DEFAULT_OVERLAP_THRESHOLD, FALLBACK_CAP, FALLBACK_TRIGGER,
    FIRST_PASS_FRACTION,
};

use super::footprint::TemporalFootprint;
use super::timeline::{ScoredInterval, VideoTimeline, sort_by_score_desc, sort_by_start};

/// Final clips produced by the selector, ordered by start.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionResult {
    /// Selected clips sorted by start ascending.
    pub clips: Vec<ScoredInterval>,
    /// Whether the relaxed fallback pass contributed.
    pub used_fallback: bool,
}

impl SelectionResult {
    /// Keep the first `n` clips by start.
    pub fn truncate(&mut self, n: usize) {
        self.clips.truncate(n);
    }

    /// Number of selected clips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Greedy selector with overlap and footprint gates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapSelector {
    /// Maximum overlap length / candidate length against any selected clip.
    pub overlap_threshold: f64,
    /// Mean prior occupancy at or above which a candidate is rejected.
    pub footprint_threshold: f64,
    /// Share of the ranking the strict pass considers.
    pub first_pass_fraction: f64,
    /// Strict-pass result size below which the fallback pass runs.
    pub fallback_trigger: usize,
    /// Total clip count at which the fallback pass stops.
    pub fallback_cap: usize,
}

impl Default for OverlapSelector {
    fn default() -> Self {
        Self {
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            footprint_threshold: DEFAULT_FOOTPRINT_THRESHOLD,
            first_pass_fraction: FIRST_PASS_FRACTION,
            fallback_trigger: FALLBACK_TRIGGER,
            fallback_cap: FALLBACK_CAP,
        }
    }
}

impl OverlapSelector {
    /// Create a selector with custom overlap and footprint thresholds.
    #[must_use]
    pub fn new(overlap_threshold: f64, footprint_threshold: f64) -> Self {
        Self {
            overlap_threshold,
            footprint_threshold,
            ..Self::default()
        }
    }

    /// Number of top-ranked candidates the strict pass inspects.
    fn first_pass_len(&self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let n = (total as f64 * self.first_pass_fraction) as usize;
        n.clamp(1, total)
    }

    /// Select well-separated clips from `candidates`.
    ///
    /// Non-positive scores are never selectable. Ties keep input order.
    #[must_use]
    pub fn select(
        &self,
        candidates: &[ScoredInterval],
        timeline: &VideoTimeline,
        min_separation: f64,
    ) -> SelectionResult {
        let mut ranked: Vec<ScoredInterval> = candidates
            .iter()
            .copied()
            .filter(|c| c.score > 0.0)
            .collect();
        if ranked.is_empty() {
            return SelectionResult::default();
        }
        sort_by_score_desc(&mut ranked);

        let mut footprint = TemporalFootprint::new(timeline);
        let mut taken = vec![false; ranked.len()];
        let mut selected: Vec<ScoredInterval> = Vec::new();

        let strict = self.first_pass_len(ranked.len());
        for (idx, candidate) in ranked.iter().enumerate().take(strict) {
            let interval = &candidate.interval;
            let crowded = selected.iter().any(|s| {
                s.interval.midpoint_distance(interval) < min_separation
                    || interval.overlap_ratio(&s.interval) > self.overlap_threshold
            });
            if crowded {
                continue;
            }
            if footprint.mean_occupancy(interval) >= self.footprint_threshold {
                continue;
            }
            footprint.mark(interval);
            taken[idx] = true;
            selected.push(*candidate);
        }
        debug!(
            "Strict pass selected {} of {} inspected candidates",
            selected.len(),
            strict
        );

        let mut used_fallback = false;
        if selected.len() < self.fallback_trigger {
            let relaxed = min_separation / 2.0;
            for (idx, candidate) in ranked.iter().enumerate() {
                if selected.len() >= self.fallback_cap {
                    break;
                }
                if taken[idx] {
                    continue;
                }
                let separated = selected
                    .iter()
                    .all(|s| s.interval.midpoint_distance(&candidate.interval) >= relaxed);
                if separated {
                    taken[idx] = true;
                    selected.push(*candidate);
                    used_fallback = true;
                }
            }
            debug!("Fallback pass raised selection to {}", selected.len());
        }

        sort_by_start(&mut selected);
        SelectionResult {
            clips: selected,
            used_fallback,
        }
    }
}
