//! Per-second occupancy accumulator.

use super::timeline::{Interval, VideoTimeline};

/// Counts how many selected intervals cover each second of the timeline.
#[derive(Debug, Clone)]
pub struct TemporalFootprint {
    counts: Vec<u32>,
}

impl TemporalFootprint {
    /// Create an empty footprint with one cell per whole second plus one.
    #[must_use]
    pub fn new(timeline: &VideoTimeline) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cells = timeline.duration() as usize + 1;
        Self {
            counts: vec![0; cells],
        }
    }

    /// Cells covered by `interval`: `floor(start)..=floor(end)`, clamped.
    fn cells(&self, interval: &Interval) -> std::ops::RangeInclusive<usize> {
        let last = self.counts.len().saturating_sub(1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let first = (interval.start.max(0.0) as usize).min(last);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let end = (interval.end.max(0.0) as usize).min(last);
        first..=end.max(first)
    }

    /// Mean number of prior selections covering the seconds of `interval`.
    #[must_use]
    pub fn mean_occupancy(&self, interval: &Interval) -> f64 {
        let cells = self.cells(interval);
        let covered = &self.counts[cells];
        if covered.is_empty() {
            return 0.0;
        }
        let total: u64 = covered.iter().map(|&c| u64::from(c)).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = total as f64 / covered.len() as f64;
        mean
    }

    /// Record `interval` as selected.
    pub fn mark(&mut self, interval: &Interval) {
        let cells = self.cells(interval);
        for count in &mut self.counts[cells] {
            *count = count.saturating_add(1);
        }
    }

    /// Occupancy of a single second (zero outside the timeline).
    #[must_use]
    pub fn count_at(&self, second: usize) -> u32 {
        self.counts.get(second).copied().unwrap_or(0)
    }
}
