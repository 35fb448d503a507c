//! Temporal regions and the region-diversity balancer.

use tracing::debug;

use super::timeline::{ScoredInterval, VideoTimeline};

/// Equal contiguous spans covering `[0, duration)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPartition {
    bounds: Vec<(f64, f64)>,
}

impl RegionPartition {
    /// Split `timeline` into `count` equal spans. An empty timeline or zero
    /// count yields no regions.
    #[must_use]
    pub fn new(timeline: &VideoTimeline, count: usize) -> Self {
        if timeline.is_empty() || count == 0 {
            return Self { bounds: Vec::new() };
        }

        #[allow(clippy::cast_precision_loss)]
        let span = timeline.duration() / count as f64;
        let bounds = (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let i = i as f64;
                (i * span, (i + 1.0) * span)
            })
            .collect();
        Self { bounds }
    }

    /// Region boundaries as `(start, end)` pairs.
    #[must_use]
    pub fn regions(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Whether the partition has no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Index of the half-open region `[start, end)` containing `seconds`.
    #[must_use]
    pub fn region_of(&self, seconds: f64) -> Option<usize> {
        self.bounds
            .iter()
            .position(|&(start, end)| start <= seconds && seconds < end)
    }

    /// Copy of `candidates` tagged with the region of each midpoint.
    #[must_use]
    pub fn tag(&self, candidates: &[ScoredInterval]) -> Vec<ScoredInterval> {
        candidates
            .iter()
            .map(|c| c.with_region(self.region_of(c.interval.midpoint())))
            .collect()
    }
}

/// Guarantees each region first refusal on a slot before global fill.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBalancer {
    partition: RegionPartition,
}

impl RegionBalancer {
    /// Create a balancer over `partition`.
    #[must_use]
    pub const fn new(partition: RegionPartition) -> Self {
        Self { partition }
    }

    /// The underlying partition.
    #[must_use]
    pub const fn partition(&self) -> &RegionPartition {
        &self.partition
    }

    /// Best candidate per region first (in region order), then the rest by
    /// descending score, truncated to `limit`.
    ///
    /// Regions with no candidate midpoint contribute nothing. Membership is
    /// tracked by input index, so identical bounds never collapse.
    #[must_use]
    pub fn balance(&self, candidates: &[ScoredInterval], limit: usize) -> Vec<ScoredInterval> {
        if candidates.is_empty() || limit == 0 {
            return Vec::new();
        }

        let tagged = self.partition.tag(candidates);
        let mut picked = vec![false; tagged.len()];
        let mut combined = Vec::with_capacity(limit);

        for region in 0..self.partition.len() {
            let best = tagged
                .iter()
                .enumerate()
                .filter(|(_, c)| c.region == Some(region))
                .fold(None::<(usize, &ScoredInterval)>, |best, (idx, c)| match best {
                    Some((_, b)) if b.score >= c.score => best,
                    _ => Some((idx, c)),
                });
            if let Some((idx, c)) = best {
                picked[idx] = true;
                combined.push(*c);
            }
        }
        let regional = combined.len();

        let mut rest: Vec<(usize, ScoredInterval)> = tagged
            .iter()
            .copied()
            .enumerate()
            .filter(|(idx, _)| !picked[*idx])
            .collect();
        rest.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));
        combined.extend(rest.into_iter().map(|(_, c)| c));

        combined.truncate(limit);

        debug!(
            "Region balancer kept {} candidates ({} regional picks)",
            combined.len(),
            regional.min(limit)
        );
        combined
    }
}
