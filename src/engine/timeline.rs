//! Timeline and interval types shared by every selection stage.

use serde::Serialize;

/// Immutable duration bound for all interval arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoTimeline {
    duration: f64,
}

impl VideoTimeline {
    /// Create a timeline. Negative or non-finite durations collapse to zero.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        Self { duration }
    }

    /// Duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Whether the timeline has no usable length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duration <= 0.0
    }

    /// Whether `interval` lies within `[0, duration]`.
    #[must_use]
    pub fn contains(&self, interval: &Interval) -> bool {
        interval.start >= 0.0 && interval.end <= self.duration
    }
}

/// A candidate or final clip boundary in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl Interval {
    /// Create an interval, returning `None` unless `0 <= start < end`.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Option<Self> {
        (start.is_finite() && end.is_finite() && start >= 0.0 && start < end)
            .then_some(Self { start, end })
    }

    /// Length in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Center of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Length of the shared span with `other` (zero when disjoint).
    #[must_use]
    pub fn overlap_with(&self, other: &Self) -> f64 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (end - start).max(0.0)
    }

    /// Shared span with `other` divided by this interval's own length.
    #[must_use]
    pub fn overlap_ratio(&self, other: &Self) -> f64 {
        let length = self.duration();
        if length <= 0.0 {
            return 0.0;
        }
        self.overlap_with(other) / length
    }

    /// Absolute distance between the two midpoints.
    #[must_use]
    pub fn midpoint_distance(&self, other: &Self) -> f64 {
        (self.midpoint() - other.midpoint()).abs()
    }
}

/// Per-criterion scores reported by the three analyzers, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionScores {
    /// Visual scene interest.
    pub video: f64,
    /// Audio energy interest.
    pub audio: f64,
    /// Transcript interest.
    pub text: f64,
}

/// An interval with its combined score and optional region tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredInterval {
    /// Clip boundary.
    pub interval: Interval,
    /// Combined multi-criteria score in `[0, 1]`.
    pub score: f64,
    /// Index of the temporal region containing the midpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<usize>,
}

impl ScoredInterval {
    /// Create an untagged scored interval.
    #[must_use]
    pub const fn new(interval: Interval, score: f64) -> Self {
        Self {
            interval,
            score,
            region: None,
        }
    }

    /// Attach a region index.
    #[must_use]
    pub const fn with_region(mut self, region: Option<usize>) -> Self {
        self.region = region;
        self
    }

    /// Start time in seconds.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.interval.start
    }

    /// End time in seconds.
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.interval.end
    }
}

/// Sort by score descending. Equal scores keep their incoming order.
pub(crate) fn sort_by_score_desc(items: &mut [ScoredInterval]) {
    items.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Sort by start ascending, then end ascending.
pub(crate) fn sort_by_start(items: &mut [ScoredInterval]) {
    items.sort_by(|a, b| {
        a.start()
            .total_cmp(&b.start())
            .then_with(|| a.end().total_cmp(&b.end()))
    });
}
