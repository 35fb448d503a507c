//! Candidate generation, scoring and diversity-aware selection.
//!
//! Data flows one way: [`CandidateGenerator`] → [`IntervalScorer`] →
//! [`RegionBalancer`] → [`OverlapSelector`], sequenced by
//! [`HighlightEngine`]. Every stage tolerates empty input.

mod candidates;
mod footprint;
mod orchestrator;
mod regions;
mod scoring;
mod selector;
mod timeline;

pub use candidates::CandidateGenerator;
pub use footprint::TemporalFootprint;
pub use orchestrator::{
    Analyzers, ClipExtractor, ClipRequest, CriterionScorer, EngineSettings, GeneratedShort,
    HighlightEngine, TimelineProvider, score_percent,
};
pub use regions::{RegionBalancer, RegionPartition};
pub use scoring::{IntervalScorer, ScoreWeights, duration_multiplier};
pub use selector::{OverlapSelector, SelectionResult};
pub use timeline::{CriterionScores, Interval, ScoredInterval, VideoTimeline};
