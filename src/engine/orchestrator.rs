//! End-to-end highlight selection.
//!
//! Sequences candidate generation, scoring, region balancing and overlap
//! filtering, then hands the surviving intervals to a [`ClipExtractor`].

use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::DEFAULT_MIN_DURATION;
use crate::constants::selection::{
    CANDIDATES_PER_SHORT, DEFAULT_FOOTPRINT_THRESHOLD, DEFAULT_MIN_SEPARATION_FLOOR,
    DEFAULT_OVERLAP_THRESHOLD, DEFAULT_REGION_COUNT, SEPARATION_SLOTS_PER_SHORT,
};
use crate::constants::short_video;
use crate::error::{Error, Result};

use super::candidates::CandidateGenerator;
use super::regions::{RegionBalancer, RegionPartition};
use super::scoring::{IntervalScorer, ScoreWeights};
use super::selector::{OverlapSelector, SelectionResult};
use super::timeline::{CriterionScores, Interval, ScoredInterval, VideoTimeline};

/// Scores one criterion of an interval in `[0, 1]`.
///
/// Implementations are queried concurrently and must not rely on call order.
pub trait CriterionScorer: Send + Sync {
    /// Score for `interval`.
    fn score(&self, interval: &Interval) -> f64;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// Supplies the source video duration.
pub trait TimelineProvider {
    /// Duration in seconds.
    fn duration(&self) -> Result<f64>;
}

/// Persists a selected clip.
pub trait ClipExtractor {
    /// Extract `request`, returning the path of the written clip.
    fn extract(&self, request: &ClipRequest) -> Result<PathBuf>;
}

/// The three analyzer capabilities consulted for every candidate.
#[derive(Clone, Copy)]
pub struct Analyzers<'a> {
    /// Visual scene scorer.
    pub video: &'a dyn CriterionScorer,
    /// Audio energy scorer.
    pub audio: &'a dyn CriterionScorer,
    /// Transcript scorer.
    pub text: &'a dyn CriterionScorer,
}

impl Analyzers<'_> {
    /// Query all three analyzers for `interval`.
    #[must_use]
    pub fn score(&self, interval: &Interval) -> CriterionScores {
        CriterionScores {
            video: self.video.score(interval),
            audio: self.audio.score(interval),
            text: self.text.score(interval),
        }
    }
}

impl std::fmt::Debug for Analyzers<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzers")
            .field("video", &self.video.name())
            .field("audio", &self.audio.name())
            .field("text", &self.text.name())
            .finish()
    }
}

/// `score` in `[0, 1]` as a whole percentage, truncated.
#[must_use]
pub fn score_percent(score: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (score.clamp(0.0, 1.0) * 100.0) as u32;
    pct
}

/// Integer-second extraction request for one selected clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClipRequest {
    /// 1-based position in the final selection.
    pub index: usize,
    /// Start second.
    pub start: u64,
    /// End second.
    pub end: u64,
    /// Combined score in `[0, 1]`.
    pub score: f64,
}

impl ClipRequest {
    /// Round `clip` down to whole seconds within `[0, floor(duration)]`.
    #[must_use]
    pub fn from_selection(index: usize, clip: &ScoredInterval, timeline: &VideoTimeline) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let limit = timeline.duration().floor() as u64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let start = (clip.start().max(0.0).floor() as u64).min(limit);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let end = (clip.end().max(0.0).floor() as u64).min(limit);
        Self {
            index,
            start,
            end,
            score: clip.score,
        }
    }

    /// Clip length in whole seconds.
    #[must_use]
    pub const fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Score as a whole percentage, truncated.
    #[must_use]
    pub fn score_percent(&self) -> u32 {
        score_percent(self.score)
    }

    /// Reject empty or reversed ranges.
    pub fn validate(&self) -> Result<()> {
        if self.end <= self.start {
            #[allow(clippy::cast_precision_loss)]
            return Err(Error::InvalidTimeRange {
                start: self.start as f64,
                end: self.end as f64,
            });
        }
        Ok(())
    }
}

/// A successfully extracted highlight clip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedShort {
    /// 1-based position in the final selection.
    pub index: usize,
    /// Written clip path.
    pub path: PathBuf,
    /// Start second.
    pub start: u64,
    /// End second.
    pub end: u64,
    /// Combined score in `[0, 1]`.
    pub score: f64,
}

impl GeneratedShort {
    /// Clip length in whole seconds.
    #[must_use]
    pub const fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

/// Tunables for one engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Candidate window layout.
    pub generator: CandidateGenerator,
    /// Analyzer weights.
    pub weights: ScoreWeights,
    /// Minimum clip length for videos of at least a minute.
    pub min_duration: f64,
    /// Pairwise overlap gate.
    pub overlap_threshold: f64,
    /// Footprint occupancy gate.
    pub footprint_threshold: f64,
    /// Lower bound of the midpoint separation.
    pub min_separation_floor: f64,
    /// Number of diversity regions.
    pub region_count: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            generator: CandidateGenerator::default(),
            weights: ScoreWeights::default(),
            min_duration: DEFAULT_MIN_DURATION,
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            footprint_threshold: DEFAULT_FOOTPRINT_THRESHOLD,
            min_separation_floor: DEFAULT_MIN_SEPARATION_FLOOR,
            region_count: DEFAULT_REGION_COUNT,
        }
    }
}

impl EngineSettings {
    /// Build settings from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            generator: CandidateGenerator {
                step_size: config.candidates.step_size,
                window_sizes: config.candidates.window_sizes.clone(),
                max_candidates: config.candidates.max_candidates,
            },
            weights: config.weights,
            min_duration: config.selection.min_duration,
            overlap_threshold: config.selection.overlap_threshold,
            footprint_threshold: config.selection.footprint_threshold,
            min_separation_floor: config.selection.min_separation_floor,
            region_count: config.selection.region_count,
        }
    }
}

/// Turns analyzer scores into a small, well-spread set of clips.
#[derive(Debug, Clone, Default)]
pub struct HighlightEngine {
    settings: EngineSettings,
}

impl HighlightEngine {
    /// Create an engine.
    #[must_use]
    pub const fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Engine settings.
    #[must_use]
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Minimum clip length for `timeline`.
    ///
    /// Videos under a minute shrink it to `min(5, duration / 3)`.
    #[must_use]
    pub fn min_duration_for(&self, timeline: &VideoTimeline) -> f64 {
        let duration = timeline.duration();
        if duration < short_video::THRESHOLD_SECS {
            self.settings
                .min_duration
                .min(short_video::MAX_MIN_DURATION)
                .min(duration / short_video::DIVISOR)
        } else {
            self.settings.min_duration
        }
    }

    /// Midpoint separation for `num_shorts` clips over `timeline`.
    #[must_use]
    pub fn min_separation_for(&self, timeline: &VideoTimeline, num_shorts: usize) -> f64 {
        let slots = num_shorts.saturating_mul(SEPARATION_SLOTS_PER_SHORT).max(1);
        #[allow(clippy::cast_precision_loss)]
        let spread = timeline.duration() / slots as f64;
        self.settings.min_separation_floor.max(spread)
    }

    /// Candidate windows for `timeline`.
    #[must_use]
    pub fn candidates(&self, timeline: &VideoTimeline) -> Vec<Interval> {
        self.settings.generator.generate(timeline)
    }

    /// Score every candidate in parallel. Zero-score candidates are dropped.
    #[must_use]
    pub fn score_candidates(
        &self,
        timeline: &VideoTimeline,
        candidates: &[Interval],
        analyzers: &Analyzers<'_>,
    ) -> Vec<ScoredInterval> {
        let scorer = IntervalScorer::new(self.settings.weights, self.min_duration_for(timeline));
        candidates
            .par_iter()
            .map(|interval| {
                let scores = analyzers.score(interval);
                ScoredInterval::new(*interval, scorer.score(interval, &scores))
            })
            .filter(|scored| scored.score > 0.0)
            .collect()
    }

    /// Select up to `num_shorts` clips from `candidates`. Performs no I/O.
    #[must_use]
    pub fn plan(
        &self,
        timeline: &VideoTimeline,
        candidates: &[Interval],
        analyzers: &Analyzers<'_>,
        num_shorts: usize,
    ) -> SelectionResult {
        if timeline.is_empty() || candidates.is_empty() || num_shorts == 0 {
            return SelectionResult::default();
        }

        let scored = self.score_candidates(timeline, candidates, analyzers);
        debug!(
            "{} of {} candidates scored above zero",
            scored.len(),
            candidates.len()
        );

        let balancer =
            RegionBalancer::new(RegionPartition::new(timeline, self.settings.region_count));
        let combined = balancer.balance(&scored, num_shorts.saturating_mul(CANDIDATES_PER_SHORT));

        let selector = OverlapSelector::new(
            self.settings.overlap_threshold,
            self.settings.footprint_threshold,
        );
        let min_separation = self.min_separation_for(timeline, num_shorts);
        let mut selection = selector.select(&combined, timeline, min_separation);
        selection.truncate(num_shorts);

        info!(
            "Selected {} clips (min separation {:.1}s{})",
            selection.len(),
            min_separation,
            if selection.used_fallback {
                ", fallback pass used"
            } else {
                ""
            }
        );
        selection
    }

    /// Extract each selected clip. Failed extractions are logged and dropped.
    pub fn extract(
        &self,
        timeline: &VideoTimeline,
        selection: &SelectionResult,
        extractor: &dyn ClipExtractor,
    ) -> Vec<GeneratedShort> {
        let mut shorts = Vec::with_capacity(selection.len());
        for (position, clip) in selection.clips.iter().enumerate() {
            let request = ClipRequest::from_selection(position + 1, clip, timeline);
            match extractor.extract(&request) {
                Ok(path) => shorts.push(GeneratedShort {
                    index: request.index,
                    path,
                    start: request.start,
                    end: request.end,
                    score: request.score,
                }),
                Err(e) => {
                    warn!(
                        "Dropping clip {} ({}s-{}s): {}",
                        request.index, request.start, request.end, e
                    );
                }
            }
        }
        shorts
    }

    /// Read the source duration from `provider`.
    pub fn timeline(&self, provider: &dyn TimelineProvider) -> Result<VideoTimeline> {
        let timeline = VideoTimeline::new(provider.duration()?);
        if timeline.is_empty() {
            warn!("Video has no usable duration, nothing to select");
        } else {
            info!("Video duration: {:.2}s", timeline.duration());
        }
        Ok(timeline)
    }

    /// Generate candidates for `timeline` and plan up to `num_shorts` clips.
    #[must_use]
    pub fn select(
        &self,
        timeline: &VideoTimeline,
        analyzers: &Analyzers<'_>,
        num_shorts: usize,
    ) -> SelectionResult {
        let candidates = self.candidates(timeline);
        info!("Generated {} candidate windows", candidates.len());
        self.plan(timeline, &candidates, analyzers, num_shorts)
    }

    /// Full run: probe duration, generate, score, select and extract.
    pub fn generate_shorts(
        &self,
        provider: &dyn TimelineProvider,
        analyzers: &Analyzers<'_>,
        extractor: &dyn ClipExtractor,
        num_shorts: usize,
    ) -> Result<Vec<GeneratedShort>> {
        let timeline = self.timeline(provider)?;
        let selection = self.select(&timeline, analyzers, num_shorts);
        Ok(self.extract(&timeline, &selection, extractor))
    }
}
