//! Analyzer collaborators backed by pre-computed analysis artifacts.
//!
//! Each analyzer scores arbitrary intervals for one criterion. None of them
//! touch the video signal: scene cuts, RMS envelopes and transcripts are
//! produced upstream and loaded here.

mod energy;
mod neutral;
mod scene;
mod timeline;
mod transcript;

pub use energy::{EnergyEnvelope, EnergyScorer};
pub use neutral::NeutralScorer;
pub use scene::{SceneCutScorer, parse_scene_cuts};
pub use timeline::{FfprobeTimeline, FixedTimeline};
pub use transcript::{
    TextRules, Transcript, TranscriptScorer, TranscriptSegment, duration_heuristic,
};

use std::path::PathBuf;

use tracing::{info, warn};

use crate::Error;
use crate::config::TextConfig;
use crate::engine::{Analyzers, CriterionScorer};

/// Locations of the analysis artifacts for one video.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisInputs {
    /// Scene cut list (CSV, `Cut (s)`).
    pub scenes: Option<PathBuf>,
    /// RMS energy envelope (CSV, `Time (s)`, `RMS`).
    pub energy: Option<PathBuf>,
    /// Whisper-style transcript (JSON).
    pub transcript: Option<PathBuf>,
    /// Score text neutrally instead of reading a transcript.
    pub skip_transcript: bool,
}

/// Owned analyzers for one run.
pub struct AnalyzerSet {
    video: Box<dyn CriterionScorer>,
    audio: Box<dyn CriterionScorer>,
    text: Box<dyn CriterionScorer>,
}

impl AnalyzerSet {
    /// Build analyzers from `inputs`.
    ///
    /// Missing scene cuts mean no cuts were detected; a missing energy
    /// envelope scores audio neutrally. An unreadable transcript is treated
    /// as a failed transcription.
    pub fn load(inputs: &AnalysisInputs, text_config: &TextConfig) -> Result<Self, Error> {
        let video: Box<dyn CriterionScorer> = match &inputs.scenes {
            Some(path) => Box::new(SceneCutScorer::from_file(path)?),
            None => Box::new(SceneCutScorer::default()),
        };

        let audio: Box<dyn CriterionScorer> = match &inputs.energy {
            Some(path) => Box::new(EnergyScorer::from_file(path)?),
            None => Box::new(NeutralScorer::default()),
        };

        let text: Box<dyn CriterionScorer> = if inputs.skip_transcript {
            Box::new(NeutralScorer::default())
        } else {
            let rules = TextRules::new(&text_config.keywords, &text_config.question_words)?;
            match &inputs.transcript {
                Some(path) => match Transcript::from_file(path) {
                    Ok(transcript) => Box::new(TranscriptScorer::new(transcript, rules)),
                    Err(e) => {
                        warn!("Transcript unavailable, scoring text by duration: {e}");
                        Box::new(TranscriptScorer::unavailable(rules))
                    }
                },
                None => Box::new(TranscriptScorer::unavailable(rules)),
            }
        };

        info!(
            "Analyzers: video={}, audio={}, text={}",
            video.name(),
            audio.name(),
            text.name()
        );
        Ok(Self { video, audio, text })
    }

    /// Borrow the analyzers for the engine.
    #[must_use]
    pub fn as_analyzers(&self) -> Analyzers<'_> {
        Analyzers {
            video: self.video.as_ref(),
            audio: self.audio.as_ref(),
            text: self.text.as_ref(),
        }
    }
}

impl std::fmt::Debug for AnalyzerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.as_analyzers(), f)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::engine::Interval;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_artifacts() {
        let set = AnalyzerSet::load(&AnalysisInputs::default(), &TextConfig::default()).unwrap();
        let analyzers = set.as_analyzers();
        let interval = Interval::new(0.0, 30.0).unwrap();
        let scores = analyzers.score(&interval);
        assert_eq!(scores.video, 0.5);
        assert_eq!(scores.audio, 0.5);
        assert_eq!(scores.text, 0.6);
    }

    #[test]
    fn test_skip_transcript_is_neutral() {
        let inputs = AnalysisInputs {
            transcript: Some(PathBuf::from("/nonexistent.json")),
            skip_transcript: true,
            ..AnalysisInputs::default()
        };
        let set = AnalyzerSet::load(&inputs, &TextConfig::default()).unwrap();
        assert_eq!(set.as_analyzers().text.name(), "neutral");
    }

    #[test]
    fn test_unreadable_transcript_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{broken").unwrap();
        file.flush().unwrap();
        let inputs = AnalysisInputs {
            transcript: Some(file.path().to_path_buf()),
            ..AnalysisInputs::default()
        };
        let set = AnalyzerSet::load(&inputs, &TextConfig::default()).unwrap();
        let interval = Interval::new(0.0, 60.0).unwrap();
        assert_eq!(set.as_analyzers().text.score(&interval), 0.4);
    }

    #[test]
    fn test_missing_scene_file_is_an_error() {
        let inputs = AnalysisInputs {
            scenes: Some(PathBuf::from("/nonexistent/cuts.csv")),
            ..AnalysisInputs::default()
        };
        assert!(AnalyzerSet::load(&inputs, &TextConfig::default()).is_err());
    }
}
