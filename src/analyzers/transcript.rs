//! Transcript-based scoring.
//!
//! Works over a Whisper-style JSON transcript. When no transcript is
//! available the scorer falls back to a duration heuristic favouring
//! clips of roughly thirty seconds.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::Error;
use crate::constants::analyzers::{
    NEUTRAL_SCORE, TEXT_DENSITY_BONUS, TEXT_DENSITY_RANGE, TEXT_KEYWORD_BONUS,
    TEXT_QUESTION_BONUS, TEXT_SILENT_SCORE,
};
use crate::engine::{CriterionScorer, Interval};

/// One timed transcript segment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptSegment {
    /// Start time in seconds.
    #[serde(default)]
    pub start: f64,
    /// End time in seconds.
    #[serde(default)]
    pub end: f64,
    /// Spoken text.
    #[serde(default)]
    pub text: String,
}

/// A Whisper-style transcript: `{ "segments": [{start, end, text}, ...] }`.
///
/// Unknown top-level fields such as `text` or `language` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Transcript {
    /// Timed segments in playback order.
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Load a transcript from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|e| Error::AnalysisRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        let transcript: Self =
            serde_json::from_str(&content).map_err(|e| Error::TranscriptParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        debug!(
            "Loaded {} transcript segments from {}",
            transcript.segments.len(),
            path.display()
        );
        Ok(transcript)
    }

    /// Text of every segment overlapping `interval`, joined by spaces.
    #[must_use]
    pub fn text_between(&self, interval: &Interval) -> String {
        self.segments
            .iter()
            .filter(|seg| seg.start <= interval.end && seg.end >= interval.start)
            .map(|seg| seg.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Highlight keywords and question detection.
#[derive(Debug, Clone)]
pub struct TextRules {
    keywords: Vec<String>,
    question: Option<Regex>,
}

impl TextRules {
    /// Build rules from keyword and interrogative word lists.
    ///
    /// Matching is case-insensitive. Interrogatives only count at the start
    /// of the text; a `?` anywhere always marks a question.
    pub fn new(keywords: &[String], question_words: &[String]) -> Result<Self, Error> {
        let keywords = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        let alternatives: Vec<String> = question_words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(&w))
            .collect();
        let question = if alternatives.is_empty() {
            None
        } else {
            let pattern = format!(r"^(?:{})\b", alternatives.join("|"));
            Some(Regex::new(&pattern).map_err(|e| Error::ConfigValidation {
                message: format!("invalid question word list: {e}"),
            })?)
        };

        Ok(Self { keywords, question })
    }

    /// Whether `text` mentions a highlight keyword.
    #[must_use]
    pub fn contains_keyword(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    /// Whether `text` reads as a question.
    #[must_use]
    pub fn is_question(&self, text: &str) -> bool {
        if text.contains('?') {
            return true;
        }
        let lower = text.trim_start().to_lowercase();
        self.question.as_ref().is_some_and(|re| re.is_match(&lower))
    }
}

/// Duration-only score used when no transcript exists.
#[must_use]
pub fn duration_heuristic(seconds: f64) -> f64 {
    if (25.0..=35.0).contains(&seconds) {
        0.6
    } else if (20.0..=40.0).contains(&seconds) {
        0.5
    } else {
        0.4
    }
}

/// Scores intervals by what is being said in them.
#[derive(Debug, Clone)]
pub struct TranscriptScorer {
    transcript: Option<Transcript>,
    rules: TextRules,
}

impl TranscriptScorer {
    /// Scorer over a loaded transcript.
    #[must_use]
    pub const fn new(transcript: Transcript, rules: TextRules) -> Self {
        Self {
            transcript: Some(transcript),
            rules,
        }
    }

    /// Scorer for a video whose transcription is unavailable.
    #[must_use]
    pub const fn unavailable(rules: TextRules) -> Self {
        Self {
            transcript: None,
            rules,
        }
    }

    /// Whether a transcript backs this scorer.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.transcript.is_some()
    }
}

impl CriterionScorer for TranscriptScorer {
    fn score(&self, interval: &Interval) -> f64 {
        let Some(transcript) = &self.transcript else {
            return duration_heuristic(interval.duration());
        };
        if transcript.segments.is_empty() {
            return NEUTRAL_SCORE;
        }

        let text = transcript.text_between(interval);
        if text.trim().is_empty() {
            return TEXT_SILENT_SCORE;
        }

        let mut score = NEUTRAL_SCORE;
        if self.rules.contains_keyword(&text) {
            score += TEXT_KEYWORD_BONUS;
        }
        if self.rules.is_question(&text) {
            score += TEXT_QUESTION_BONUS;
        }

        let duration = interval.duration();
        #[allow(clippy::cast_precision_loss)]
        let words = text.split_whitespace().count() as f64;
        let density = if duration > 0.0 { words / duration } else { 0.0 };
        let (low, high) = TEXT_DENSITY_RANGE;
        if (low..=high).contains(&density) {
            score += TEXT_DENSITY_BONUS;
        }

        score.min(1.0)
    }

    fn name(&self) -> &str {
        "transcript"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn interval(start: f64, end: f64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    fn rules() -> TextRules {
        let keywords: Vec<String> = ["important", "astuce", "n'oubliez pas"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let questions: Vec<String> = ["pourquoi", "comment", "why", "qui"]
            .iter()
            .map(ToString::to_string)
            .collect();
        TextRules::new(&keywords, &questions).unwrap()
    }

    fn segment(start: f64, end: f64, text: &str) -> TranscriptSegment {
        TranscriptSegment {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_unavailable_uses_duration_heuristic() {
        let scorer = TranscriptScorer::unavailable(rules());
        assert_eq!(scorer.score(&interval(0.0, 30.0)), 0.6);
        assert_eq!(scorer.score(&interval(0.0, 22.0)), 0.5);
        assert_eq!(scorer.score(&interval(0.0, 60.0)), 0.4);
    }

    #[test]
    fn test_empty_transcript_is_neutral() {
        let scorer = TranscriptScorer::new(Transcript::default(), rules());
        assert_eq!(scorer.score(&interval(0.0, 20.0)), 0.5);
    }

    #[test]
    fn test_silent_interval_scores_low() {
        let transcript = Transcript {
            segments: vec![segment(100.0, 110.0, "bonjour")],
        };
        let scorer = TranscriptScorer::new(transcript, rules());
        assert_eq!(scorer.score(&interval(0.0, 20.0)), 0.3);
    }

    #[test]
    fn test_keyword_question_and_density_bonuses() {
        let transcript = Transcript {
            segments: vec![
                segment(0.0, 5.0, " Pourquoi est-ce IMPORTANT"),
                segment(5.0, 10.0, " de bien dormir la nuit"),
            ],
        };
        let scorer = TranscriptScorer::new(transcript, rules());
        // 8 words over 10 seconds: density 0.8
        let score = scorer.score(&interval(0.0, 10.0));
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_bonus_only() {
        let transcript = Transcript {
            segments: vec![segment(0.0, 10.0, "le chat dort sur le canapé")],
        };
        let scorer = TranscriptScorer::new(transcript, rules());
        assert!((scorer.score(&interval(0.0, 10.0)) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_question_detection() {
        let rules = rules();
        assert!(rules.is_question("Tu viens ?"));
        assert!(rules.is_question("  Comment faire"));
        assert!(rules.is_question("Why not"));
        assert!(!rules.is_question("Quite a day"));
        assert!(!rules.is_question("On verra comment faire"));
    }

    #[test]
    fn test_keywords_are_case_insensitive_substrings() {
        let rules = rules();
        assert!(rules.contains_keyword("N'OUBLIEZ PAS ceci"));
        assert!(rules.contains_keyword("une petite astuce"));
        assert!(!rules.contains_keyword("rien de spécial"));
    }

    #[test]
    fn test_text_between_uses_inclusive_overlap() {
        let transcript = Transcript {
            segments: vec![
                segment(0.0, 5.0, "a"),
                segment(5.0, 10.0, "b"),
                segment(10.0, 15.0, "c"),
            ],
        };
        assert_eq!(transcript.text_between(&interval(5.0, 10.0)), "a b c");
        assert_eq!(transcript.text_between(&interval(11.0, 12.0)), "c");
    }

    #[test]
    fn test_load_whisper_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"text": "x", "language": "fr", "segments": [{{"id": 0, "start": 0.0, "end": 4.5, "text": " Salut"}}]}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let transcript = Transcript::from_file(file.path()).unwrap();
        assert_eq!(transcript.segments.len(), 1);
        assert_eq!(transcript.segments[0].end, 4.5);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        file.flush().unwrap();

        let err = Transcript::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::TranscriptParse { .. }));
    }
}
