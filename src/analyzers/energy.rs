//! Audio energy scoring over a pre-computed RMS envelope.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::Error;
use crate::constants::analyzers::{
    ENERGY_MEAN_WEIGHT, ENERGY_PEAK_WEIGHT, ENERGY_SPACING_TOLERANCE, NEUTRAL_SCORE,
};
use crate::engine::{CriterionScorer, Interval};

/// Internal record for CSV deserialization.
#[derive(Debug, Deserialize)]
struct EnergyRecord {
    #[serde(rename = "Time (s)")]
    time: f64,
    #[serde(rename = "RMS")]
    rms: f32,
}

/// Frame-wise RMS energy of the audio track.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyEnvelope {
    /// Seconds between consecutive frames.
    pub frame_duration: f64,
    /// RMS value per frame.
    pub rms: Vec<f32>,
}

impl EnergyEnvelope {
    /// Load an envelope from a CSV file with `Time (s)` and `RMS` columns.
    ///
    /// The frame duration is the spacing of the first two rows. Rows must
    /// increase, and every later gap must stay within half a frame of it.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| Error::AnalysisParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut times = Vec::new();
        let mut rms = Vec::new();
        for (line_num, result) in reader.deserialize::<EnergyRecord>().enumerate() {
            let record = result.map_err(|e| Error::InvalidAnalysisFormat {
                message: format!("{} line {}: {e}", path.display(), line_num + 2),
            })?;
            if times.last().is_some_and(|&prev| record.time <= prev) {
                return Err(Error::InvalidAnalysisFormat {
                    message: format!(
                        "{} line {}: time ({}) must increase",
                        path.display(),
                        line_num + 2,
                        record.time
                    ),
                });
            }
            if let ([first, second, ..], Some(prev)) = (times.as_slice(), times.last()) {
                let frame = second - first;
                let gap = record.time - prev;
                if (gap - frame).abs() > frame * ENERGY_SPACING_TOLERANCE {
                    return Err(Error::InvalidAnalysisFormat {
                        message: format!(
                            "{} line {}: gap of {gap}s breaks the {frame}s frame spacing",
                            path.display(),
                            line_num + 2
                        ),
                    });
                }
            }
            times.push(record.time);
            rms.push(record.rms);
        }

        let frame_duration = match times.as_slice() {
            [first, second, ..] => second - first,
            _ => 1.0,
        };
        debug!(
            "Loaded {} energy frames ({:.3}s each) from {}",
            rms.len(),
            frame_duration,
            path.display()
        );

        Ok(Self {
            frame_duration,
            rms,
        })
    }

    /// Index of the frame containing `seconds`, clamped to the envelope.
    fn frame_at(&self, seconds: f64) -> usize {
        let last = self.rms.len().saturating_sub(1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let frame = (seconds / self.frame_duration).max(0.0) as usize;
        frame.min(last)
    }

    /// Largest RMS value in the envelope.
    fn global_max(&self) -> f32 {
        self.rms.iter().copied().fold(0.0, f32::max)
    }
}

/// Scores intervals by mean and peak loudness relative to the loudest frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyScorer {
    envelope: EnergyEnvelope,
    global_max: f32,
}

impl EnergyScorer {
    /// Create a scorer over `envelope`.
    #[must_use]
    pub fn new(envelope: EnergyEnvelope) -> Self {
        let global_max = envelope.global_max();
        Self {
            envelope,
            global_max,
        }
    }

    /// Load the envelope from `path` and build a scorer.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        EnergyEnvelope::from_file(path).map(Self::new)
    }

    fn normalized(&self, value: f32) -> f64 {
        if self.global_max > 0.0 {
            f64::from(value / self.global_max)
        } else {
            NEUTRAL_SCORE
        }
    }
}

impl CriterionScorer for EnergyScorer {
    fn score(&self, interval: &Interval) -> f64 {
        let envelope = &self.envelope;
        if envelope.rms.is_empty()
            || !envelope.frame_duration.is_finite()
            || envelope.frame_duration <= 0.0
        {
            return NEUTRAL_SCORE;
        }

        let start = envelope.frame_at(interval.start);
        let end = envelope.frame_at(interval.end);
        if start >= end {
            return NEUTRAL_SCORE;
        }

        let frames = &envelope.rms[start..end];
        #[allow(clippy::cast_precision_loss)]
        let mean = frames.iter().map(|&v| f64::from(v)).sum::<f64>() / frames.len() as f64;
        let peak = frames.iter().copied().fold(0.0, f32::max);

        #[allow(clippy::cast_possible_truncation)]
        let mean_score = self.normalized(mean as f32);
        let peak_score = self.normalized(peak);

        (ENERGY_MEAN_WEIGHT * mean_score + ENERGY_PEAK_WEIGHT * peak_score).clamp(0.0, 1.0)
    }

    fn name(&self) -> &str {
        "energy"
    }
}
