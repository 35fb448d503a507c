//! Video duration providers.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::Error;
use crate::engine::TimelineProvider;

/// Probes the duration with `ffprobe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfprobeTimeline {
    source: PathBuf,
    program: String,
}

impl FfprobeTimeline {
    /// Probe `source` with the `ffprobe` found on `PATH`.
    #[must_use]
    pub fn new(source: &Path) -> Self {
        Self::with_program(source, "ffprobe")
    }

    /// Probe `source` with a specific ffprobe binary.
    #[must_use]
    pub fn with_program(source: &Path, program: impl Into<String>) -> Self {
        Self {
            source: source.to_path_buf(),
            program: program.into(),
        }
    }
}

impl TimelineProvider for FfprobeTimeline {
    fn duration(&self) -> Result<f64, Error> {
        debug!("Probing duration of {}", self.source.display());
        let output = Command::new(&self.program)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(&self.source)
            .output()
            .map_err(|e| Error::ToolNotFound {
                tool: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::ProbeFailed {
                path: self.source.clone(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_duration(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
            Error::ProbeFailed {
                path: self.source.clone(),
                reason: "no duration in ffprobe output".to_string(),
            }
        })
    }
}

/// Parse ffprobe's bare duration output.
fn parse_duration(stdout: &str) -> Option<f64> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .and_then(|line| line.parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
}

/// A duration known up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimeline(f64);

impl FixedTimeline {
    /// Create a provider for `seconds`.
    pub fn new(seconds: f64) -> Result<Self, Error> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(Error::InvalidDuration { value: seconds });
        }
        Ok(Self(seconds))
    }
}

impl TimelineProvider for FixedTimeline {
    fn duration(&self) -> Result<f64, Error> {
        Ok(self.0)
    }
}
