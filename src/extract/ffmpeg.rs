//! ffmpeg-backed clip extraction.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::Error;
use crate::config::ExtractConfig;
use crate::engine::{ClipExtractor, ClipRequest};

use super::naming::clip_filename;

/// Re-encodes each selected range of the source video with ffmpeg.
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    source: PathBuf,
    output_dir: PathBuf,
    settings: ExtractConfig,
    program: String,
    limit: Option<u64>,
}

impl FfmpegExtractor {
    /// Create an extractor writing clips of `source` into `output_dir`.
    #[must_use]
    pub fn new(source: &Path, output_dir: &Path, settings: ExtractConfig) -> Self {
        Self {
            source: source.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            settings,
            program: "ffmpeg".to_string(),
            limit: None,
        }
    }

    /// Use a specific ffmpeg binary.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Clamp clip ends to the whole-second duration of the source.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let limit = duration.max(0.0).floor() as u64;
        self.limit = Some(limit);
        self
    }

    /// Output path for `request`.
    #[must_use]
    pub fn output_path(&self, request: &ClipRequest) -> PathBuf {
        self.output_dir
            .join(clip_filename(request, &self.settings.container))
    }

    fn clamp(&self, request: &ClipRequest) -> ClipRequest {
        let Some(limit) = self.limit else {
            return *request;
        };
        ClipRequest {
            start: request.start.min(limit),
            end: request.end.min(limit),
            ..*request
        }
    }

    /// ffmpeg arguments for `request` written to `output`.
    fn arguments(&self, request: &ClipRequest, output: &Path) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-ss".to_string(),
            request.start.to_string(),
            "-i".to_string(),
            self.source.to_string_lossy().to_string(),
            "-t".to_string(),
            request.duration().to_string(),
            "-c:v".to_string(),
            self.settings.video_codec.clone(),
            "-preset".to_string(),
            self.settings.preset.clone(),
            "-c:a".to_string(),
            self.settings.audio_codec.clone(),
            "-threads".to_string(),
            self.settings.threads.to_string(),
            output.to_string_lossy().to_string(),
        ]
    }
}

impl ClipExtractor for FfmpegExtractor {
    fn extract(&self, request: &ClipRequest) -> Result<PathBuf, Error> {
        let request = self.clamp(request);
        request.validate()?;

        fs::create_dir_all(&self.output_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let output_path = self.output_path(&request);
        let args = self.arguments(&request, &output_path);
        debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| Error::ToolNotFound {
                tool: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::ExtractionFailed {
                path: output_path,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!(
            "Extracted clip {} ({}s-{}s) to {}",
            request.index,
            request.start,
            request.end,
            output_path.display()
        );
        Ok(output_path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(start: u64, end: u64) -> ClipRequest {
        ClipRequest {
            index: 1,
            start,
            end,
            score: 0.5,
        }
    }

    #[test]
    fn test_arguments_follow_settings() {
        let extractor = FfmpegExtractor::new(
            Path::new("talk.mp4"),
            Path::new("out"),
            ExtractConfig::default(),
        );
        let req = request(30, 55);
        let output = extractor.output_path(&req);
        let args = extractor.arguments(&req, &output);

        let pos = |flag: &str| args.iter().position(|a| a == flag).unwrap();
        assert_eq!(args[pos("-ss") + 1], "30");
        assert_eq!(args[pos("-t") + 1], "25");
        assert_eq!(args[pos("-c:v") + 1], "libx264");
        assert_eq!(args[pos("-c:a") + 1], "aac");
        assert_eq!(args[pos("-preset") + 1], "medium");
        assert_eq!(args[pos("-threads") + 1], "2");
        assert!(pos("-ss") < pos("-i"));
        assert!(
            args.last()
                .unwrap()
                .ends_with("short_1_score_50_time_30_55.mp4")
        );
    }

    #[test]
    fn test_empty_range_is_rejected_before_running() {
        let dir = TempDir::new().unwrap();
        let extractor = FfmpegExtractor::new(
            Path::new("talk.mp4"),
            dir.path(),
            ExtractConfig::default(),
        )
        .with_program("reelcut-no-such-ffmpeg");

        let err = extractor.extract(&request(40, 40)).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_range_is_clamped_to_duration() {
        let dir = TempDir::new().unwrap();
        let extractor = FfmpegExtractor::new(
            Path::new("talk.mp4"),
            dir.path(),
            ExtractConfig::default(),
        )
        .with_program("reelcut-no-such-ffmpeg")
        .with_duration(50.9);

        // Both ends clamp to 50: nothing left to extract
        let err = extractor.extract(&request(55, 70)).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_missing_ffmpeg_binary() {
        let dir = TempDir::new().unwrap();
        let extractor = FfmpegExtractor::new(
            Path::new("talk.mp4"),
            dir.path(),
            ExtractConfig::default(),
        )
        .with_program("reelcut-no-such-ffmpeg");

        let err = extractor.extract(&request(0, 20)).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }
}
