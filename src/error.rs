//! Error types for reelcut.

/// Result type alias for reelcut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for reelcut.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Source video does not exist.
    #[error("video file does not exist: {path}")]
    VideoNotFound {
        /// Path to the missing video.
        path: std::path::PathBuf,
    },

    /// Source video has an unsupported extension.
    #[error("unsupported video format '{path}' (expected one of: {expected})")]
    UnsupportedVideoFormat {
        /// Path to the video.
        path: std::path::PathBuf,
        /// Comma-separated list of supported extensions.
        expected: String,
    },

    /// Failed to open an analysis artifact.
    #[error("failed to read analysis file '{path}'")]
    AnalysisRead {
        /// Path to the analysis file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to parse a CSV analysis artifact.
    #[error("failed to parse analysis file '{path}'")]
    AnalysisParse {
        /// Path to the analysis file.
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Analysis artifact content is malformed.
    #[error("invalid analysis file format: {message}")]
    InvalidAnalysisFormat {
        /// Description of the format error.
        message: String,
    },

    /// Failed to parse a transcript.
    #[error("failed to parse transcript '{path}'")]
    TranscriptParse {
        /// Path to the transcript file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// An external tool could not be started.
    #[error("failed to run '{tool}' (is it installed and on PATH?)")]
    ToolNotFound {
        /// Name of the tool.
        tool: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// ffprobe did not report a usable duration.
    #[error("failed to probe duration of '{path}': {reason}")]
    ProbeFailed {
        /// Path to the probed video.
        path: std::path::PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// Duration value is not usable.
    #[error("invalid duration: {value}")]
    InvalidDuration {
        /// Invalid value.
        value: f64,
    },

    /// Clip time range is empty or reversed.
    #[error("invalid time range: start ({start}) must be less than end ({end})")]
    InvalidTimeRange {
        /// Start time in seconds.
        start: f64,
        /// End time in seconds.
        end: f64,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// ffmpeg failed to produce a clip.
    #[error("failed to extract clip '{path}': {stderr}")]
    ExtractionFailed {
        /// Path of the clip that was being written.
        path: std::path::PathBuf,
        /// ffmpeg diagnostic output.
        stderr: String,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON output")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
