//! CLI argument definitions.

use crate::analyzers::AnalysisInputs;
use crate::config::OutputMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::validators::{parse_min_duration, parse_num_shorts, parse_positive_seconds};

/// Turn a long-form video into short highlight clips.
#[derive(Debug, Parser)]
#[command(name = "reelcut")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Source video (mp4, mov, avi, webm, mkv).
    pub video: Option<PathBuf>,

    /// Options for highlight generation.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for a highlight run.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateArgs {
    /// Output directory for the shorts (default: ./output).
    #[arg(short, long, env = "REELCUT_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Number of shorts to generate.
    #[arg(short, long, value_parser = parse_num_shorts, env = "REELCUT_NUM_SHORTS")]
    pub num_shorts: Option<usize>,

    /// Minimum clip duration in seconds.
    #[arg(long, value_parser = parse_min_duration, env = "REELCUT_MIN_DURATION")]
    pub min_duration: Option<f64>,

    /// Scene cut list (CSV with a `Cut (s)` column).
    #[arg(long)]
    pub scenes: Option<PathBuf>,

    /// Audio RMS envelope (CSV with `Time (s)` and `RMS` columns).
    #[arg(long)]
    pub energy: Option<PathBuf>,

    /// Whisper-style transcript (JSON with a `segments` array).
    #[arg(long, conflicts_with = "skip_transcript")]
    pub transcript: Option<PathBuf>,

    /// Score text neutrally instead of using a transcript.
    #[arg(long)]
    pub skip_transcript: bool,

    /// Video duration in seconds (skips ffprobe).
    #[arg(long, value_parser = parse_positive_seconds)]
    pub duration: Option<f64>,

    /// Select clips without extracting them.
    #[arg(long)]
    pub dry_run: bool,

    /// Output format (human, json).
    #[arg(long, env = "REELCUT_FORMAT", default_value_t = OutputMode::Human)]
    pub format: OutputMode,

    /// Configuration file (default: platform config directory).
    #[arg(long, env = "REELCUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable progress bars.
    #[arg(long)]
    pub no_progress: bool,
}

impl GenerateArgs {
    /// Analysis artifact locations named on the command line.
    #[must_use]
    pub fn analysis_inputs(&self) -> AnalysisInputs {
        AnalysisInputs {
            scenes: self.scenes.clone(),
            energy: self.energy.clone(),
            transcript: self.transcript.clone(),
            skip_transcript: self.skip_transcript,
        }
    }

    /// Whether progress bars should be drawn.
    #[must_use]
    pub const fn progress_enabled(&self) -> bool {
        !self.quiet && !self.no_progress && !self.format.is_structured()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_simple() {
        let cli = Cli::try_parse_from(["reelcut", "talk.mp4"]).unwrap();
        assert_eq!(cli.video, Some(PathBuf::from("talk.mp4")));
        assert_eq!(cli.generate.format, OutputMode::Human);
        assert!(!cli.generate.dry_run);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "reelcut",
            "talk.mp4",
            "-n",
            "5",
            "--min-duration",
            "12",
            "--duration",
            "300",
            "--dry-run",
            "--format",
            "json",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.generate.num_shorts, Some(5));
        assert_eq!(cli.generate.min_duration, Some(12.0));
        assert_eq!(cli.generate.duration, Some(300.0));
        assert!(cli.generate.dry_run);
        assert_eq!(cli.generate.format, OutputMode::Json);
        assert!(cli.generate.quiet);
        assert!(!cli.generate.progress_enabled());
    }

    #[test]
    fn test_cli_rejects_zero_shorts() {
        assert!(Cli::try_parse_from(["reelcut", "talk.mp4", "-n", "0"]).is_err());
    }

    #[test]
    fn test_cli_transcript_conflicts_with_skip() {
        let cli = Cli::try_parse_from([
            "reelcut",
            "talk.mp4",
            "--transcript",
            "t.json",
            "--skip-transcript",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["reelcut", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn test_analysis_inputs() {
        let cli = Cli::try_parse_from([
            "reelcut",
            "talk.mp4",
            "--scenes",
            "cuts.csv",
            "--energy",
            "rms.csv",
            "--skip-transcript",
        ])
        .unwrap();
        let inputs = cli.generate.analysis_inputs();
        assert_eq!(inputs.scenes, Some(PathBuf::from("cuts.csv")));
        assert_eq!(inputs.energy, Some(PathBuf::from("rms.csv")));
        assert_eq!(inputs.transcript, None);
        assert!(inputs.skip_transcript);
    }
}
