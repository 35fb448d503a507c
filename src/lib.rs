//! Reelcut - highlight shorts from long-form video.
//!
//! This crate scores overlapping candidate windows of a video against
//! pre-computed scene, audio-energy and transcript analyses, picks a small
//! non-redundant and well-spread set of clips, and cuts them with ffmpeg.

#![warn(missing_docs)]

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod extract;
pub mod output;

use analyzers::{AnalyzerSet, FfprobeTimeline, FixedTimeline};
use clap::{CommandFactory, Parser};
use cli::{Cli, Command, ConfigAction, GenerateArgs};
use config::{Config, OutputMode, load_config, resolve_config_path, save_config, validate_config};
use constants::DEFAULT_OUTPUT_DIR;
use constants::extract::VIDEO_EXTENSIONS;
use engine::{ClipExtractor, EngineSettings, HighlightEngine, TimelineProvider};
use extract::{DryRunExtractor, FfmpegExtractor};
use output::{ConfigPayload, ProgressExtractor, ResultType, ShortEntry, ShortsPayload, progress};
use std::path::{Path, PathBuf};
use tracing::warn;

pub use error::{Error, Result};

/// Main entry point for reelcut CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.generate.verbose, cli.generate.quiet);

    if let Some(command) = cli.command {
        return handle_command(command, &cli.generate);
    }

    let Some(video) = cli.video else {
        Cli::command().print_help()?;
        return Ok(());
    };

    generate(&video, &cli.generate)
}

/// Run the full pipeline for one video.
fn generate(video: &Path, args: &GenerateArgs) -> Result<()> {
    validate_video(video)?;

    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args);
    validate_config(&config)?;

    let num_shorts = config.selection.num_shorts;
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let analyzer_set = AnalyzerSet::load(&args.analysis_inputs(), &config.text)?;
    let analyzers = analyzer_set.as_analyzers();

    let provider: Box<dyn TimelineProvider> = match args.duration {
        Some(seconds) => Box::new(FixedTimeline::new(seconds)?),
        None => Box::new(FfprobeTimeline::new(video)),
    };
    let engine = HighlightEngine::new(EngineSettings::from_config(&config));
    let timeline = engine.timeline(provider.as_ref())?;
    let selection = engine.select(&timeline, &analyzers, num_shorts);

    let extractor: Box<dyn ClipExtractor> = if args.dry_run {
        Box::new(DryRunExtractor::new(&output_dir, &config.extract.container))
    } else {
        Box::new(
            FfmpegExtractor::new(video, &output_dir, config.extract.clone())
                .with_duration(timeline.duration()),
        )
    };

    let bar = progress::create_extraction_progress(selection.len(), args.progress_enabled());
    let tracked = ProgressExtractor::new(extractor.as_ref(), bar.as_ref());
    let shorts = engine.extract(&timeline, &selection, &tracked);
    progress::finish_progress(bar, "Complete");

    if shorts.len() < selection.len() {
        warn!(
            "{} of {} clips failed to extract",
            selection.len() - shorts.len(),
            selection.len()
        );
    }

    match args.format {
        OutputMode::Json => {
            let payload = ShortsPayload {
                result_type: ResultType::Shorts,
                video: video.to_path_buf(),
                duration: timeline.duration(),
                output_dir,
                dry_run: args.dry_run,
                requested: num_shorts,
                used_fallback: selection.used_fallback,
                shorts: shorts.iter().map(ShortEntry::from).collect(),
            };
            output::emit_json_result(&payload);
        }
        OutputMode::Human => output::print_shorts(&shorts, num_shorts, args.dry_run),
    }

    Ok(())
}

/// Check that `video` exists and has a supported container extension.
pub fn validate_video(video: &Path) -> Result<()> {
    if !video.is_file() {
        return Err(Error::VideoNotFound {
            path: video.to_path_buf(),
        });
    }

    let supported = video
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        });

    if !supported {
        return Err(Error::UnsupportedVideoFormat {
            path: video.to_path_buf(),
            expected: VIDEO_EXTENSIONS.join(", "),
        });
    }

    Ok(())
}

/// Command-line flags take precedence over the configuration file.
fn apply_overrides(config: &mut Config, args: &GenerateArgs) {
    if let Some(num_shorts) = args.num_shorts {
        config.selection.num_shorts = num_shorts;
    }
    if let Some(min_duration) = args.min_duration {
        config.selection.min_duration = min_duration;
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // stdout is reserved for results
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command, args: &GenerateArgs) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, args),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction, args: &GenerateArgs) -> Result<()> {
    let path = resolve_config_path(args.config.as_deref())?;

    match action {
        ConfigAction::Init => {
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config(args.config.as_deref())?;
            if args.format.is_structured() {
                let payload = ConfigPayload {
                    result_type: ResultType::Config,
                    config_path: path,
                    config: serde_json::to_value(&config)
                        .map_err(|e| Error::JsonSerialize { source: e })?,
                };
                output::emit_json_result(&payload);
            } else {
                let contents = toml::to_string_pretty(&config)
                    .map_err(|e| Error::ConfigSerialize { source: e })?;
                println!("# {}", path.display());
                println!("{contents}");
            }
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
