//! Clip extraction collaborators.
//!
//! [`FfmpegExtractor`] re-encodes selected ranges of the source video;
//! [`DryRunExtractor`] only reports the paths it would write.

mod dry_run;
mod ffmpeg;
mod naming;

pub use dry_run::DryRunExtractor;
pub use ffmpeg::FfmpegExtractor;
pub use naming::clip_filename;
