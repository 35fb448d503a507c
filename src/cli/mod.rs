//! CLI argument parsing and command handling.

mod args;
mod validators;

pub use args::{Cli, Command, ConfigAction, GenerateArgs};
pub use validators::{parse_min_duration, parse_num_shorts, parse_positive_seconds};
