//! Result reporting for both output modes.

#![allow(clippy::print_stdout)]

use crate::engine::{GeneratedShort, score_percent};
use crate::output::json_envelope::{EventType, JsonEnvelope};

/// One human-readable line for `short`.
pub fn format_short(short: &GeneratedShort) -> String {
    format!(
        "  #{:<2} {:>5}s - {:>5}s  ({:>3}s)  score {:>3}%  {}",
        short.index,
        short.start,
        short.end,
        short.duration(),
        score_percent(short.score),
        short.path.display()
    )
}

/// Print the generated shorts for a human reader.
pub fn print_shorts(shorts: &[GeneratedShort], requested: usize, dry_run: bool) {
    if shorts.is_empty() {
        println!("No shorts generated.");
        return;
    }

    let verb = if dry_run { "Planned" } else { "Generated" };
    println!("{verb} {} of {requested} shorts:", shorts.len());
    for short in shorts {
        println!("{}", format_short(short));
    }
}

/// Emit a JSON result event to stdout.
pub fn emit_json_result<T: serde::Serialize>(payload: &T) {
    let envelope = JsonEnvelope::new(EventType::Result, payload);
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            // Log to stderr so it doesn't corrupt JSON output stream
            tracing::error!("failed to serialize JSON result: {e}");
        }
    }
}
