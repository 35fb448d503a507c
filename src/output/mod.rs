//! Result output: human report, JSON envelope and progress bars.

mod json_envelope;
pub mod progress;
mod report;

pub use json_envelope::{
    ConfigPayload, ENVELOPE_VERSION, EventType, JsonEnvelope, ResultType, ShortEntry, ShortsPayload,
};
pub use progress::ProgressExtractor;
pub use report::{emit_json_result, format_short, print_shorts};
