//! Clip file naming.

use crate::engine::ClipRequest;

/// Sanitize a string for use as a filename component.
///
/// Replaces characters that are invalid in filenames across platforms
/// and prevents path traversal.
pub(crate) fn sanitize_component(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            _ => c,
        })
        .collect();

    sanitized.replace("..", "__")
}

/// Filename for an extracted clip.
///
/// Format: `short_{index}_score_{percent}_time_{start}_{end}.{container}`
/// Example: `short_1_score_87_time_120_145.mp4`
pub fn clip_filename(request: &ClipRequest, container: &str) -> String {
    let container = sanitize_component(container.trim_start_matches('.'));
    format!(
        "short_{}_score_{}_time_{}_{}.{}",
        request.index,
        request.score_percent(),
        request.start,
        request.end,
        container
    )
}
