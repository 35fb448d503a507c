//! Progress bar utilities for clip extraction.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::Error;
use crate::engine::{ClipExtractor, ClipRequest};

/// Create a progress bar for extracting `total_clips` clips.
pub fn create_extraction_progress(total_clips: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_clips == 0 {
        return None;
    }

    let pb = ProgressBar::new(total_clips as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} shorts ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}

/// Increment a progress bar.
pub fn inc_progress(pb: Option<&ProgressBar>) {
    if let Some(pb) = pb {
        pb.inc(1);
    }
}

/// Advances a progress bar after every extraction attempt.
pub struct ProgressExtractor<'a> {
    inner: &'a dyn ClipExtractor,
    bar: Option<&'a ProgressBar>,
}

impl<'a> ProgressExtractor<'a> {
    /// Wrap `inner`, ticking `bar` once per clip.
    pub const fn new(inner: &'a dyn ClipExtractor, bar: Option<&'a ProgressBar>) -> Self {
        Self { inner, bar }
    }
}

impl ClipExtractor for ProgressExtractor<'_> {
    fn extract(&self, request: &ClipRequest) -> Result<PathBuf, Error> {
        let result = self.inner.extract(request);
        inc_progress(self.bar);
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Echo;

    impl ClipExtractor for Echo {
        fn extract(&self, request: &ClipRequest) -> Result<PathBuf, Error> {
            request.validate()?;
            Ok(PathBuf::from(format!("clip_{}", request.index)))
        }
    }

    fn request(index: usize, end: u64) -> ClipRequest {
        ClipRequest {
            index,
            start: 10,
            end,
            score: 0.5,
        }
    }

    #[test]
    fn test_disabled_progress() {
        assert!(create_extraction_progress(3, false).is_none());
        assert!(create_extraction_progress(0, true).is_none());
    }

    #[test]
    fn test_progress_counts_failures_too() {
        let bar = ProgressBar::hidden();
        bar.set_length(2);
        let extractor = ProgressExtractor::new(&Echo, Some(&bar));

        assert_eq!(
            extractor.extract(&request(1, 30)).unwrap(),
            PathBuf::from("clip_1")
        );
        assert!(extractor.extract(&request(2, 10)).is_err());
        assert_eq!(bar.position(), 2);
    }
}
