//! Extraction planner that writes nothing.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Error;
use crate::engine::{ClipExtractor, ClipRequest};

use super::naming::clip_filename;

/// Reports where each clip would be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunExtractor {
    output_dir: PathBuf,
    container: String,
}

impl DryRunExtractor {
    /// Plan clips into `output_dir` with the given container extension.
    #[must_use]
    pub fn new(output_dir: &Path, container: &str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            container: container.to_string(),
        }
    }
}

impl ClipExtractor for DryRunExtractor {
    fn extract(&self, request: &ClipRequest) -> Result<PathBuf, Error> {
        request.validate()?;
        let path = self
            .output_dir
            .join(clip_filename(request, &self.container));
        debug!("Dry run: would write {}", path.display());
        Ok(path)
    }
}
