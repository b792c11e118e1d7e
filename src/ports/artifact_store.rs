//! Output artifact port definition.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for persisting generated components.
pub trait ArtifactStore {
    /// Write `content` to `file_name` under `dir`, replacing any existing file.
    ///
    /// Returns the path written. The content is stored byte-for-byte.
    fn write_artifact(&self, dir: &Path, file_name: &str, content: &str)
    -> Result<PathBuf, AppError>;
}
