use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Filesystem-based artifact store.
///
/// Relative output directories resolve against `root`.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create an artifact store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create an artifact store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn write_artifact(
        &self,
        dir: &Path,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf, AppError> {
        let relative: PathBuf =
            dir.components().filter(|part| !matches!(part, Component::CurDir)).collect();
        let target_dir =
            if relative.as_os_str().is_empty() { self.root.clone() } else { self.root.join(relative) };
        let path = target_dir.join(file_name);
        let write_error = |source| AppError::ArtifactWrite { path: path.clone(), source };

        fs::create_dir_all(&target_dir).map_err(write_error)?;
        if path.exists() {
            warn!(path = %path.display(), "Overwriting existing file");
        }
        fs::write(&path, content).map_err(write_error)?;

        debug!(path = %path.display(), bytes = content.len(), "Wrote artifact");
        Ok(path)
    }
}
