use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store for testing.
#[derive(Default)]
pub struct MemoryArtifactStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
    read_only: bool,
}

impl MemoryArtifactStore {
    /// A store that rejects every write.
    pub fn read_only() -> Self {
        Self { read_only: true, ..Default::default() }
    }

    pub fn content_of(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn written(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn write_artifact(
        &self,
        dir: &Path,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf, AppError> {
        let path = dir.join(file_name);
        if self.read_only {
            return Err(AppError::ArtifactWrite {
                path,
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
            });
        }
        self.files.borrow_mut().insert(path.clone(), content.to_string());
        Ok(path)
    }
}
