//! Artifact Store Port
//!
//! Persistent storage for generated artifacts:
//! - Production: local filesystem with atomic replace
//! - Testing: in-memory map with a write log

use std::path::Path;

use crate::shared::models::Result;

pub trait ArtifactStore: Send + Sync {
    /// Current content, `None` when the artifact does not exist
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Replace the artifact with `content` in full
    ///
    /// Missing parent directories are created.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.read(path)?.is_some())
    }
}
