//! In-memory artifact store
//!
//! Keeps artifacts in a map and logs every write, so tests can assert on
//! exactly which paths were rewritten.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::features::artifact_sync::ports::ArtifactStore;
use crate::shared::models::Result;

#[derive(Debug, Default)]
pub struct InMemoryArtifactStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
    writes: Mutex<Vec<PathBuf>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an artifact without recording a write
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.lock().insert(path.into(), content.into());
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().get(path).cloned()
    }

    /// Paths written so far, in write order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().clone()
    }

    pub fn clear_writes(&self) {
        self.writes.lock().clear();
    }
}

impl ArtifactStore for InMemoryArtifactStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.get(path))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.files.lock().insert(path.to_path_buf(), content.to_string());
        self.writes.lock().push(path.to_path_buf());
        Ok(())
    }
}
