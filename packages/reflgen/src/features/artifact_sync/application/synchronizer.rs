//! Artifact synchronizer
//!
//! Equality-gated writes: an artifact is only replaced when its rendered
//! content differs from what is stored, so an unchanged source tree leaves
//! every artifact (and its modification time) alone.

use std::path::Path;

use tracing::{debug, info};

use crate::features::artifact_sync::domain::SyncOutcome;
use crate::features::artifact_sync::ports::ArtifactStore;
use crate::shared::models::Result;

pub struct ArtifactSynchronizer<S: ArtifactStore> {
    store: S,
}

impl<S: ArtifactStore> ArtifactSynchronizer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write `content` to `path` unless it is already there.
    ///
    /// A missing artifact counts as empty content.
    pub fn sync(&self, path: &Path, content: &str) -> Result<SyncOutcome> {
        let existing = self.store.read(path)?.unwrap_or_default();
        if existing == content {
            debug!(artifact = %path.display(), "artifact unchanged");
            return Ok(SyncOutcome::Unchanged);
        }

        self.store.write(path, content)?;
        info!(artifact = %path.display(), bytes = content.len(), "wrote artifact");
        Ok(SyncOutcome::Written)
    }

    pub fn exists(&self, path: &Path) -> Result<bool> {
        self.store.exists(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::artifact_sync::infrastructure::InMemoryArtifactStore;
    use std::path::PathBuf;

    #[test]
    fn test_first_sync_writes() {
        let sync = ArtifactSynchronizer::new(InMemoryArtifactStore::new());
        let path = Path::new("src/generated/a.gen.h");

        assert_eq!(sync.sync(path, "content").unwrap(), SyncOutcome::Written);
        assert_eq!(sync.store().get(path).as_deref(), Some("content"));
    }

    #[test]
    fn test_identical_content_is_not_rewritten() {
        let store = InMemoryArtifactStore::new();
        store.insert("a.gen.h", "same");
        let sync = ArtifactSynchronizer::new(store);

        assert_eq!(sync.sync(Path::new("a.gen.h"), "same").unwrap(), SyncOutcome::Unchanged);
        assert!(sync.store().writes().is_empty());
    }

    #[test]
    fn test_changed_content_is_rewritten_once() {
        let store = InMemoryArtifactStore::new();
        store.insert("a.gen.h", "old");
        let sync = ArtifactSynchronizer::new(store);

        assert!(sync.sync(Path::new("a.gen.h"), "new").unwrap().is_written());
        assert!(!sync.sync(Path::new("a.gen.h"), "new").unwrap().is_written());
        assert_eq!(sync.store().writes(), vec![PathBuf::from("a.gen.h")]);
    }

    #[test]
    fn test_empty_content_for_missing_artifact_is_unchanged() {
        let sync = ArtifactSynchronizer::new(InMemoryArtifactStore::new());

        assert_eq!(sync.sync(Path::new("none.gen.h"), "").unwrap(), SyncOutcome::Unchanged);
        assert!(!sync.exists(Path::new("none.gen.h")).unwrap());
    }
}
