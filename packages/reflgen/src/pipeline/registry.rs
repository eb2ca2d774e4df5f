//! Registry aggregator
//!
//! Renders the run's registry into the project-level artifact once every
//! unit has been walked.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::features::artifact_sync::{ArtifactStore, ArtifactSynchronizer, SyncOutcome};
use crate::features::codegen::{MetadataEmitter, MetadataRenderer, ProjectRegistry};
use crate::shared::models::Result;

#[derive(Debug, Clone)]
pub struct RegistryAggregator {
    path: PathBuf,
}

impl RegistryAggregator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Always synchronized, even with no types
    pub fn finalize<R: MetadataRenderer, S: ArtifactStore>(
        &self,
        registry: &ProjectRegistry,
        emitter: &MetadataEmitter<R>,
        synchronizer: &ArtifactSynchronizer<S>,
    ) -> Result<SyncOutcome> {
        let content = emitter.render_registry(registry);
        let outcome = synchronizer.sync(&self.path, &content)?;
        info!(
            registry = %self.path.display(),
            types = registry.len(),
            outcome = outcome.as_str(),
            "registry synchronized"
        );
        Ok(outcome)
    }
}
