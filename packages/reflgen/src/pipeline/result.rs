//! Pipeline result types

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::features::artifact_sync::SyncOutcome;

/// What one run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Root compilation units parsed
    pub units_parsed: usize,
    /// Headers that became the active file
    pub files_processed: usize,
    pub classes_reflected: usize,
    /// Per-header artifacts rewritten, in write order
    pub artifacts_written: Vec<PathBuf>,
    pub artifacts_unchanged: usize,
    /// Registry synchronization, `None` if the run stopped early
    pub registry: Option<SyncOutcome>,
    /// Reflected types in registration order
    pub registered_types: Vec<String>,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Nothing on disk was touched
    pub fn is_noop(&self) -> bool {
        self.artifacts_written.is_empty() && !self.registry.is_some_and(SyncOutcome::is_written)
    }

    pub(crate) fn record_artifact(&mut self, path: PathBuf, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Written => self.artifacts_written.push(path),
            SyncOutcome::Unchanged => self.artifacts_unchanged += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} header(s) processed, {} class(es) reflected, {} artifact(s) written, {} unchanged",
            self.files_processed,
            self.classes_reflected,
            self.artifacts_written.len(),
            self.artifacts_unchanged
        )?;
        if let Some(outcome) = self.registry {
            write!(f, ", registry {}", outcome)?;
        }
        write!(f, " ({:.2?})", self.elapsed)
    }
}
