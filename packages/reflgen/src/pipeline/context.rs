//! Run state
//!
//! Everything that changes during a run is held here and threaded through
//! the walker by reference: the headers open in the current unit (one of
//! them active), the headers already finished, and the registry.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::features::annotation::MarkerQueue;
use crate::features::codegen::{ArtifactBuffer, ProjectRegistry};

use super::result::RunSummary;

/// A header open in the current unit
#[derive(Debug, Clone)]
pub struct FileState {
    pub path: PathBuf,
    pub queue: MarkerQueue,
    pub buffer: ArtifactBuffer,
    pub generated_path: PathBuf,
}

impl FileState {
    pub fn new(path: PathBuf, queue: MarkerQueue, generated_path: PathBuf) -> Self {
        Self {
            buffer: ArtifactBuffer::new(path.clone()),
            path,
            queue,
            generated_path,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunContext {
    /// Headers opened during the current unit, in discovery order
    pub(super) open: Vec<FileState>,
    /// Index into `open` of the header receiving declarations
    pub(super) active: Option<usize>,
    finalized: FxHashSet<PathBuf>,
    pub registry: ProjectRegistry,
    pub summary: RunSummary,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&FileState> {
        self.open.get(self.active?)
    }

    pub fn is_active(&self, path: &Path) -> bool {
        self.active().is_some_and(|f| f.path == path)
    }

    /// Header was opened in an earlier unit of this run and is finished
    pub fn is_finalized(&self, path: &Path) -> bool {
        self.finalized.contains(path)
    }

    /// Open a header for the first time and make it active
    pub fn activate(&mut self, state: FileState) {
        self.summary.files_processed += 1;
        self.open.push(state);
        self.active = Some(self.open.len() - 1);
    }

    /// Make an already open header active again, keeping its queue and buffer.
    ///
    /// Returns false when the header is not open in this unit.
    pub fn resume(&mut self, path: &Path) -> bool {
        match self.open.iter().position(|f| f.path == path) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    /// Close every open header, in discovery order, marking them finished
    pub fn take_open(&mut self) -> Vec<FileState> {
        self.active = None;
        let states = std::mem::take(&mut self.open);
        self.finalized
            .extend(states.iter().map(|state| state.path.clone()));
        states
    }
}
