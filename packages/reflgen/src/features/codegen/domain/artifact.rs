//! Emission state
//!
//! Rendered blocks accumulated per header, and the run-wide list of
//! reflected type names.

use std::path::{Path, PathBuf};

/// Rendered metadata blocks for one header, in correlation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactBuffer {
    source: PathBuf,
    blocks: Vec<String>,
}

impl ArtifactBuffer {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            blocks: Vec::new(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn push(&mut self, block: String) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Append-only list of reflected types, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRegistry {
    type_names: Vec<String>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, qualified_name: impl Into<String>) {
        self.type_names.push(qualified_name.into());
    }

    pub fn type_names(&self) -> &[String] {
        &self.type_names
    }

    pub fn len(&self) -> usize {
        self.type_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_names.is_empty()
    }
}
