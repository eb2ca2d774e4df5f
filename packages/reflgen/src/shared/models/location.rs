//! Source location types
//!
//! Positions reported by the structural parser. Lines are 1-based, matching
//! the line numbers the annotation scanner assigns to markers.

use std::path::{Path, PathBuf};

/// Declaring file and line of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// `line` is immediately after `other_line`
    pub fn directly_follows(&self, other_line: u32) -> bool {
        self.line == other_line + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directly_follows() {
        let loc = SourceLocation::new("src/a.h", 4);
        assert!(loc.directly_follows(3));
        assert!(!loc.directly_follows(2));
        assert!(!loc.directly_follows(4));
    }
}
