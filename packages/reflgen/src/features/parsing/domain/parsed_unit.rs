//! Parsed translation unit
//!
//! The declaration tree of one root source file with every project header it
//! includes spliced in place.

use std::path::PathBuf;

use super::declaration::Declaration;

/// Result of parsing one root source file
#[derive(Debug, Clone)]
pub struct ParsedUnit {
    /// Synthetic `TranslationUnit` root
    pub root: Declaration,

    /// Normalised path of the root file
    pub file_path: PathBuf,

    /// Files spliced into the unit, in first-inclusion order (root first)
    pub included_files: Vec<PathBuf>,

    /// Files whose syntax tree contained errors
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Recovered syntax errors in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub file: PathBuf,
    pub error_count: usize,
}

impl ParsedUnit {
    pub fn new(root: Declaration, file_path: PathBuf) -> Self {
        Self {
            root,
            file_path,
            included_files: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Total declarations in the unit (root excluded)
    pub fn declaration_count(&self) -> usize {
        self.root.descendants().len() - 1
    }
}
