//! Parser port (interface)
//!
//! Defines the contract for turning a root source file into a declaration
//! tree. Implementations must be deterministic for identical input.

use std::path::Path;

use crate::features::parsing::domain::ParsedUnit;
use crate::shared::models::Result;

/// Structural parser - abstraction over the parsing implementation
pub trait DeclarationParser: Send + Sync {
    /// Parse `path` and every project header it includes into one unit.
    ///
    /// Fails when no declaration tree can be produced for `path`.
    fn parse_unit(&self, path: &Path) -> Result<ParsedUnit>;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
