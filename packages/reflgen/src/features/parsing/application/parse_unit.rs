//! Parse unit use case

use std::path::Path;

use tracing::debug;

use crate::features::parsing::domain::ParsedUnit;
use crate::features::parsing::ports::DeclarationParser;
use crate::shared::models::Result;

/// Parse unit use case
pub struct ParseUnitUseCase<P: DeclarationParser> {
    parser: P,
}

impl<P: DeclarationParser> ParseUnitUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Execute the parse operation
    pub fn execute(&self, path: &Path) -> Result<ParsedUnit> {
        let unit = self.parser.parse_unit(path)?;
        debug!(
            unit = %unit.file_path.display(),
            language = self.parser.language_name(),
            files = unit.included_files.len(),
            declarations = unit.declaration_count(),
            "parsed translation unit"
        );
        Ok(unit)
    }
}
