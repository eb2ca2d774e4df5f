//! Parsing domain models

mod declaration;
mod parsed_unit;

pub use declaration::{DeclKind, Declaration};
pub use parsed_unit::{ParseDiagnostic, ParsedUnit};
