//! Parsing Feature
//!
//! Turns a root source file into a declaration tree with file/line positions.
//!
//! ## Structure
//! - `domain/` - Declaration, DeclKind, ParsedUnit
//! - `ports/` - DeclarationParser trait
//! - `application/` - ParseUnitUseCase
//! - `infrastructure/` - CppDeclarationParser (tree-sitter)

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::ParseUnitUseCase;
pub use domain::{DeclKind, Declaration, ParseDiagnostic, ParsedUnit};
pub use infrastructure::CppDeclarationParser;
pub use ports::DeclarationParser;
