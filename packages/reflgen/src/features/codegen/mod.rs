//! Codegen Feature
//!
//! Renders correlated metadata into target-language source.
//!
//! ## Structure
//! - `domain/` - ArtifactBuffer, ProjectRegistry
//! - `ports/` - MetadataRenderer trait
//! - `application/` - MetadataEmitter
//! - `infrastructure/` - CppMacroRenderer

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::MetadataEmitter;
pub use domain::{ArtifactBuffer, ProjectRegistry};
pub use infrastructure::CppMacroRenderer;
pub use ports::MetadataRenderer;
