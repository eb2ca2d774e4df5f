//! Codegen domain models

pub mod artifact;

pub use artifact::{ArtifactBuffer, ProjectRegistry};
