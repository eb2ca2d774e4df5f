//! Correlation domain models

pub mod metadata;

pub use metadata::{ClassMetadata, PropertyMetadata};
