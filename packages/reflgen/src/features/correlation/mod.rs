//! Correlation Feature
//!
//! Pairs a file's marker queue with its class and field declarations.
//!
//! ## Structure
//! - `domain/` - ClassMetadata, PropertyMetadata
//! - `application/` - Correlator (class correlation + field matching)

pub mod application;
pub mod domain;

// Re-exports
pub use application::Correlator;
pub use domain::{ClassMetadata, PropertyMetadata};
