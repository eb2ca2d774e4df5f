//! Annotation Feature
//!
//! Locates reflection markers by a lexical scan of a header's lines.
//!
//! ## Structure
//! - `domain/` - Marker, MarkerQueue
//! - `infrastructure/` - AnnotationScanner

pub mod domain;
pub mod infrastructure;

// Re-exports
pub use domain::{Marker, MarkerKind, MarkerQueue};
pub use infrastructure::AnnotationScanner;
