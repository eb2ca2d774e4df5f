//! Annotation domain models

mod marker;
mod marker_queue;

pub use marker::{Marker, MarkerKind};
pub use marker_queue::MarkerQueue;
