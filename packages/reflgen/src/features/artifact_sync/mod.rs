//! Artifact Sync Feature
//!
//! Keeps generated artifacts in step with rendered content, writing only
//! on difference.
//!
//! ## Structure
//! - `domain/` - SyncOutcome
//! - `ports/` - ArtifactStore trait
//! - `application/` - ArtifactSynchronizer
//! - `infrastructure/` - FsArtifactStore, InMemoryArtifactStore

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::ArtifactSynchronizer;
pub use domain::SyncOutcome;
pub use infrastructure::{FsArtifactStore, InMemoryArtifactStore};
pub use ports::ArtifactStore;
