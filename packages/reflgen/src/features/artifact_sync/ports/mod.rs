//! Artifact sync ports

pub mod store;

pub use store::ArtifactStore;
