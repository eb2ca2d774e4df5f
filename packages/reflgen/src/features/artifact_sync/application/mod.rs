//! Artifact sync application layer

pub mod synchronizer;

pub use synchronizer::ArtifactSynchronizer;
