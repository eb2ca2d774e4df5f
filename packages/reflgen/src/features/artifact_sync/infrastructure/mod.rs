//! Artifact sync infrastructure

pub mod fs_store;
pub mod memory_store;

pub use fs_store::FsArtifactStore;
pub use memory_store::InMemoryArtifactStore;
