//! Artifact sync domain

pub mod outcome;

pub use outcome::SyncOutcome;
