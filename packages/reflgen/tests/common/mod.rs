//! Common test utilities for reflgen
//!
//! Temporary C++ projects, header fixtures and artifact assertions shared
//! by the integration tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use fixtures::*;
