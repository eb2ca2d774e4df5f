//! Reflection pipeline
//!
//! Wires the features into a run over one or more root units.
//!
//! ## Structure
//! - `layout` - project paths and header classification
//! - `context` - per-run state (active header, registry)
//! - `walker` - declaration walker
//! - `registry` - registry aggregator
//! - `orchestrator` - ReflectionPipeline driver

pub mod context;
pub mod layout;
pub mod orchestrator;
pub mod registry;
pub mod result;
pub mod walker;

pub use context::{FileState, RunContext};
pub use layout::ProjectLayout;
pub use orchestrator::ReflectionPipeline;
pub use registry::RegistryAggregator;
pub use result::RunSummary;
pub use walker::DeclarationWalker;
