/*
 * reflgen - Reflection metadata generator for annotated C++ headers
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Error model, source locations, path and tree-sitter helpers
 * - features/    : Vertical slices (annotation → parsing → correlation → codegen → artifact_sync)
 * - pipeline/    : Declaration walker, registry aggregator, run driver
 * - config/      : reflgen.yaml configuration
 *
 * Output:
 * - <dir>/generated/<name>.gen.h per annotated header
 * - one project-wide registry header
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Run orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{GeneratorConfig, DEFAULT_CONFIG_FILE};
pub use pipeline::{ReflectionPipeline, RunSummary};
pub use shared::models::{ErrorKind, ReflgenError, Result};
