//! Configuration System
//!
//! `GeneratorConfig` carries the project layout (source root, include
//! directories, artifact naming), the lexical marker tokens and the names
//! used by the emitted C++ code.
//!
//! # Examples
//!
//! ```rust,ignore
//! use reflgen::config::GeneratorConfig;
//!
//! // Defaults
//! let config = GeneratorConfig::default().build()?;
//!
//! // Builder overrides
//! let config = GeneratorConfig::default()
//!     .with_markers("MARK_CLASS(", "MARK_PROPERTY(")
//!     .codegen(|c| c.registry_macro = "REGISTER_ALL".into())
//!     .build()?;
//!
//! // YAML (schema v1)
//! let config = GeneratorConfig::from_yaml("reflgen.yaml")?;
//! ```

pub mod error;
pub mod generator_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use generator_config::{CodegenConfig, GeneratorConfig, DEFAULT_CONFIG_FILE, SUPPORTED_VERSIONS};
pub use validation::{ConfigValidator, Validatable};
