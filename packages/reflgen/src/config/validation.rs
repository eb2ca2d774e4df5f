//! Configuration validation
//!
//! Configs implement `Validatable`; the generator refuses to start on an
//! invalid configuration rather than emitting broken artifacts.

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Stateless field checks shared by the config types
pub struct ConfigValidator;

impl ConfigValidator {
    /// Reject empty strings
    pub fn non_empty(field: &str, value: &str) -> ConfigResult<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::invalid(field, value, "Value must not be empty."));
        }
        Ok(())
    }

    /// Require a valid C/C++ identifier (macro and function names end up in generated code)
    pub fn c_identifier(field: &str, value: &str) -> ConfigResult<()> {
        let mut chars = value.chars();
        let valid = match chars.next() {
            Some(first) if first == '_' || first.is_ascii_alphabetic() => {
                chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
            }
            _ => false,
        };
        if !valid {
            return Err(ConfigError::invalid(
                field,
                value,
                "Expected a C identifier ([A-Za-z_][A-Za-z0-9_]*).",
            ));
        }
        Ok(())
    }

    /// Path segment without separators (directory names, filename infixes)
    pub fn plain_segment(field: &str, value: &str) -> ConfigResult<()> {
        Self::non_empty(field, value)?;
        if value.contains(['/', '\\']) || value == "." || value == ".." {
            return Err(ConfigError::invalid(
                field,
                value,
                "Expected a single path segment without separators.",
            ));
        }
        Ok(())
    }

    /// File extension given without the leading dot
    pub fn extension(field: &str, value: &str) -> ConfigResult<()> {
        Self::plain_segment(field, value)?;
        if value.starts_with('.') {
            return Err(ConfigError::invalid(
                field,
                value,
                format!("Drop the leading dot: use '{}'.", value.trim_start_matches('.')),
            ));
        }
        Ok(())
    }
}
