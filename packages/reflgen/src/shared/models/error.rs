//! Error types for the reflgen crate
//!
//! Unified error handling across all features:
//! - Categorized error kinds matching the generation stages
//! - Optional file path and line context
//! - Source error chaining
//!
//! Orphan markers and unresolved class names are NOT errors; the correlator
//! simply declines to reflect the declaration.

use std::fmt;
use std::path::Path;

use crate::config::ConfigError;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structural parse failures (no declaration tree)
    Parse,
    /// Reading sources or writing artifacts
    IO,
    /// Configuration errors
    Config,
    /// Rendering errors
    Codegen,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::IO => "io",
            ErrorKind::Config => "config",
            ErrorKind::Codegen => "codegen",
        }
    }
}

/// Unified error type
#[derive(Debug)]
pub struct ReflgenError {
    pub kind: ErrorKind,
    pub message: String,
    pub file_path: Option<String>,
    pub line: Option<u32>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ReflgenError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file_path: None,
            line: None,
            source: None,
        }
    }

    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_path(self, path: &Path) -> Self {
        self.with_file(path.display().to_string())
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IO, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn codegen(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Codegen, message)
    }

    /// Wrap an I/O failure on `path`
    pub fn io_at(path: &Path, action: &str, err: std::io::Error) -> Self {
        Self::io(format!("failed to {}: {}", action, err))
            .with_path(path)
            .with_source(err)
    }
}

impl fmt::Display for ReflgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if let Some(ref file) = self.file_path {
            write!(f, " in {}", file)?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ReflgenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for ReflgenError {
    fn from(err: std::io::Error) -> Self {
        ReflgenError::io(format!("IO error: {}", err)).with_source(err)
    }
}

impl From<ConfigError> for ReflgenError {
    fn from(err: ConfigError) -> Self {
        ReflgenError::config(err.to_string()).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReflgenError>;
