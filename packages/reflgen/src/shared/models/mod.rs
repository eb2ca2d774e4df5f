//! Shared models

mod error;
mod location;

pub use error::{ErrorKind, ReflgenError, Result};
pub use location::SourceLocation;
