//! Codegen ports

pub mod renderer;

pub use renderer::MetadataRenderer;
