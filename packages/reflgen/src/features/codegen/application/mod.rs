//! Codegen application layer

pub mod emitter;

pub use emitter::MetadataEmitter;
