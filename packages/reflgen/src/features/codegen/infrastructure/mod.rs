//! Codegen infrastructure

pub mod cpp_macro;

pub use cpp_macro::CppMacroRenderer;
