//! Utility modules shared across features
//!
//! - `path`: Lexical path normalisation and containment
//! - `scope_stack`: Scope management for qualified names
//! - `tree_sitter`: Tree-sitter node traversal and extraction

pub mod path;
pub mod scope_stack;
pub mod tree_sitter;
