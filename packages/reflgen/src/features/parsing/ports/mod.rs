//! Parsing ports

mod parser;

pub use parser::DeclarationParser;
