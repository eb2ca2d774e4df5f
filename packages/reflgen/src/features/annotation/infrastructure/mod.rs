//! Lexical scanning implementation

mod scanner;

pub use scanner::{enclosing_class_name, AnnotationScanner};
