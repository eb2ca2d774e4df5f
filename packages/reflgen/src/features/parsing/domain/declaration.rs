//! Language-neutral declaration tree
//!
//! The structural view of a translation unit handed to the walker: typed
//! declaration nodes with the file and line that declared them, children in
//! declaration order. Owned by the parser; the rest of the pipeline only
//! reads it.

use std::path::Path;

use crate::shared::models::SourceLocation;

/// Declaration kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// Synthetic root of a parsed unit
    TranslationUnit,
    Class,
    Struct,
    /// Non-static data member
    Field,
    /// Member function, constructor or destructor
    Method,
    /// Anything else (namespace, free function, variable, ...), tagged with its raw kind
    Other(String),
}

impl DeclKind {
    /// Class or struct definition
    pub fn is_record(&self) -> bool {
        matches!(self, DeclKind::Class | DeclKind::Struct)
    }

    pub fn is_namespace(&self) -> bool {
        matches!(self, DeclKind::Other(kind) if kind == "namespace")
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeclKind::TranslationUnit => "translation_unit",
            DeclKind::Class => "class",
            DeclKind::Struct => "struct",
            DeclKind::Field => "field",
            DeclKind::Method => "method",
            DeclKind::Other(kind) => kind.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    /// Spelling of the declared name, empty for anonymous declarations
    pub name: String,
    /// Declared type spelling (fields only)
    pub type_spelling: Option<String>,
    pub location: SourceLocation,
    pub children: Vec<Declaration>,
}

impl Declaration {
    pub fn new(kind: DeclKind, name: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            name: name.into(),
            type_spelling: None,
            location,
            children: Vec::new(),
        }
    }

    pub fn with_type(mut self, type_spelling: impl Into<String>) -> Self {
        self.type_spelling = Some(type_spelling.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Declaration>) -> Self {
        self.children = children;
        self
    }

    /// Children in declaration order
    pub fn children(&self) -> impl Iterator<Item = &Declaration> {
        self.children.iter()
    }

    pub fn file(&self) -> &Path {
        &self.location.file
    }

    pub fn line(&self) -> u32 {
        self.location.line
    }

    pub fn type_spelling(&self) -> &str {
        self.type_spelling.as_deref().unwrap_or("")
    }

    /// Pre-order iterator over this node and all descendants
    pub fn descendants(&self) -> Vec<&Declaration> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(current.children.iter().rev());
        }
        out
    }
}
