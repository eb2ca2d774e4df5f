//! Scope stack for qualified type names
//!
//! Tracks enclosing namespaces and classes during declaration traversal.

/// Scope stack for building C++ qualified names
#[derive(Debug, Clone)]
pub struct ScopeStack {
    scopes: Vec<String>,
    separator: &'static str,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Create a new scope stack with the C++ separator "::"
    pub fn new() -> Self {
        Self {
            scopes: Vec::new(),
            separator: "::",
        }
    }

    /// Create with a custom separator
    pub fn with_separator(separator: &'static str) -> Self {
        Self {
            scopes: Vec::new(),
            separator,
        }
    }

    /// Push a new scope
    pub fn push(&mut self, name: impl Into<String>) {
        self.scopes.push(name.into());
    }

    /// Pop the current scope
    pub fn pop(&mut self) -> Option<String> {
        self.scopes.pop()
    }

    /// Get current qualified prefix
    pub fn qualified(&self) -> String {
        self.scopes.join(self.separator)
    }

    /// Qualify `name` with the current scopes
    pub fn qualify(&self, name: &str) -> String {
        if self.scopes.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", self.qualified(), self.separator, name)
        }
    }

    /// Current depth
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
