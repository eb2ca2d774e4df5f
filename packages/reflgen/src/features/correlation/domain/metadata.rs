//! Reflection metadata assembled by the correlator
//!
//! Pure data; rendering lives in the codegen feature.

/// One annotated data member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMetadata {
    pub field_name: String,
    /// Declared type as written in the header
    pub type_spelling: String,
}

impl PropertyMetadata {
    pub fn new(field_name: impl Into<String>, type_spelling: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            type_spelling: type_spelling.into(),
        }
    }
}

/// A reflectable class: its class marker correlated with the declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMetadata {
    /// Unqualified name, used inside the class body
    pub name: String,
    /// Name qualified with enclosing namespaces and classes
    pub qualified_name: String,
    /// Line of the class marker; keys the generated helper macro
    pub marker_line: u32,
    /// Annotated fields in declaration order
    pub properties: Vec<PropertyMetadata>,
}

impl ClassMetadata {
    pub fn new(name: impl Into<String>, qualified_name: impl Into<String>, marker_line: u32) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            marker_line,
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.field_name.as_str()).collect()
    }
}
