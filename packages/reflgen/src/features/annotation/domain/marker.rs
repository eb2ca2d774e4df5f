//! Annotation markers
//!
//! A marker is a lexically recognised annotation token sitting on its own
//! source line. Markers never pass through the structural parser.

/// What a marker annotates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerKind {
    /// Class-level marker, placed inside the class body.
    ///
    /// `class_name` comes from the nearest preceding `class`/`struct` line and
    /// is empty when no such line exists (the marker can then never correlate).
    Class { class_name: String },

    /// Field-level marker, placed on the line before the field
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    /// 1-based line of the marker
    pub line: u32,
}

impl Marker {
    pub fn class(line: u32, class_name: impl Into<String>) -> Self {
        Self {
            kind: MarkerKind::Class {
                class_name: class_name.into(),
            },
            line,
        }
    }

    pub fn property(line: u32) -> Self {
        Self {
            kind: MarkerKind::Property,
            line,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, MarkerKind::Class { .. })
    }

    pub fn is_property(&self) -> bool {
        matches!(self.kind, MarkerKind::Property)
    }

    /// Resolved class name, `None` for property markers
    pub fn class_name(&self) -> Option<&str> {
        match &self.kind {
            MarkerKind::Class { class_name } => Some(class_name),
            MarkerKind::Property => None,
        }
    }
}
