//! Annotation Scanner
//!
//! Lexical pass over one file's lines. A line whose trimmed text starts with
//! the property token yields a property marker; one starting with the class
//! token yields a class marker named after the nearest preceding line that
//! starts with `class ` or `struct `.

use crate::config::GeneratorConfig;
use crate::features::annotation::domain::Marker;

const CLASS_KEYWORDS: [&str; 2] = ["class ", "struct "];

/// Lexical marker scanner
#[derive(Debug, Clone)]
pub struct AnnotationScanner {
    class_token: String,
    property_token: String,
}

impl AnnotationScanner {
    pub fn new(class_token: impl Into<String>, property_token: impl Into<String>) -> Self {
        Self {
            class_token: class_token.into(),
            property_token: property_token.into(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.class_marker.trim(), config.property_marker.trim())
    }

    /// Scan a whole source text
    pub fn scan_source(&self, source: &str) -> Vec<Marker> {
        let lines: Vec<&str> = source.lines().collect();
        self.scan(&lines)
    }

    /// Scan materialised lines; markers come out in ascending line order
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Marker> {
        let mut markers = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            let trimmed = line.as_ref().trim();
            let line_no = index as u32 + 1;

            if trimmed.starts_with(&self.property_token) {
                markers.push(Marker::property(line_no));
            } else if trimmed.starts_with(&self.class_token) {
                markers.push(Marker::class(line_no, enclosing_class_name(lines, index)));
            }
        }
        markers
    }

    /// Does this line carry any marker token?
    pub fn is_marker_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.starts_with(&self.property_token) || trimmed.starts_with(&self.class_token)
    }
}

/// Name declared by the nearest `class`/`struct` line strictly above `index`.
///
/// Bounded by the top of the file; returns an empty string when no such line
/// exists.
pub fn enclosing_class_name<S: AsRef<str>>(lines: &[S], index: usize) -> String {
    lines[..index.min(lines.len())]
        .iter()
        .rev()
        .find_map(|line| class_header_name(line.as_ref().trim()))
        .unwrap_or_default()
}

/// Class name from a trimmed `class X ...` / `struct X ...` line.
///
/// The name ends at the first character that cannot be part of an
/// identifier, so `struct Foo{` and `class Foo: public Base` give `Foo`.
fn class_header_name(trimmed: &str) -> Option<String> {
    let rest = CLASS_KEYWORDS
        .iter()
        .find_map(|keyword| trimmed.strip_prefix(keyword))?;
    let name: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    Some(name)
}
