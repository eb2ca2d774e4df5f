//! Metadata Renderer Port
//!
//! Pure string rendering of correlated metadata. Implementations must be
//! deterministic: identical input renders byte-identical output, which is
//! what lets the synchronizer skip unchanged artifacts.

use std::path::Path;

use crate::features::correlation::ClassMetadata;

pub trait MetadataRenderer: Send + Sync {
    /// One self-contained block for a reflected class
    fn render_class(&self, class: &ClassMetadata) -> String;

    /// Full artifact text for a header from its rendered blocks
    fn render_file(&self, source: &Path, blocks: &[String]) -> String;

    /// Project-wide registry artifact
    fn render_registry(&self, type_names: &[String]) -> String;

    /// Target language name (for logging)
    fn target_name(&self) -> &'static str;
}
