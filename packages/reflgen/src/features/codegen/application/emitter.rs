//! Metadata emitter
//!
//! Renders correlated classes into their header's artifact buffer and
//! records each one in the project registry.

use tracing::debug;

use crate::features::codegen::domain::{ArtifactBuffer, ProjectRegistry};
use crate::features::codegen::ports::MetadataRenderer;
use crate::features::correlation::ClassMetadata;

pub struct MetadataEmitter<R: MetadataRenderer> {
    renderer: R,
}

impl<R: MetadataRenderer> MetadataEmitter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render `class` into `buffer` and append its qualified name to `registry`
    pub fn emit(&self, class: &ClassMetadata, buffer: &mut ArtifactBuffer, registry: &mut ProjectRegistry) {
        buffer.push(self.renderer.render_class(class));
        registry.register(class.qualified_name.as_str());
        debug!(
            class = %class.qualified_name,
            properties = class.properties.len(),
            target = self.renderer.target_name(),
            "emitted class metadata"
        );
    }

    /// Full artifact text for a finished header
    pub fn render_artifact(&self, buffer: &ArtifactBuffer) -> String {
        self.renderer.render_file(buffer.source(), buffer.blocks())
    }

    pub fn render_registry(&self, registry: &ProjectRegistry) -> String {
        self.renderer.render_registry(registry.type_names())
    }
}
