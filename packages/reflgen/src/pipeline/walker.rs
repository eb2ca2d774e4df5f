//! Declaration walker
//!
//! Pre-order traversal of a parsed unit. Crossing into a project header for
//! the first time opens it with a fresh marker queue and makes it active;
//! crossing back into a header opened earlier in the unit resumes its queue
//! and buffer. Class and struct declarations of the active header go to the
//! correlator; whatever it returns is emitted. Open headers are synchronized
//! once, at the end of the unit.

use std::fs;

use tracing::{debug, info};

use crate::features::annotation::{AnnotationScanner, MarkerQueue};
use crate::features::artifact_sync::{ArtifactStore, ArtifactSynchronizer};
use crate::features::codegen::{MetadataEmitter, MetadataRenderer};
use crate::features::correlation::Correlator;
use crate::features::parsing::{DeclKind, Declaration, ParsedUnit};
use crate::shared::models::{ReflgenError, Result};
use crate::shared::utils::scope_stack::ScopeStack;

use super::context::{FileState, RunContext};
use super::layout::ProjectLayout;

pub struct DeclarationWalker<'a, R: MetadataRenderer, S: ArtifactStore> {
    layout: &'a ProjectLayout,
    scanner: &'a AnnotationScanner,
    correlator: Correlator,
    emitter: &'a MetadataEmitter<R>,
    synchronizer: &'a ArtifactSynchronizer<S>,
}

impl<'a, R: MetadataRenderer, S: ArtifactStore> DeclarationWalker<'a, R, S> {
    pub fn new(
        layout: &'a ProjectLayout,
        scanner: &'a AnnotationScanner,
        emitter: &'a MetadataEmitter<R>,
        synchronizer: &'a ArtifactSynchronizer<S>,
    ) -> Self {
        Self {
            layout,
            scanner,
            correlator: Correlator::new(),
            emitter,
            synchronizer,
        }
    }

    /// Walk a whole unit and finish every header it opened
    pub fn walk_unit(&self, unit: &ParsedUnit, ctx: &mut RunContext) -> Result<()> {
        let mut scopes = ScopeStack::new();
        self.walk(&unit.root, ctx, &mut scopes)?;
        self.finalize_open(ctx)
    }

    fn walk(&self, node: &Declaration, ctx: &mut RunContext, scopes: &mut ScopeStack) -> Result<()> {
        if node.kind != DeclKind::TranslationUnit && self.layout.is_reflectable_header(node.file()) {
            self.enter_file(node, ctx)?;
        }

        if node.kind.is_record() && ctx.is_active(node.file()) {
            self.dispatch_record(node, ctx, scopes);
        }

        let scoped = (node.kind.is_record() || node.kind.is_namespace()) && !node.name.is_empty();
        if scoped {
            scopes.push(node.name.as_str());
        }
        for child in node.children() {
            self.walk(child, ctx, scopes)?;
        }
        if scoped {
            scopes.pop();
        }
        Ok(())
    }

    fn dispatch_record(&self, node: &Declaration, ctx: &mut RunContext, scopes: &ScopeStack) {
        let Some(index) = ctx.active else {
            return;
        };
        let Some(active) = ctx.open.get_mut(index) else {
            return;
        };
        let qualified = scopes.qualify(&node.name);
        if let Some(metadata) = self.correlator.correlate(node, &qualified, &mut active.queue) {
            self.emitter.emit(&metadata, &mut active.buffer, &mut ctx.registry);
            ctx.summary.classes_reflected += 1;
        }
    }

    /// Make the node's header active, opening it on first sight
    fn enter_file(&self, node: &Declaration, ctx: &mut RunContext) -> Result<()> {
        let path = node.file();
        if ctx.is_active(path) {
            return Ok(());
        }
        if ctx.is_finalized(path) {
            debug!(header = %path.display(), "header already processed in this run");
            return Ok(());
        }
        if ctx.resume(path) {
            debug!(header = %path.display(), "resuming header");
            return Ok(());
        }

        let source = fs::read_to_string(path)
            .map_err(|e| ReflgenError::io_at(path, "read header", e))?;
        let markers = self.scanner.scan_source(&source);
        info!(header = %path.display(), markers = markers.len(), "parsing header");

        ctx.activate(FileState::new(
            path.to_path_buf(),
            MarkerQueue::new(markers),
            self.layout.generated_path_for(path),
        ));
        Ok(())
    }

    /// Synchronize the artifact of every open header, in discovery order.
    ///
    /// Headers without reflected classes only touch an artifact that already
    /// exists, which then gets emptied.
    pub fn finalize_open(&self, ctx: &mut RunContext) -> Result<()> {
        for state in ctx.take_open() {
            let leftover = state.queue.remaining().len();
            if leftover > 0 {
                debug!(header = %state.path.display(), markers = leftover, "dropping unmatched markers");
            }

            if state.buffer.is_empty() && !self.synchronizer.exists(&state.generated_path)? {
                continue;
            }
            let content = self.emitter.render_artifact(&state.buffer);
            let outcome = self.synchronizer.sync(&state.generated_path, &content)?;
            ctx.summary.record_artifact(state.generated_path, outcome);
        }
        Ok(())
    }
}
