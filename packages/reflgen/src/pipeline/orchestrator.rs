//! Reflection pipeline
//!
//! Drives a run: parse each root unit, walk it, and finish with the
//! registry. Units are processed one after another in the order given,
//! which fixes the registry order.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::config::GeneratorConfig;
use crate::features::annotation::AnnotationScanner;
use crate::features::artifact_sync::{ArtifactStore, ArtifactSynchronizer, FsArtifactStore};
use crate::features::codegen::{CppMacroRenderer, MetadataEmitter, MetadataRenderer};
use crate::features::parsing::{CppDeclarationParser, DeclarationParser, ParseUnitUseCase};
use crate::shared::models::Result;

use super::context::RunContext;
use super::layout::ProjectLayout;
use super::registry::RegistryAggregator;
use super::result::RunSummary;
use super::walker::DeclarationWalker;

pub struct ReflectionPipeline<P: DeclarationParser, R: MetadataRenderer, S: ArtifactStore> {
    layout: ProjectLayout,
    parse: ParseUnitUseCase<P>,
    scanner: AnnotationScanner,
    emitter: MetadataEmitter<R>,
    synchronizer: ArtifactSynchronizer<S>,
    aggregator: RegistryAggregator,
}

impl ReflectionPipeline<CppDeclarationParser, CppMacroRenderer, FsArtifactStore> {
    /// C++ pipeline writing artifacts to disk under `root`
    pub fn for_project(root: &Path, config: &GeneratorConfig) -> Self {
        Self::with_store(root, config, FsArtifactStore::new())
    }
}

impl<S: ArtifactStore> ReflectionPipeline<CppDeclarationParser, CppMacroRenderer, S> {
    /// C++ pipeline over an arbitrary artifact store
    pub fn with_store(root: &Path, config: &GeneratorConfig, store: S) -> Self {
        let layout = ProjectLayout::new(root, config);
        let scanner = AnnotationScanner::from_config(config);
        let parser = CppDeclarationParser::new(layout.include_dirs().to_vec(), scanner.clone());
        Self::new(
            layout,
            parser,
            scanner,
            CppMacroRenderer::new(config.codegen.clone()),
            store,
        )
    }
}

impl<P: DeclarationParser, R: MetadataRenderer, S: ArtifactStore> ReflectionPipeline<P, R, S> {
    pub fn new(layout: ProjectLayout, parser: P, scanner: AnnotationScanner, renderer: R, store: S) -> Self {
        Self {
            aggregator: RegistryAggregator::new(layout.registry_path()),
            layout,
            parse: ParseUnitUseCase::new(parser),
            scanner,
            emitter: MetadataEmitter::new(renderer),
            synchronizer: ArtifactSynchronizer::new(store),
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn store(&self) -> &S {
        self.synchronizer.store()
    }

    /// Process `roots` in order, then synchronize the registry.
    ///
    /// Stops at the first failure; artifacts synchronized before it stay.
    pub fn run<T: AsRef<Path>>(&self, roots: &[T]) -> Result<RunSummary> {
        let started = Instant::now();
        let mut ctx = RunContext::new();
        let walker = DeclarationWalker::new(&self.layout, &self.scanner, &self.emitter, &self.synchronizer);

        for root in roots {
            let path: PathBuf = self.layout.resolve(root.as_ref());
            info!(unit = %path.display(), "processing translation unit");
            let unit = self.parse.execute(&path)?;
            ctx.summary.units_parsed += 1;
            walker.walk_unit(&unit, &mut ctx)?;
        }

        let outcome = self
            .aggregator
            .finalize(&ctx.registry, &self.emitter, &self.synchronizer)?;

        let mut summary = ctx.summary;
        summary.registry = Some(outcome);
        summary.registered_types = ctx.registry.type_names().to_vec();
        summary.elapsed = started.elapsed();
        info!(
            units = summary.units_parsed,
            headers = summary.files_processed,
            classes = summary.classes_reflected,
            written = summary.artifacts_written.len(),
            unchanged = summary.artifacts_unchanged,
            "reflection run complete"
        );
        Ok(summary)
    }
}
