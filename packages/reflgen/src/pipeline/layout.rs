//! Project layout
//!
//! Decides which files belong to the project, which of them are generated,
//! and where each header's artifact lives. Every path is resolved against
//! the project root and compared lexically.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::shared::utils::path::{is_within, normalize, resolve};

#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    source_root: PathBuf,
    include_dirs: Vec<PathBuf>,
    registry_path: PathBuf,
    header_extensions: Vec<String>,
    generated_dir: String,
    generated_infix: String,
}

impl ProjectLayout {
    pub fn new(root: &Path, config: &GeneratorConfig) -> Self {
        let root = normalize(root);
        Self {
            source_root: resolve(&root, &config.source_root),
            include_dirs: config.include_dirs.iter().map(|d| resolve(&root, d)).collect(),
            registry_path: resolve(&root, &config.registry_path),
            header_extensions: config.header_extensions.clone(),
            generated_dir: config.generated_dir.clone(),
            generated_infix: config.generated_infix.clone(),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn include_dirs(&self) -> &[PathBuf] {
        &self.include_dirs
    }

    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }

    /// Resolve a user-supplied path against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        resolve(&self.root, path)
    }

    pub fn is_in_project(&self, path: &Path) -> bool {
        is_within(path, &self.source_root)
    }

    /// Artifact written by this tool (`generated/` directory or `.gen.` infix)
    pub fn is_generated(&self, path: &Path) -> bool {
        let in_generated_dir = path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|dir| dir == self.generated_dir.as_str());
        let infix = format!(".{}", self.generated_infix);
        let has_infix = path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(&infix));
        in_generated_dir || has_infix
    }

    pub fn is_header(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| self.header_extensions.iter().any(|h| ext == h.as_str()))
    }

    /// In-project, non-generated header: the only files that get artifacts
    pub fn is_reflectable_header(&self, path: &Path) -> bool {
        self.is_header(path) && self.is_in_project(path) && !self.is_generated(path)
    }

    /// `dir/foo.h` -> `dir/generated/foo.gen.h`
    pub fn generated_path_for(&self, header: &Path) -> PathBuf {
        let dir = header.parent().unwrap_or_else(|| Path::new(""));
        let stem = header
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = match header.extension() {
            Some(ext) => format!("{}.{}.{}", stem, self.generated_infix, ext.to_string_lossy()),
            None => format!("{}.{}", stem, self.generated_infix),
        };
        dir.join(&self.generated_dir).join(file_name)
    }
}
