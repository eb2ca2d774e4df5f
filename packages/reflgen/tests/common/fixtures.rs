//! Temporary project fixtures

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use reflgen::{GeneratorConfig, ReflectionPipeline, RunSummary};
use tempfile::TempDir;

/// The sample header used throughout: one annotated field, one plain field
pub const WIDGET_HEADER: &str = "class Widget {
MARK_CLASS()
MARK_PROPERTY()
int health;
float speed;
};
";

/// Configuration using the `MARK_CLASS(` / `MARK_PROPERTY(` marker tokens
pub fn mark_config() -> GeneratorConfig {
    GeneratorConfig::default().with_markers("MARK_CLASS(", "MARK_PROPERTY(")
}

/// Header declaring a single reflected struct with one annotated `int`
pub fn fixture_reflected_struct(name: &str, field: &str) -> String {
    format!("#pragma once\nstruct {name} {{\nMARK_CLASS()\nMARK_PROPERTY()\nint {field};\n}};\n")
}

/// Root unit including each header in order
pub fn fixture_main(includes: &[&str]) -> String {
    let lines: String = includes
        .iter()
        .map(|inc| format!("#include \"{inc}\"\n"))
        .collect();
    format!("{lines}\nint main() {{ return 0; }}\n")
}

/// A project directory on disk
pub struct TestProject {
    dir: TempDir,
    config: GeneratorConfig,
}

impl TestProject {
    pub fn new() -> Self {
        Self::with_config(mark_config())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            dir: TempDir::new().expect("create temp project"),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().expect("file has parent")).expect("create dirs");
        fs::write(path, content).expect("write fixture");
        self
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("read {relative}: {e}"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn modified(&self, relative: &str) -> SystemTime {
        fs::metadata(self.path(relative))
            .and_then(|m| m.modified())
            .expect("artifact mtime")
    }

    pub fn run(&self, roots: &[&str]) -> RunSummary {
        self.try_run(roots).expect("reflection run")
    }

    pub fn try_run(&self, roots: &[&str]) -> reflgen::Result<RunSummary> {
        ReflectionPipeline::for_project(self.root(), &self.config).run(roots)
    }
}
