//! Filesystem artifact store
//!
//! Writes go to a temp file in the target directory which is then renamed
//! over the artifact, so a failed write never leaves a truncated file.

use std::fs;
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::features::artifact_sync::ports::ArtifactStore;
use crate::shared::models::{ReflgenError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactStore;

impl FsArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for FsArtifactStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReflgenError::io_at(path, "read artifact", e)),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| ReflgenError::io_at(dir, "create directory", e))?;

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| ReflgenError::io_at(dir, "create temp file", e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| ReflgenError::io_at(path, "write artifact", e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| ReflgenError::io_at(path, "sync artifact", e))?;

        // Atomic rename
        tmp.persist(path)
            .map_err(|e| ReflgenError::io_at(path, "replace artifact", e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(path.is_file())
    }
}
