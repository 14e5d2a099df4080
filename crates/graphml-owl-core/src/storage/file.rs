use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::StorageConfig;

use super::error::StorageError;
use super::Storage;

/// File-system storage.
///
/// With atomic writes enabled (the default) a document is first written to a
/// temp file next to the target and then renamed over it, so a failed run
/// leaves any previous output untouched.
#[derive(Debug, Clone, Default)]
pub struct FileStorage {
    config: StorageConfig,
}

impl FileStorage {
    /// Creates a new FileStorage with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new FileStorage with custom configuration.
    pub fn with_config(config: StorageConfig) -> Self {
        Self { config }
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), StorageError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

        let mut temp = new_temp_file(dir).map_err(|e| StorageError::write(path, e))?;
        temp.write_all(contents.as_bytes())
            .map_err(|e| StorageError::write(path, e))?;
        // An overwritten file keeps its mode.
        if let Some(permissions) = existing {
            temp.as_file()
                .set_permissions(permissions)
                .map_err(|e| StorageError::write(path, e))?;
        }
        temp.persist(path)
            .map_err(|e| StorageError::write(path, e.error))?;

        Ok(())
    }
}

/// Temp file created with the mode a plain `fs::write` would give a new
/// file (0666 less the process umask).
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

impl Storage for FileStorage {
    fn read_document(&self, path: &Path) -> Result<String, StorageError> {
        tracing::debug!(path = %path.display(), "reading document");
        fs::read_to_string(path).map_err(|e| StorageError::read(path, e))
    }

    fn write_document(&self, path: &Path, contents: &str) -> Result<(), StorageError> {
        tracing::debug!(path = %path.display(), bytes = contents.len(), "writing document");
        if self.config.atomic_writes {
            self.write_atomic(path, contents)
        } else {
            fs::write(path, contents).map_err(|e| StorageError::write(path, e))
        }
    }
}
