mod error;
mod file;

pub use error::StorageError;
pub use file::FileStorage;

use std::path::Path;

/// Trait for document storage backends.
///
/// Implementations move whole documents as text; parsing and serialization
/// happen in the caller.
pub trait Storage {
    /// Reads the document at `path`.
    fn read_document(&self, path: &Path) -> Result<String, StorageError>;

    /// Writes `contents` to `path`, replacing any existing document.
    fn write_document(&self, path: &Path, contents: &str) -> Result<(), StorageError>;
}
