use std::path::PathBuf;
use thiserror::Error;

use crate::xml::XmlError;

/// Errors that can occur while loading or saving a document.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    #[error("Failed to serialize document for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: XmlError) -> Self {
        StorageError::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn serialize(path: impl Into<PathBuf>, source: XmlError) -> Self {
        StorageError::Serialize {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Write {
            path: path.into(),
            source,
        }
    }

    /// Name of the step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            StorageError::Read { .. } => "read",
            StorageError::Parse { .. } => "parse",
            StorageError::Serialize { .. } => "serialize",
            StorageError::Write { .. } => "write",
        }
    }
}
