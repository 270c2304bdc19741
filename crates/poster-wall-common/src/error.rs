//! Typed errors for the shared poster wall crate.
//!
//! - `StorageError` covers the persisted facet store backends
//! - `WallError` covers runtime operations on a loaded wall

use std::path::PathBuf;
use thiserror::Error;

/// Errors from a facet storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage file at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file at {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from operations on a loaded wall.
#[derive(Debug, Error)]
pub enum WallError {
    #[error("No card with id '{id}'")]
    UnknownCard { id: String },

    #[error("Index {index} is out of range for {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
