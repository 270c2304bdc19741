//! Typed error hierarchy for wall generation.
//!
//! - `GenerateError` covers folder scanning and writing the output page
//! - `RenderError` covers building or reading back a page document

use std::path::PathBuf;
use thiserror::Error;

/// Errors from scanning a folder and writing its wall.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to read folder {path}: {source}")]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write wall at {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors from rendering a page or extracting its embedded payload.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Embedded asset '{0}' is missing from the build")]
    MissingAsset(&'static str),

    #[error("Embedded asset '{name}' is not valid UTF-8")]
    InvalidAsset { name: &'static str },

    #[error("Failed to serialize wall payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Document has no poster wall payload")]
    PayloadNotFound,

    #[error("Poster wall payload is invalid: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}
