//! Loading a generated wall for headless use.
//!
//! The generated page is the hand-off: its payload block is the embedded
//! data, and `<folder>/.poster-wall/storage.json` stands in for the
//! browser's local storage.

use anyhow::{Context, Result};
use std::path::Path;

use poster_wall_common::{EmbeddedWall, FileStorage, WallRuntime};

use crate::render::extract_payload;
use crate::state_dir::{output_path, storage_path};

/// Read the embedded data from the wall generated in `folder`.
pub fn load_embedded(folder: &Path) -> Result<EmbeddedWall> {
    let path = output_path(folder);
    if !path.exists() {
        anyhow::bail!(
            "No wall found at {}. Run 'poster-wall generate' first.",
            path.display()
        );
    }
    let html = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read wall: {}", path.display()))?;
    extract_payload(&html).with_context(|| format!("Failed to load wall: {}", path.display()))
}

/// Initialize a runtime for the wall in `folder` over its facet store.
pub fn open_wall(folder: &Path) -> Result<WallRuntime<FileStorage>> {
    let embedded = load_embedded(folder)?;
    let storage = FileStorage::open_or_reset(storage_path(folder))?;
    tracing::debug!(storage = %storage.path().display(), "Opening wall");
    Ok(WallRuntime::initialize(embedded, storage))
}
