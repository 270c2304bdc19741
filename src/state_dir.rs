//! Per-folder state directory.
//!
//! ```text
//! <folder>/
//! ├── poster-wall.html            # Generated wall
//! ├── poster-wall-snapshot.html   # Exported snapshot (optional)
//! └── .poster-wall/
//!     ├── poster-wall.toml        # Folder-level configuration (optional)
//!     └── storage.json            # Persisted facets for headless edits
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The name of the per-folder state directory.
pub const STATE_DIR: &str = ".poster-wall";

/// File name of the generated wall.
pub const OUTPUT_FILE: &str = "poster-wall.html";

/// Default file name of an exported snapshot.
pub const SNAPSHOT_FILE: &str = "poster-wall-snapshot.html";

/// File name of the facet store inside the state directory.
pub const STORAGE_FILE: &str = "storage.json";

pub fn get_state_dir(folder: &Path) -> PathBuf {
    folder.join(STATE_DIR)
}

/// Where the generated wall for `folder` is written.
pub fn output_path(folder: &Path) -> PathBuf {
    folder.join(OUTPUT_FILE)
}

pub fn snapshot_path(folder: &Path) -> PathBuf {
    folder.join(SNAPSHOT_FILE)
}

pub fn storage_path(folder: &Path) -> PathBuf {
    get_state_dir(folder).join(STORAGE_FILE)
}

/// Resolve `folder` to an absolute directory path.
pub fn resolve_folder(folder: &Path) -> Result<PathBuf> {
    let resolved = folder
        .canonicalize()
        .with_context(|| format!("Failed to resolve folder: {}", folder.display()))?;
    if !resolved.is_dir() {
        anyhow::bail!("Not a folder: {}", resolved.display());
    }
    Ok(resolved)
}

/// Display name of a folder (its last path component).
pub fn folder_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| folder.display().to_string())
}
