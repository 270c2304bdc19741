//! Wall generation for a folder of images.
//!
//! `generate_wall` scans the folder, renders the page, and writes it to
//! `<folder>/poster-wall.html`, replacing any previous wall. An empty folder
//! produces no file.

use std::path::{Path, PathBuf};

use poster_wall_common::EmbeddedWall;

use crate::errors::GenerateError;
use crate::render::render_document;
use crate::scan::scan_folder;
use crate::state_dir::output_path;
use crate::wall_config::PosterWallConfig;

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The folder holds no images; nothing was written.
    NoImages,
    /// A wall with `count` cards was written to `path`.
    Generated { path: PathBuf, count: usize },
}

/// Generate the wall for `folder` using `config`.
pub fn generate_wall(
    folder: &Path,
    config: &PosterWallConfig,
) -> Result<GenerateOutcome, GenerateError> {
    let cards = scan_folder(folder)?;
    if cards.is_empty() {
        tracing::info!(folder = %folder.display(), "No images found");
        return Ok(GenerateOutcome::NoImages);
    }

    let count = cards.len();
    let wall = EmbeddedWall::new(cards, config.to_wall_config());
    let html = render_document(&wall)?;

    let path = output_path(folder);
    std::fs::write(&path, html).map_err(|source| GenerateError::WriteOutput {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), count, "Wall generated");
    Ok(GenerateOutcome::Generated { path, count })
}
