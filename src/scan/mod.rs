//! Folder scanning: turn the images directly inside a folder into cards.
//!
//! Only regular files (or links to them) at the top level are considered,
//! in file-name order. A file qualifies when the text after its last `.` is
//! one of [`IMAGE_EXTENSIONS`], compared case-insensitively.

use std::path::Path;
use walkdir::WalkDir;

use poster_wall_common::Card;

use crate::errors::GenerateError;

/// Extensions that make a file a card.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Split a file name at its last dot into `(stem, extension)`.
fn split_extension(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once('.')
}

/// Whether `name` carries one of the image extensions.
pub fn is_image_file(name: &str) -> bool {
    split_extension(name)
        .map(|(_, ext)| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Build the card for a file name, or `None` if it is not an image.
pub fn card_for_file(name: &str) -> Option<Card> {
    if !is_image_file(name) {
        return None;
    }
    let (stem, _) = split_extension(name)?;
    Some(Card {
        id: name.to_string(),
        src: urlencoding::encode(name).into_owned(),
        title: stem.to_string(),
        link: String::new(),
    })
}

/// Scan `folder` (non-recursively) for image cards.
pub fn scan_folder(folder: &Path) -> Result<Vec<Card>, GenerateError> {
    tracing::debug!(folder = %folder.display(), "Scanning folder");

    let mut cards = Vec::new();
    let walker = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(GenerateError::ReadFolder {
                    path: folder.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "Skipping file with non-UTF-8 name");
            continue;
        };
        if let Some(card) = card_for_file(name) {
            cards.push(card);
        }
    }

    tracing::debug!(count = cards.len(), "Scan complete");
    Ok(cards)
}
