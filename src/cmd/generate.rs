//! Wall generation command: `poster-wall generate`.

use anyhow::Result;
use std::path::Path;

use poster_wall::generate::{GenerateOutcome, generate_wall};
use poster_wall::state_dir::{folder_name, resolve_folder};
use poster_wall::ui::icons::{CHECK, CROSS, FILE_NEW, SPARKLE, WARN};
use poster_wall::wall_config::{CliOverrides, PosterWallConfig};

pub fn cmd_generate(
    folder: &Path,
    explicit_config: Option<&Path>,
    overrides: CliOverrides,
) -> Result<()> {
    let name = folder
        .canonicalize()
        .map(|p| folder_name(&p))
        .unwrap_or_else(|_| folder_name(folder));
    println!("{}Generating {} Poster Wall...", SPARKLE, name);

    let result = resolve_folder(folder).and_then(|folder| {
        let config = PosterWallConfig::with_cli_args(&folder, explicit_config, overrides)?;
        Ok(generate_wall(&folder, &config)?)
    });

    match result {
        Ok(GenerateOutcome::NoImages) => {
            println!("{}No images found.", WARN);
        }
        Ok(GenerateOutcome::Generated { path, count }) => {
            println!("{}Poster Wall Generated!", CHECK);
            println!("  {}{} ({} cards)", FILE_NEW, path.display(), count);
        }
        Err(err) => {
            println!("{}Error generating wall.", CROSS);
            return Err(err);
        }
    }

    Ok(())
}
