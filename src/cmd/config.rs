//! Configuration view and validation commands: `poster-wall config`.

use anyhow::Result;
use std::path::Path;

use poster_wall::state_dir::resolve_folder;
use poster_wall::ui::icons::{CHECK, WARN};
use poster_wall::wall_config::{PosterWallConfig, WallToml, folder_config_path, global_config_path};

use super::super::ConfigCommands;

fn print_toml(toml: &WallToml) {
    println!("[header]");
    println!("  title = \"{}\"", toml.header.title);
    println!("  description = \"{}\"", toml.header.description);
    println!("  avatar_url = \"{}\"", toml.header.avatar_url);
    println!();
    println!("[layout]");
    println!("  card_width = {}", toml.layout.card_width);
    println!("  gap = {}", toml.layout.gap);
    println!("  radius = {}", toml.layout.radius);
    println!();
    println!("[features]");
    println!(
        "  show_titles_by_default = {}",
        toml.features.show_titles_by_default
    );
    println!();
}

pub fn cmd_config(
    folder: &Path,
    explicit: Option<&Path>,
    command: Option<ConfigCommands>,
) -> Result<()> {
    let folder = resolve_folder(folder)?;

    match command {
        None | Some(ConfigCommands::Show) => {
            let config = PosterWallConfig::new(&folder, explicit)?;

            println!();
            println!("Poster Wall Configuration");
            println!("=========================");
            println!();

            match &config.source {
                Some(path) => println!("Config file: {}", path.display()),
                None => {
                    println!("No poster-wall.toml found. Using default configuration.");
                }
            }
            println!();
            print_toml(&config.toml);

            println!("Effective values (with env overrides):");
            let effective = config.to_wall_config();
            println!("  title = \"{}\"", effective.wall_title);
            println!("  description = \"{}\"", effective.wall_description);
            println!("  avatar_url = \"{}\"", effective.avatar_url);
            println!(
                "  layout = {}px / {}px / {}px",
                effective.default_card_width, effective.default_gap, effective.default_radius
            );
            println!("  show_titles_by_default = {}", effective.show_titles_by_default);
            println!();
        }
        Some(ConfigCommands::Validate) => {
            println!();
            println!("Validating configuration...");
            println!();

            let config = PosterWallConfig::new(&folder, explicit)?;
            if config.source.is_none() {
                println!("No poster-wall.toml found. Using defaults (valid).");
                return Ok(());
            }

            let warnings = config.validate();
            if warnings.is_empty() {
                println!("{}Configuration is valid.", CHECK);
            } else {
                println!("{}Configuration warnings:", WARN);
                for warning in warnings {
                    println!("  - {}", warning);
                }
            }
            println!();
        }
        Some(ConfigCommands::Init { global }) => {
            let config_path = if global {
                match global_config_path() {
                    Some(path) => path,
                    None => anyhow::bail!("No user configuration directory on this platform"),
                }
            } else {
                folder_config_path(&folder)
            };

            if config_path.exists() {
                println!("poster-wall.toml already exists at {}", config_path.display());
                println!("Delete it first if you want to recreate it.");
                return Ok(());
            }

            WallToml::default().save(&config_path)?;

            println!("{}Created poster-wall.toml at {}", CHECK, config_path.display());
            println!();
            println!("You can now customize:");
            println!("  - [header] title, description, avatar_url");
            println!("  - [layout] card_width, gap, radius");
            println!("  - [features] show_titles_by_default");
            println!();
        }
    }

    Ok(())
}
