//! Headless wall commands: `show`, `edit`, `open` and `snapshot`.
//!
//! Each command loads the generated page in the folder, drives a runtime
//! over the folder's facet store, and exits. Edits persist exactly as they
//! would in the browser.

use anyhow::{Context, Result};
use dialoguer::Confirm;
use std::path::Path;

use poster_wall::navigate::{BrowserNavigator, perform};
use poster_wall::render::render_snapshot;
use poster_wall::session::open_wall;
use poster_wall::state_dir::{resolve_folder, snapshot_path};
use poster_wall::ui::icons::{CHECK, EDIT, FILE_NEW, LINK, RESET};
use poster_wall::ui::print_wall;
use poster_wall_common::{Effect, WallAction};

use super::super::EditCommands;

pub fn cmd_show(folder: &Path) -> Result<()> {
    let folder = resolve_folder(folder)?;
    let runtime = open_wall(&folder)?;
    print_wall(&runtime);
    Ok(())
}

pub fn cmd_edit(folder: &Path, command: &EditCommands, assume_yes: bool) -> Result<()> {
    let folder = resolve_folder(folder)?;
    let mut runtime = open_wall(&folder)?;

    match command {
        EditCommands::Move { from, to } => {
            // Dragging is only enabled in edit mode.
            if !runtime.is_edit_mode() {
                runtime.dispatch(WallAction::ToggleEditMode)?;
            }
            let id = runtime.cards().get(*from).map(|c| c.id.clone());
            runtime.dispatch(WallAction::Reorder {
                from: *from,
                to: *to,
            })?;
            if let Some(id) = id {
                println!("{}Moved {} to position {}", EDIT, id, to);
            }
        }
        EditCommands::Title { id, text } => {
            runtime.dispatch(WallAction::EditTitle {
                id: id.clone(),
                text: text.clone(),
            })?;
            let title = runtime.card(id).map(|c| c.title.clone()).unwrap_or_default();
            println!("{}Title of {} set to \"{}\"", EDIT, id, title);
        }
        EditCommands::Link { id, url } => {
            runtime.dispatch(WallAction::EditLink {
                id: id.clone(),
                url: url.clone(),
            })?;
            if url.is_empty() {
                println!("{}Link of {} cleared", LINK, id);
            } else {
                println!("{}Link of {} set to {}", LINK, id, url);
            }
        }
        EditCommands::Layout { field, value } => {
            runtime.dispatch(WallAction::UpdateLayout {
                field: *field,
                value: *value,
            })?;
            let stored = runtime.settings().get(*field);
            println!("{}{} set to {}px", EDIT, field, stored);
        }
        EditCommands::Titles { visible } => {
            runtime.dispatch(WallAction::SetShowTitles(*visible))?;
            println!(
                "{}Titles {}",
                EDIT,
                if *visible { "shown" } else { "hidden" }
            );
        }
        EditCommands::Reset => {
            let defaults = runtime.compute_reset_state();
            runtime.apply_reset_state(defaults)?;
            println!("{}Layout and title visibility restored to defaults", RESET);

            let clear = assume_yes
                || Confirm::new()
                    .with_prompt("Reset custom order and titles too?")
                    .default(false)
                    .interact()
                    .unwrap_or(false);

            if clear {
                runtime.clear_extended_persistence()?;
                runtime.reinitialize();
                println!("{}Custom order, titles and links cleared", RESET);
            }
        }
    }

    Ok(())
}

pub fn cmd_open(folder: &Path, id: &str) -> Result<()> {
    let folder = resolve_folder(folder)?;
    let mut runtime = open_wall(&folder)?;

    let effect = runtime.dispatch(WallAction::Activate { id: id.to_string() })?;
    if effect == Effect::None {
        println!("{} has no link.", id);
        return Ok(());
    }

    if let Some(url) = perform(&mut BrowserNavigator, effect)? {
        println!("{}Opened {}", LINK, url);
    }
    Ok(())
}

pub fn cmd_snapshot(folder: &Path, output: Option<&Path>) -> Result<()> {
    let folder = resolve_folder(folder)?;
    let runtime = open_wall(&folder)?;

    let snapshot = runtime.export_snapshot();
    let count = snapshot.cards.len();
    let html = render_snapshot(snapshot)?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| snapshot_path(&folder));
    std::fs::write(&path, html)
        .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;

    println!("{}Snapshot exported", CHECK);
    println!("  {}{} ({} cards)", FILE_NEW, path.display(), count);
    Ok(())
}
