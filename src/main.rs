use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use poster_wall_common::LayoutField;

mod cmd;

#[derive(Parser)]
#[command(name = "poster-wall")]
#[command(version, about = "Turn a folder of images into a curated poster wall")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Assume yes for confirmation prompts
    #[arg(long, global = true)]
    pub yes: bool,

    /// Path to a poster-wall.toml. Overrides the folder and user config files.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate poster-wall.html for a folder of images
    Generate {
        /// Folder to scan (defaults to the current directory)
        folder: Option<PathBuf>,

        /// Wall title shown in the header
        #[arg(long)]
        title: Option<String>,

        /// Description line shown above the card count
        #[arg(long)]
        description: Option<String>,

        /// Avatar image URL
        #[arg(long)]
        avatar_url: Option<String>,

        /// Default card width in pixels (100-400)
        #[arg(long)]
        card_width: Option<u32>,

        /// Default gap in pixels (0-100)
        #[arg(long)]
        gap: Option<u32>,

        /// Default corner radius in pixels (0-50)
        #[arg(long)]
        radius: Option<u32>,

        /// Hide card titles by default
        #[arg(long, conflicts_with = "show_titles")]
        hide_titles: bool,

        /// Show card titles by default
        #[arg(long)]
        show_titles: bool,
    },
    /// Print the reconciled state of a generated wall
    Show {
        folder: Option<PathBuf>,
    },
    /// Edit a generated wall's persisted order, titles, links and layout
    Edit {
        #[arg(short, long)]
        folder: Option<PathBuf>,

        #[command(subcommand)]
        command: EditCommands,
    },
    /// Open a card's link in the browser
    Open {
        /// Card id (its file name)
        id: String,

        #[arg(short, long)]
        folder: Option<PathBuf>,
    },
    /// Export the current wall state as a standalone page
    Snapshot {
        folder: Option<PathBuf>,

        /// Output file (defaults to <folder>/poster-wall-snapshot.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// View, validate or create configuration
    Config {
        #[arg(short, long)]
        folder: Option<PathBuf>,

        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum EditCommands {
    /// Move the card at FROM to position TO (zero-based)
    Move { from: usize, to: usize },
    /// Set a card's title
    Title { id: String, text: String },
    /// Set a card's link (empty to clear)
    Link { id: String, url: String },
    /// Set a layout value (clamped to its range)
    Layout { field: LayoutField, value: u32 },
    /// Set whether titles are shown
    Titles {
        #[arg(action = ArgAction::Set)]
        visible: bool,
    },
    /// Restore default layout and title visibility, optionally order and titles too
    Reset,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and show any warnings
    Validate,
    /// Create a default poster-wall.toml
    Init {
        /// Write to the user config directory instead of the folder
        #[arg(long)]
        global: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn folder_or_cwd(folder: Option<&PathBuf>) -> Result<PathBuf> {
    match folder {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("Failed to get current directory"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Generate {
            folder,
            title,
            description,
            avatar_url,
            card_width,
            gap,
            radius,
            hide_titles,
            show_titles,
        } => {
            let folder = folder_or_cwd(folder.as_ref())?;
            let overrides = poster_wall::wall_config::CliOverrides {
                title: title.clone(),
                description: description.clone(),
                avatar_url: avatar_url.clone(),
                card_width: *card_width,
                gap: *gap,
                radius: *radius,
                show_titles: match (*show_titles, *hide_titles) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
            };
            cmd::cmd_generate(&folder, cli.config.as_deref(), overrides)?;
        }
        Commands::Show { folder } => {
            cmd::cmd_show(&folder_or_cwd(folder.as_ref())?)?;
        }
        Commands::Edit { folder, command } => {
            cmd::cmd_edit(&folder_or_cwd(folder.as_ref())?, command, cli.yes)?;
        }
        Commands::Open { id, folder } => {
            cmd::cmd_open(&folder_or_cwd(folder.as_ref())?, id)?;
        }
        Commands::Snapshot { folder, output } => {
            cmd::cmd_snapshot(&folder_or_cwd(folder.as_ref())?, output.as_deref())?;
        }
        Commands::Config { folder, command } => {
            let folder = folder_or_cwd(folder.as_ref())?;
            cmd::cmd_config(&folder, cli.config.as_deref(), command.clone())?;
        }
    }

    Ok(())
}
