//! Unified configuration for poster wall generation.
//!
//! Settings are read from a `poster-wall.toml` file and layered as
//! file → environment → CLI. The file is looked up in order:
//! 1. an explicit `--config` path
//! 2. `<folder>/.poster-wall/poster-wall.toml`
//! 3. `<user config dir>/poster-wall/poster-wall.toml`
//!
//! With no file at all the built-in defaults apply.
//!
//! # Configuration File Format
//!
//! ```toml
//! [header]
//! title = "MY COLLECTION"
//! description = "WATCHED MEDIA LOG"
//! avatar_url = "https://api.dicebear.com/7.x/pixel-art/svg?seed=Obsidian"
//!
//! [layout]
//! card_width = 180
//! gap = 16
//! radius = 8
//!
//! [features]
//! show_titles_by_default = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use poster_wall_common::{LayoutField, LayoutSettings, WallConfig};

use crate::state_dir::get_state_dir;

/// File name of the configuration file.
pub const CONFIG_FILE: &str = "poster-wall.toml";

pub const ENV_TITLE: &str = "POSTER_WALL_TITLE";
pub const ENV_DESCRIPTION: &str = "POSTER_WALL_DESCRIPTION";
pub const ENV_AVATAR_URL: &str = "POSTER_WALL_AVATAR_URL";

/// Header text shown above the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,
}

fn default_title() -> String {
    "MY COLLECTION".to_string()
}

fn default_description() -> String {
    "WATCHED MEDIA LOG".to_string()
}

fn default_avatar_url() -> String {
    "https://api.dicebear.com/7.x/pixel-art/svg?seed=Obsidian".to_string()
}

impl Default for HeaderSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            avatar_url: default_avatar_url(),
        }
    }
}

/// Default grid layout embedded into generated pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSection {
    /// Card width in pixels (100-400)
    #[serde(default = "default_card_width")]
    pub card_width: u32,
    /// Gap between cards in pixels (0-100)
    #[serde(default = "default_gap")]
    pub gap: u32,
    /// Corner radius in pixels (0-50)
    #[serde(default = "default_radius")]
    pub radius: u32,
}

fn default_card_width() -> u32 {
    180
}

fn default_gap() -> u32 {
    16
}

fn default_radius() -> u32 {
    8
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            card_width: default_card_width(),
            gap: default_gap(),
            radius: default_radius(),
        }
    }
}

impl LayoutSection {
    fn as_settings(&self) -> LayoutSettings {
        LayoutSettings {
            card_width: self.card_width,
            gap: self.gap,
            radius: self.radius,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesSection {
    #[serde(default = "default_show_titles")]
    pub show_titles_by_default: bool,
}

fn default_show_titles() -> bool {
    true
}

impl Default for FeaturesSection {
    fn default() -> Self {
        Self {
            show_titles_by_default: default_show_titles(),
        }
    }
}

/// The complete poster-wall.toml structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WallToml {
    #[serde(default)]
    pub header: HeaderSection,
    #[serde(default)]
    pub layout: LayoutSection,
    #[serde(default)]
    pub features: FeaturesSection,
}

impl WallToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse poster-wall.toml")
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize poster-wall.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration and return any warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.header.title.trim().is_empty() {
            warnings.push("header.title is empty".to_string());
        }

        let layout = self.layout.as_settings();
        for field in LayoutField::ALL {
            let value = layout.get(field);
            let domain = field.domain();
            if !domain.contains(&value) {
                warnings.push(format!(
                    "layout.{} = {} is outside {}..={} and will be clamped to {}",
                    field.to_string().replace('-', "_"),
                    value,
                    domain.start(),
                    domain.end(),
                    field.clamp(value)
                ));
            }
        }

        warnings
    }
}

/// Per-invocation overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub card_width: Option<u32>,
    pub gap: Option<u32>,
    pub radius: Option<u32>,
    pub show_titles: Option<bool>,
}

/// Path of the per-user configuration file, if the platform has one.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("poster-wall").join(CONFIG_FILE))
}

/// Path of the per-folder configuration file.
pub fn folder_config_path(folder: &Path) -> PathBuf {
    get_state_dir(folder).join(CONFIG_FILE)
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Resolved configuration for one folder.
///
/// Merges:
/// 1. poster-wall.toml (explicit, folder, or user)
/// 2. Environment variables
/// 3. CLI arguments
#[derive(Debug, Clone)]
pub struct PosterWallConfig {
    /// File the settings were read from, if any
    pub source: Option<PathBuf>,
    /// Parsed file configuration
    pub toml: WallToml,
    /// CLI overrides
    pub cli: CliOverrides,
}

impl PosterWallConfig {
    /// Resolve configuration for `folder` without CLI overrides.
    pub fn new(folder: &Path, explicit: Option<&Path>) -> Result<Self> {
        Self::with_cli_args(folder, explicit, CliOverrides::default())
    }

    /// Resolve configuration for `folder` with CLI overrides.
    pub fn with_cli_args(folder: &Path, explicit: Option<&Path>, cli: CliOverrides) -> Result<Self> {
        let source = Self::locate(folder, explicit)?;
        let toml = match &source {
            Some(path) => WallToml::load(path)?,
            None => WallToml::default(),
        };
        tracing::debug!(source = ?source, "Resolved configuration");
        Ok(Self { source, toml, cli })
    }

    /// Find the configuration file that applies to `folder`.
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn locate(folder: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }

        let folder_config = folder_config_path(folder);
        if folder_config.exists() {
            return Ok(Some(folder_config));
        }

        Ok(global_config_path().filter(|p| p.exists()))
    }

    /// Wall title (CLI → env → file).
    pub fn wall_title(&self) -> String {
        self.cli
            .title
            .clone()
            .or_else(|| env_override(ENV_TITLE))
            .unwrap_or_else(|| self.toml.header.title.clone())
    }

    /// Wall description (CLI → env → file).
    pub fn wall_description(&self) -> String {
        self.cli
            .description
            .clone()
            .or_else(|| env_override(ENV_DESCRIPTION))
            .unwrap_or_else(|| self.toml.header.description.clone())
    }

    /// Avatar image URL (CLI → env → file).
    pub fn avatar_url(&self) -> String {
        self.cli
            .avatar_url
            .clone()
            .or_else(|| env_override(ENV_AVATAR_URL))
            .unwrap_or_else(|| self.toml.header.avatar_url.clone())
    }

    /// Default layout (CLI → file), clamped into each field's domain.
    pub fn layout(&self) -> LayoutSettings {
        let file = &self.toml.layout;
        LayoutSettings {
            card_width: self.cli.card_width.unwrap_or(file.card_width),
            gap: self.cli.gap.unwrap_or(file.gap),
            radius: self.cli.radius.unwrap_or(file.radius),
        }
        .clamped()
    }

    /// Default title visibility (CLI → file).
    pub fn show_titles_by_default(&self) -> bool {
        self.cli
            .show_titles
            .unwrap_or(self.toml.features.show_titles_by_default)
    }

    /// The configuration literal embedded into generated pages.
    pub fn to_wall_config(&self) -> WallConfig {
        let layout = self.layout();
        WallConfig {
            wall_title: self.wall_title(),
            wall_description: self.wall_description(),
            avatar_url: self.avatar_url(),
            default_card_width: layout.card_width,
            default_gap: layout.gap,
            default_radius: layout.radius,
            show_titles_by_default: self.show_titles_by_default(),
        }
    }

    /// Validate configuration and return warnings.
    pub fn validate(&self) -> Vec<String> {
        self.toml.validate()
    }
}
