//! Data model shared by the generator and the wall runtime.
//!
//! Field names serialize in camelCase because the same JSON is embedded in
//! the generated page and read by its browser runtime.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Namespace of the persisted facets for a freshly generated wall.
pub const DEFAULT_NAMESPACE: &str = "posterWall";

/// One image entry on the wall.
///
/// `id` is fixed at generation time; `title` and `link` may be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// File name including extension, unique within the wall
    pub id: String,
    /// Percent-encoded image reference relative to the page
    pub src: String,
    /// Display label
    pub title: String,
    /// External URL, empty when the card has none
    #[serde(default)]
    pub link: String,
}

impl Card {
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

/// One of the three adjustable layout dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutField {
    CardWidth,
    Gap,
    Radius,
}

impl LayoutField {
    pub const ALL: [LayoutField; 3] = [LayoutField::CardWidth, LayoutField::Gap, LayoutField::Radius];

    /// Allowed pixel range for this field.
    pub fn domain(self) -> RangeInclusive<u32> {
        match self {
            LayoutField::CardWidth => 100..=400,
            LayoutField::Gap => 0..=100,
            LayoutField::Radius => 0..=50,
        }
    }

    /// Clamp a value into this field's domain.
    pub fn clamp(self, value: u32) -> u32 {
        let domain = self.domain();
        value.clamp(*domain.start(), *domain.end())
    }
}

impl std::fmt::Display for LayoutField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutField::CardWidth => write!(f, "card-width"),
            LayoutField::Gap => write!(f, "gap"),
            LayoutField::Radius => write!(f, "radius"),
        }
    }
}

impl std::str::FromStr for LayoutField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "card-width" | "cardwidth" | "width" => Ok(LayoutField::CardWidth),
            "gap" => Ok(LayoutField::Gap),
            "radius" => Ok(LayoutField::Radius),
            _ => Err(format!(
                "Invalid layout field '{}'. Valid values: card-width, gap, radius",
                s
            )),
        }
    }
}

/// Grid layout in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    pub card_width: u32,
    pub gap: u32,
    pub radius: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            card_width: 180,
            gap: 16,
            radius: 8,
        }
    }
}

impl LayoutSettings {
    pub fn get(&self, field: LayoutField) -> u32 {
        match field {
            LayoutField::CardWidth => self.card_width,
            LayoutField::Gap => self.gap,
            LayoutField::Radius => self.radius,
        }
    }

    /// Set one field, clamped into its domain. Returns the stored value.
    pub fn set(&mut self, field: LayoutField, value: u32) -> u32 {
        let value = field.clamp(value);
        match field {
            LayoutField::CardWidth => self.card_width = value,
            LayoutField::Gap => self.gap = value,
            LayoutField::Radius => self.radius = value,
        }
        value
    }

    /// Copy with every field clamped into its domain.
    pub fn clamped(mut self) -> Self {
        for field in LayoutField::ALL {
            self.set(field, self.get(field));
        }
        self
    }
}

/// Per-card override persisted by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
}

/// Configuration literal embedded into a generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallConfig {
    pub wall_title: String,
    pub wall_description: String,
    pub avatar_url: String,
    pub default_card_width: u32,
    pub default_gap: u32,
    pub default_radius: u32,
    pub show_titles_by_default: bool,
}

impl WallConfig {
    /// The layout a page starts from before any persisted override.
    pub fn default_layout(&self) -> LayoutSettings {
        LayoutSettings {
            card_width: self.default_card_width,
            gap: self.default_gap,
            radius: self.default_radius,
        }
    }

    /// Replace the embedded layout defaults.
    pub fn with_layout(mut self, layout: LayoutSettings) -> Self {
        self.default_card_width = layout.card_width;
        self.default_gap = layout.gap;
        self.default_radius = layout.radius;
        self
    }
}

/// Everything the generator hands to the page: cards, configuration and the
/// storage namespace the page persists its facets under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedWall {
    pub cards: Vec<Card>,
    pub config: WallConfig,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl EmbeddedWall {
    pub fn new(cards: Vec<Card>, config: WallConfig) -> Self {
        Self {
            cards,
            config,
            namespace: default_namespace(),
        }
    }
}

/// Frozen capture of a wall as currently arranged and configured.
///
/// Carries data-level state only; edit mode is never part of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSnapshot {
    pub cards: Vec<Card>,
    pub config: WallConfig,
}

impl WallSnapshot {
    /// Turn the snapshot into a page payload persisting under `namespace`.
    pub fn into_embedded(self, namespace: impl Into<String>) -> EmbeddedWall {
        EmbeddedWall {
            cards: self.cards,
            config: self.config,
            namespace: namespace.into(),
        }
    }
}
