//! Configuration schema for the embedded page.
//!
//! [`EmbedConfig`] is the resolved, validated presentation of one host page.
//! [`ConfigFile`] is the optional YAML layer that feeds into it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Title shown above the embedded frontend unless overridden.
pub const DEFAULT_TITLE: &str = "AI Studio JavaScript App Demo";

/// Upper bound for the embed height in pixels.
pub const MAX_HEIGHT: u32 = 10_000;

/// Page-wide layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Centred column of limited width.
    #[default]
    Default,
    /// Content stretches to the full viewport width.
    Wide,
}

impl LayoutMode {
    /// Returns `true` for [`LayoutMode::Wide`].
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Wide)
    }
}

/// Named presentation presets.
///
/// `Standard` and `Wide` reproduce the two page variants this tool
/// replaces: a 600px embed in the default layout and a 1200px embed in
/// the wide layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// 600px embed, default layout.
    #[default]
    Standard,
    /// 1200px embed, wide layout.
    Wide,
}

/// Resolved presentation settings for one host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedConfig {
    /// Embed height in pixels, always in `1..=MAX_HEIGHT`.
    pub height: u32,
    /// Whether the embed region shows scrollbars.
    pub scrolling: bool,
    /// Page layout mode.
    pub layout: LayoutMode,
    /// Page title.
    pub title: String,
}

impl EmbedConfig {
    /// Builds the configuration a preset describes.
    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        let (height, layout) = match preset {
            Preset::Standard => (600, LayoutMode::Default),
            Preset::Wide => (1200, LayoutMode::Wide),
        };
        Self {
            height,
            scrolling: true,
            layout,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

/// On-disk YAML configuration. Every field is optional.
///
/// ```yaml
/// preset: wide
/// height: 900
/// scrolling: true
/// layout: wide
/// title: Demo
/// base_dir: /srv/app
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Preset to start from before applying the other fields.
    pub preset: Option<Preset>,
    /// Embed height in pixels.
    pub height: Option<u32>,
    /// Scrollbar toggle.
    pub scrolling: Option<bool>,
    /// Layout mode.
    pub layout: Option<LayoutMode>,
    /// Page title.
    pub title: Option<String>,
    /// Directory that contains `frontend/index.html`.
    pub base_dir: Option<PathBuf>,
}
