//! Configuration module
//!
//! Presets, the optional YAML config file, and the merge of both with
//! command-line overrides into a validated [`EmbedConfig`].

pub mod loader;
pub mod schema;

pub use loader::{ConfigOverrides, Settings, load_config_file, resolve, validate};
pub use schema::{ConfigFile, DEFAULT_TITLE, EmbedConfig, LayoutMode, MAX_HEIGHT, Preset};
