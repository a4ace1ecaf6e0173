//! Configuration loader
//!
//! Resolves an [`EmbedConfig`] in three layers, later layers winning:
//! 1. Preset (`--preset`, else the file's `preset`, else `standard`)
//! 2. YAML config file fields
//! 3. Individual command-line flags and their environment variables
//!
//! The result is validated before it is handed to the renderer.

use std::path::{Path, PathBuf};

use crate::config::schema::{ConfigFile, EmbedConfig, LayoutMode, MAX_HEIGHT, Preset};
use crate::error::ConfigError;

/// Maximum configuration file size in bytes.
const MAX_CONFIG_SIZE: u64 = 64 * 1024;

/// Values supplied on the command line (or through their environment
/// variables). `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Preset override.
    pub preset: Option<Preset>,
    /// Embed height override.
    pub height: Option<u32>,
    /// Scrollbar override.
    pub scrolling: Option<bool>,
    /// Layout override.
    pub layout: Option<LayoutMode>,
    /// Title override.
    pub title: Option<String>,
    /// Base directory override.
    pub base_dir: Option<PathBuf>,
}

/// Fully resolved settings: presentation plus where to find the frontend.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Presentation of the host page.
    pub embed: EmbedConfig,
    /// Explicit base directory; `None` means the executable's directory.
    pub base_dir: Option<PathBuf>,
}

/// Reads and parses a YAML configuration file.
///
/// An empty file is accepted and yields [`ConfigFile::default`]. A relative
/// `base_dir` is anchored to the directory containing the file, so the same
/// file resolves identically from any working directory.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the file cannot be read,
/// [`ConfigError::InvalidValue`] if it exceeds the size limit, or
/// [`ConfigError::ParseError`] if the YAML is malformed.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;

    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(ConfigError::InvalidValue {
            field: "file_size".to_string(),
            value: format!("{} bytes", metadata.len()),
            expected: format!("at most {MAX_CONFIG_SIZE} bytes"),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    if raw.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let mut file: ConfigFile = serde_yaml::from_str(raw).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })?;

    if let Some(dir) = file.base_dir.take() {
        let anchored = match path.parent() {
            Some(parent) if dir.is_relative() => parent.join(dir),
            _ => dir,
        };
        file.base_dir = Some(anchored);
    }

    Ok(file)
}

/// Merges preset, file and overrides into validated [`Settings`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if the merged configuration fails
/// validation.
pub fn resolve(
    file: Option<&ConfigFile>,
    overrides: &ConfigOverrides,
) -> Result<Settings, ConfigError> {
    let preset = overrides
        .preset
        .or_else(|| file.and_then(|f| f.preset))
        .unwrap_or_default();
    let mut embed = EmbedConfig::from_preset(preset);
    let mut base_dir = None;

    if let Some(file) = file {
        apply(
            &mut embed,
            file.height,
            file.scrolling,
            file.layout,
            file.title.as_deref(),
        );
        base_dir.clone_from(&file.base_dir);
    }

    apply(
        &mut embed,
        overrides.height,
        overrides.scrolling,
        overrides.layout,
        overrides.title.as_deref(),
    );
    if overrides.base_dir.is_some() {
        base_dir.clone_from(&overrides.base_dir);
    }

    validate(&embed)?;

    Ok(Settings { embed, base_dir })
}

/// Checks the invariants the renderer relies on.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for a height outside
/// `1..=MAX_HEIGHT` or a blank title.
pub fn validate(config: &EmbedConfig) -> Result<(), ConfigError> {
    if config.height == 0 || config.height > MAX_HEIGHT {
        return Err(ConfigError::InvalidValue {
            field: "height".to_string(),
            value: config.height.to_string(),
            expected: format!("a pixel height between 1 and {MAX_HEIGHT}"),
        });
    }
    if config.title.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "title".to_string(),
            value: config.title.clone(),
            expected: "a non-empty title".to_string(),
        });
    }
    Ok(())
}

fn apply(
    embed: &mut EmbedConfig,
    height: Option<u32>,
    scrolling: Option<bool>,
    layout: Option<LayoutMode>,
    title: Option<&str>,
) {
    if let Some(height) = height {
        embed.height = height;
    }
    if let Some(scrolling) = scrolling {
        embed.scrolling = scrolling;
    }
    if let Some(layout) = layout {
        embed.layout = layout;
    }
    if let Some(title) = title {
        embed.title = title.to_string();
    }
}
