//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod render;
pub mod serve;
pub mod version;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Cli, Commands, PageArgs};
use crate::config::{self, Settings};
use crate::content;
use crate::error::EmbedPageError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<(), EmbedPageError> {
    match cli.command {
        Commands::Render(args) => render::run(&args),
        Commands::Serve(args) => serve::run(&args, cancel).await,
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}

/// Builds validated settings from the config file and command-line layer.
///
/// A relative base directory is made absolute here, once.
///
/// # Errors
///
/// Returns a configuration error if the file cannot be loaded or the
/// merged settings are invalid, or an I/O error if a relative base
/// directory cannot be anchored.
pub fn load_settings(args: &PageArgs) -> Result<Settings, EmbedPageError> {
    let file = match &args.config {
        Some(path) => {
            tracing::info!(config = %path.display(), "loading configuration");
            Some(config::load_config_file(path)?)
        }
        None => None,
    };

    let mut settings = config::resolve(file.as_ref(), &args.overrides())?;
    if let Some(dir) = settings.base_dir.take() {
        settings.base_dir = Some(content::absolute_base_dir(&dir)?);
    }

    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn load_settings_without_file() {
        let settings = load_settings(&PageArgs::default()).unwrap();
        assert_eq!(settings.embed.height, 600);
        assert!(settings.base_dir.is_none());
    }

    #[test]
    fn load_settings_anchors_relative_base_dir() {
        let args = PageArgs {
            base_dir: Some(PathBuf::from("relative/site")),
            ..PageArgs::default()
        };
        let settings = load_settings(&args).unwrap();
        let dir = settings.base_dir.unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("relative/site"));
    }

    #[test]
    fn load_settings_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embedpage.yaml");
        std::fs::write(&path, "preset: wide\ntitle: From file\n").unwrap();

        let args = PageArgs {
            config: Some(path),
            height: Some(700),
            ..PageArgs::default()
        };
        let settings = load_settings(&args).unwrap();
        assert_eq!(settings.embed.title, "From file");
        assert_eq!(settings.embed.height, 700);
        assert!(settings.embed.layout.is_wide());
    }

    #[test]
    fn load_settings_missing_file_is_config_error() {
        let args = PageArgs {
            config: Some(PathBuf::from("/nonexistent/embedpage.yaml")),
            ..PageArgs::default()
        };
        let err = load_settings(&args).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::ExitCode::CONFIG_ERROR);
    }
}
