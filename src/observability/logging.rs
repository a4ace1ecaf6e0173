//! Logging initialization for `embedpage`.
//!
//! Structured logging via `tracing` with human-readable and JSON output,
//! configurable verbosity, and an `EMBEDPAGE_LOG` override. Logs always go
//! to stderr so `render` can write the page to stdout.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_ENV_VAR: &str = "EMBEDPAGE_LOG";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Maps a verbosity level to a filter directive.
///
/// `-v` flags raise `embedpage`'s own level first; dependencies (hyper,
/// axum, the metrics exporter) trail one step behind so `-v` stays
/// readable.
///
/// - 0 → `"warn"`
/// - 1 → `"warn,embedpage=info"`
/// - 2 → `"info,embedpage=debug"`
/// - 3+ → `"debug,embedpage=trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,embedpage=info",
        2 => "info,embedpage=debug",
        _ => "debug,embedpage=trace",
    }
}

/// Builds the filter: `EMBEDPAGE_LOG` when set and valid, otherwise the
/// verbosity directive.
fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Resolves `--color` against the stderr terminal and `NO_COLOR`.
fn use_ansi(color: ColorChoice, stderr_is_tty: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => stderr_is_tty && !no_color,
    }
}

/// Initializes the global tracing subscriber on stderr.
///
/// Module targets are shown from `-vv` up. A second call is a no-op.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Human => builder
            .with_ansi(use_ansi(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            ))
            .try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
