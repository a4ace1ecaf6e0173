//! CLI argument definitions
//!
//! All Clap derive structs for `embedpage` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::{ConfigOverrides, LayoutMode, Preset};
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Embed a static HTML frontend into a sized, scrollable host page.
#[derive(Parser, Debug)]
#[command(name = "embedpage", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "EMBEDPAGE_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "EMBEDPAGE_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the host page once and write it to stdout or a file.
    Render(RenderArgs),

    /// Serve the host page over HTTP, loading the frontend per request.
    Serve(ServeArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Shared Page Arguments
// ============================================================================

/// Page presentation and content location, shared by `render` and `serve`.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Path to a YAML configuration file.
    #[arg(short, long, env = "EMBEDPAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Presentation preset (standard = 600px default layout, wide = 1200px wide layout).
    #[arg(long, env = "EMBEDPAGE_PRESET")]
    pub preset: Option<Preset>,

    /// Embed height in pixels.
    #[arg(long, env = "EMBEDPAGE_HEIGHT")]
    pub height: Option<u32>,

    /// Show scrollbars in the embed region.
    #[arg(long, env = "EMBEDPAGE_SCROLLING")]
    pub scrolling: Option<bool>,

    /// Page layout mode.
    #[arg(long, env = "EMBEDPAGE_LAYOUT")]
    pub layout: Option<LayoutMode>,

    /// Page title.
    #[arg(long, env = "EMBEDPAGE_TITLE")]
    pub title: Option<String>,

    /// Directory containing `frontend/index.html` (defaults to the executable's directory).
    #[arg(long, env = "EMBEDPAGE_BASE_DIR")]
    pub base_dir: Option<PathBuf>,
}

impl PageArgs {
    /// The command-line layer of the configuration.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            preset: self.preset,
            height: self.height,
            scrolling: self.scrolling,
            layout: self.layout,
            title: self.title.clone(),
            base_dir: self.base_dir.clone(),
        }
    }
}

// ============================================================================
// Render / Serve
// ============================================================================

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page settings.
    #[command(flatten)]
    pub page: PageArgs,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Page settings.
    #[command(flatten)]
    pub page: PageArgs,

    /// Bind address as `PORT`, `:PORT` (both on 127.0.0.1) or `HOST:PORT`.
    #[arg(long, default_value = "127.0.0.1:8501", env = "EMBEDPAGE_BIND")]
    pub bind: String,

    /// Expose Prometheus metrics on `127.0.0.1:<PORT>`.
    #[arg(long, env = "EMBEDPAGE_METRICS_PORT")]
    pub metrics_port: Option<u16>,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn render_args(argv: &[&str]) -> RenderArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Render(args) => args,
            other => panic!("Expected RenderArgs, got {other:?}"),
        }
    }

    #[test]
    fn test_render_no_args() {
        let args = render_args(&["embedpage", "render"]);
        assert!(args.output.is_none());
        assert!(args.page.preset.is_none());
    }

    #[test]
    fn test_render_with_overrides() {
        let args = render_args(&[
            "embedpage",
            "render",
            "--preset",
            "wide",
            "--height",
            "900",
            "--scrolling",
            "false",
            "--layout",
            "default",
            "--title",
            "Demo",
            "-o",
            "page.html",
        ]);
        let overrides = args.page.overrides();
        assert_eq!(overrides.preset, Some(Preset::Wide));
        assert_eq!(overrides.height, Some(900));
        assert_eq!(overrides.scrolling, Some(false));
        assert_eq!(overrides.layout, Some(LayoutMode::Default));
        assert_eq!(overrides.title.as_deref(), Some("Demo"));
        assert_eq!(args.output, Some(PathBuf::from("page.html")));
    }

    #[test]
    fn test_negative_height_rejected() {
        let result = Cli::try_parse_from(["embedpage", "render", "--height", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let result = Cli::try_parse_from(["embedpage", "render", "--layout", "narrow"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_default_bind() {
        let cli = Cli::try_parse_from(["embedpage", "serve"]).unwrap();
        if let Commands::Serve(args) = cli.command {
            assert_eq!(args.bind, "127.0.0.1:8501");
            assert!(args.metrics_port.is_none());
            return;
        }
        panic!("Expected ServeArgs");
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["embedpage", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["embedpage", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["embedpage", "-vvv", "render"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["embedpage", "render", "--quiet", "--log-format", "json"])
                .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["embedpage", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_exit_code_mapping() {
        use crate::error::{ConfigError, EmbedPageError, ExitCode, ServeError};

        let cases: Vec<(EmbedPageError, i32)> = vec![
            (
                ConfigError::MissingFile {
                    path: PathBuf::from("/x"),
                }
                .into(),
                ExitCode::CONFIG_ERROR,
            ),
            (
                ServeError::InvalidAddress {
                    input: "x".into(),
                    message: "bad".into(),
                }
                .into(),
                ExitCode::SERVE_ERROR,
            ),
            (
                std::io::Error::new(std::io::ErrorKind::NotFound, "x").into(),
                ExitCode::IO_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "Wrong exit code for {err}");
        }
    }
}
