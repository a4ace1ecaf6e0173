//! Error types for `embedpage`
//!
//! Fatal errors surface through [`EmbedPageError`] and map onto process exit
//! codes. Content load failures are a separate family: they never escape
//! [`crate::content::resolve_and_load`] and only ever degrade the page.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `embedpage` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (output not writable, executable location unknown)
    pub const IO_ERROR: i32 = 3;

    /// HTTP host error (bind failure, invalid address)
    pub const SERVE_ERROR: i32 = 4;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `embedpage` operations.
#[derive(Debug, Error)]
pub enum EmbedPageError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP host error
    #[error(transparent)]
    Serve(#[from] ServeError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EmbedPageError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Serve(_) => ExitCode::SERVE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error(
        "parse error in {path}{}: {message}",
        .line.map(|l| format!(" at line {l}")).unwrap_or_default()
    )]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Serve Errors
// ============================================================================

/// HTTP host errors.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Bind address could not be parsed
    #[error("invalid bind address \"{input}\": {message}")]
    InvalidAddress {
        /// Address as given on the command line
        input: String,
        /// Parser message
        message: String,
    },

    /// Listener could not be bound
    #[error("bind failed on {addr}: {source}")]
    BindFailed {
        /// Address the listener tried to bind
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The server loop terminated with an error
    #[error("server error: {0}")]
    Server(#[source] std::io::Error),

    /// Metrics exporter could not be installed
    #[error("metrics exporter failed: {0}")]
    Metrics(String),
}

// ============================================================================
// Content Load Errors
// ============================================================================

/// Failure to load the embedded HTML file.
///
/// Every variant carries the attempted path so the page banner can name it.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    /// The file does not exist
    #[error("index.html not found at {path}")]
    NotFound {
        /// Attempted path
        path: PathBuf,
    },

    /// The file exists but is not valid UTF-8
    #[error("index.html at {path} is not valid UTF-8")]
    InvalidUtf8 {
        /// Attempted path
        path: PathBuf,
    },

    /// Any other read failure (permissions, path is a directory, ...)
    #[error("index.html at {path} could not be read: {source}")]
    Unreadable {
        /// Attempted path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The running executable's directory could not be determined
    #[error("cannot locate the program directory to find index.html: {source}")]
    Unresolved {
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ContentLoadError {
    /// Short, fixed label used for metrics and structured logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidUtf8 { .. } => "invalid_utf8",
            Self::Unreadable { .. } => "unreadable",
            Self::Unresolved { .. } => "unresolved",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
