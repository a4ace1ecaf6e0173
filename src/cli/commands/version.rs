//! Version information display

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::EmbedPageError;

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
}

const INFO: VersionInfo = VersionInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

/// Print version information.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), EmbedPageError> {
    match args.format {
        OutputFormat::Human => println!("{} {}", INFO.name, INFO.version),
        OutputFormat::Json => println!("{}", serde_json::to_string(&INFO)?),
    }
    Ok(())
}
