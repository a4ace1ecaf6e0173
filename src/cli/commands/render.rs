//! `render` command: one page load written to stdout or a file.

use std::io::Write;

use crate::app;
use crate::cli::args::RenderArgs;
use crate::cli::commands::load_settings;
use crate::error::EmbedPageError;

/// Render the host page once.
///
/// A missing or unreadable frontend is not an error here: the page is
/// still written, with its error banner and placeholder.
///
/// # Errors
///
/// Returns a configuration error for invalid settings, or an I/O error if
/// the output cannot be written.
pub fn run(args: &RenderArgs) -> Result<(), EmbedPageError> {
    let settings = load_settings(&args.page)?;
    let page = app::render_page(&settings);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &page)?;
            tracing::info!(output = %path.display(), "wrote page");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
