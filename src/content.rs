//! Frontend content loading
//!
//! Locates `frontend/index.html` next to the running executable and reads
//! it as UTF-8. A failed load is never fatal: the page shows an error
//! banner naming the attempted path and embeds [`PLACEHOLDER_HTML`].

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ContentLoadError;
use crate::observability::metrics;
use crate::page::PageContext;

/// Directory, relative to the base directory, holding the frontend.
pub const FRONTEND_DIR: &str = "frontend";

/// Entry document inside [`FRONTEND_DIR`].
pub const INDEX_FILE: &str = "index.html";

/// Markup embedded when the frontend cannot be loaded.
pub const PLACEHOLDER_HTML: &str = "<h1>File not found</h1>";

/// Returns `base_dir/frontend/index.html`.
#[must_use]
pub fn resolve_html_path(base_dir: &Path) -> PathBuf {
    base_dir.join(FRONTEND_DIR).join(INDEX_FILE)
}

/// Directory containing the running executable.
///
/// Independent of the process working directory.
///
/// # Errors
///
/// Returns an I/O error if the executable path cannot be determined.
pub fn script_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("executable path {} has no parent directory", exe.display()),
        )
    })
}

/// Makes a user-supplied base directory absolute against the current
/// working directory, once, so later loads do not depend on the cwd.
///
/// # Errors
///
/// Returns an I/O error if the current directory cannot be read.
pub fn absolute_base_dir(dir: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(dir)
}

/// Reads `path` as UTF-8 text.
///
/// # Errors
///
/// Returns a [`ContentLoadError`] naming `path` when the file is missing,
/// unreadable or not valid UTF-8.
pub fn read_html(path: &Path) -> Result<String, ContentLoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ContentLoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ContentLoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    String::from_utf8(bytes).map_err(|_| ContentLoadError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// Loads the frontend located next to the running executable.
///
/// Returns the file contents, or [`PLACEHOLDER_HTML`] after showing an
/// error on `page`.
pub fn resolve_and_load(page: &mut dyn PageContext) -> String {
    match script_dir() {
        Ok(dir) => load_from(page, &dir),
        Err(source) => fallback(page, &ContentLoadError::Unresolved { source }),
    }
}

/// Loads `base_dir/frontend/index.html`.
///
/// Same contract as [`resolve_and_load`] with an explicit base directory.
pub fn load_from(page: &mut dyn PageContext, base_dir: &Path) -> String {
    let path = resolve_html_path(base_dir);
    debug!(path = %path.display(), "loading frontend");

    match read_html(&path) {
        Ok(content) => {
            metrics::record_content_loaded(content.len());
            content
        }
        Err(err) => fallback(page, &err),
    }
}

fn fallback(page: &mut dyn PageContext, err: &ContentLoadError) -> String {
    warn!(kind = err.kind(), "{err}");
    metrics::record_content_failure(err.kind());
    page.show_error(&format!("Error: {err}"));
    PLACEHOLDER_HTML.to_string()
}
