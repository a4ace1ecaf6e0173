//! One page load: resolve, read (or fall back), set layout, render.

use std::time::Instant;

use tracing::info;

use crate::config::Settings;
use crate::content;
use crate::observability::metrics;
use crate::page::{HtmlDocument, PageContext, render_with};

/// Runs one page load against `page`.
///
/// Uses the executable's directory unless `settings.base_dir` is set.
pub fn load_into(page: &mut dyn PageContext, settings: &Settings) {
    let html = match &settings.base_dir {
        Some(dir) => content::load_from(page, dir),
        None => content::resolve_and_load(page),
    };
    render_with(page, &html, &settings.embed);
}

/// Runs one page load and returns the finished host document.
#[must_use]
pub fn render_page(settings: &Settings) -> String {
    let started = Instant::now();
    let mut document = HtmlDocument::new();
    load_into(&mut document, settings);
    let page = document.finish();

    metrics::record_page_load(started.elapsed());
    info!(
        bytes = page.len(),
        height = settings.embed.height,
        layout = ?settings.embed.layout,
        "page rendered"
    );
    page
}
