//! Host page boundary
//!
//! The page that receives the embedded frontend is an injected
//! collaborator: everything the core needs from it is the write-only
//! [`PageContext`] trait. [`HtmlDocument`] renders a standalone host
//! document; [`PageRecorder`] records calls for inspection.

pub mod document;
pub mod recorder;

pub use document::HtmlDocument;
pub use recorder::{PageEvent, PageRecorder};

use tracing::debug;

use crate::config::{EmbedConfig, LayoutMode};

/// Rendering surface provided by the host.
///
/// All methods are write-only. The core never reads anything back from
/// the page or from the embedded content.
pub trait PageContext {
    /// Sets the page title.
    fn set_title(&mut self, title: &str);

    /// Sets the page-wide layout mode.
    fn set_layout(&mut self, layout: LayoutMode);

    /// Embeds raw HTML in a region `height` pixels tall, with scrollbars
    /// when `scrolling` is set.
    fn embed_html(&mut self, html: &str, height: u32, scrolling: bool);

    /// Shows a visible error message on the page.
    fn show_error(&mut self, message: &str);
}

/// Renders `content` into `page`.
///
/// When `layout_wide` is set the page switches to [`LayoutMode::Wide`];
/// otherwise the layout is left untouched. Then the title is set to
/// `title` and the content embedded with `height` and `scrolling` passed
/// through unchanged.
pub fn render(
    page: &mut dyn PageContext,
    content: &str,
    title: &str,
    height: u32,
    scrolling: bool,
    layout_wide: bool,
) {
    if layout_wide {
        page.set_layout(LayoutMode::Wide);
    }
    page.set_title(title);
    debug!(
        height,
        scrolling,
        layout_wide,
        bytes = content.len(),
        "embedding content"
    );
    page.embed_html(content, height, scrolling);
}

/// Renders `content` into `page` with the settings in `config`.
pub fn render_with(page: &mut dyn PageContext, content: &str, config: &EmbedConfig) {
    render(
        page,
        content,
        &config.title,
        config.height,
        config.scrolling,
        config.layout.is_wide(),
    );
}
