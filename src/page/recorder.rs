//! In-memory [`PageContext`] that records every call.

use crate::config::LayoutMode;
use crate::page::PageContext;

/// One call made against a [`PageRecorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// `set_title`
    Title(String),
    /// `set_layout`
    Layout(LayoutMode),
    /// `embed_html`
    Embed {
        /// Embedded markup.
        html: String,
        /// Height in pixels.
        height: u32,
        /// Scrollbar toggle.
        scrolling: bool,
    },
    /// `show_error`
    Error(String),
}

/// Page context that keeps an ordered log of calls.
#[derive(Debug, Default)]
pub struct PageRecorder {
    events: Vec<PageEvent>,
}

impl PageRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PageEvent] {
        &self.events
    }

    /// Messages passed to `show_error`, in order.
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PageEvent::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// `(html, height, scrolling)` for every `embed_html` call.
    #[must_use]
    pub fn embeds(&self) -> Vec<(&str, u32, bool)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PageEvent::Embed {
                    html,
                    height,
                    scrolling,
                } => Some((html.as_str(), *height, *scrolling)),
                _ => None,
            })
            .collect()
    }

    /// The last title set, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            PageEvent::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// The effective layout: the last one set, or the default.
    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        self.events
            .iter()
            .rev()
            .find_map(|e| match e {
                PageEvent::Layout(l) => Some(*l),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl PageContext for PageRecorder {
    fn set_title(&mut self, title: &str) {
        self.events.push(PageEvent::Title(title.to_string()));
    }

    fn set_layout(&mut self, layout: LayoutMode) {
        self.events.push(PageEvent::Layout(layout));
    }

    fn embed_html(&mut self, html: &str, height: u32, scrolling: bool) {
        self.events.push(PageEvent::Embed {
            html: html.to_string(),
            height,
            scrolling,
        });
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(PageEvent::Error(message.to_string()));
    }
}
