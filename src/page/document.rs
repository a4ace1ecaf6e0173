//! Standalone host document.
//!
//! [`HtmlDocument`] collects title, layout, error banners and embeds, and
//! renders them into one HTML5 page. Each embed becomes an `<iframe>` whose
//! `srcdoc` carries the escaped content. The frame is sandboxed without
//! `allow-same-origin`, so the embedded code runs but cannot reach the host.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::LayoutMode;
use crate::page::PageContext;

/// Width of the centred column in the default layout.
const DEFAULT_MAX_WIDTH: &str = "46rem";

/// Sandbox permissions for embedded frames.
const FRAME_SANDBOX: &str = "allow-scripts allow-forms allow-popups allow-modals allow-downloads";

// Kept free of `format!` braces: this is copied verbatim into the page.
const BASE_STYLE: &str = "
  * { box-sizing: border-box; }
  body { margin: 0; font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; color: #31333f; }
  main { margin: 0 auto; padding: 3rem 1rem 2rem; }
  h1 { font-size: 2.25rem; font-weight: 700; margin: 0 0 1rem; }
  .error { margin: 0 0 1rem; padding: 1rem; border-radius: 0.5rem; background: #ffe6e6; color: #7d353b; overflow-wrap: anywhere; }
  iframe.embed { display: block; width: 100%; border: none; }
";

#[derive(Debug, Clone)]
struct Embed {
    html: String,
    height: u32,
    scrolling: bool,
}

/// A [`PageContext`] that produces a complete host HTML document.
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    title: Option<String>,
    layout: LayoutMode,
    errors: Vec<String>,
    embeds: Vec<Embed>,
}

impl HtmlDocument {
    /// Creates an empty document in the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current layout mode.
    #[must_use]
    pub const fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Renders the document.
    #[must_use]
    pub fn finish(&self) -> String {
        let embed_len: usize = self.embeds.iter().map(|e| e.html.len()).sum();
        let mut out = String::with_capacity(1024 + embed_len + embed_len / 8);

        out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        if let Some(title) = &self.title {
            out.push_str("<title>");
            out.push_str(&encode_text(title));
            out.push_str("</title>\n");
        }
        out.push_str("<style>");
        out.push_str(BASE_STYLE);
        match self.layout {
            LayoutMode::Default => {
                out.push_str("  main { max-width: ");
                out.push_str(DEFAULT_MAX_WIDTH);
                out.push_str("; }\n");
            }
            LayoutMode::Wide => {
                out.push_str("  main { max-width: none; padding-left: 5rem; padding-right: 5rem; }\n");
            }
        }
        out.push_str("</style>\n</head>\n<body>\n");

        out.push_str("<main data-layout=\"");
        out.push_str(match self.layout {
            LayoutMode::Default => "default",
            LayoutMode::Wide => "wide",
        });
        out.push_str("\">\n");

        for message in &self.errors {
            out.push_str("<div class=\"error\" role=\"alert\">");
            out.push_str(&encode_text(message));
            out.push_str("</div>\n");
        }

        if let Some(title) = &self.title {
            out.push_str("<h1>");
            out.push_str(&encode_text(title));
            out.push_str("</h1>\n");
        }

        for embed in &self.embeds {
            out.push_str("<iframe class=\"embed\" sandbox=\"");
            out.push_str(FRAME_SANDBOX);
            out.push_str("\" height=\"");
            out.push_str(&embed.height.to_string());
            out.push_str("\" style=\"height: ");
            out.push_str(&embed.height.to_string());
            out.push_str("px; overflow: ");
            out.push_str(if embed.scrolling { "auto" } else { "hidden" });
            out.push_str(";\" scrolling=\"");
            out.push_str(if embed.scrolling { "yes" } else { "no" });
            out.push_str("\" srcdoc=\"");
            out.push_str(&encode_double_quoted_attribute(&embed.html));
            out.push_str("\"></iframe>\n");
        }

        out.push_str("</main>\n</body>\n</html>\n");
        out
    }
}

impl PageContext for HtmlDocument {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    fn embed_html(&mut self, html: &str, height: u32, scrolling: bool) {
        self.embeds.push(Embed {
            html: html.to_string(),
            height,
            scrolling,
        });
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
