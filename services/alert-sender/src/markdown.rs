//! Markdown rendering of trigger descriptions

/// Renders raw description text into the channel's rich format.
///
/// Implementations must be deterministic for a given input.
pub trait MarkdownRenderer: Send + Sync + std::fmt::Debug {
    fn render(&self, raw: &str) -> String;
}

/// CommonMark to HTML renderer backed by comrak
#[derive(Debug, Default, Clone, Copy)]
pub struct ComrakRenderer;

impl ComrakRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownRenderer for ComrakRenderer {
    fn render(&self, raw: &str) -> String {
        comrak::markdown_to_html(raw, &comrak::Options::default())
    }
}
