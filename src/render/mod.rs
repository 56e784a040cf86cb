/*!
 * Static document renderers for the annotated corpus.
 *
 * - `markdown`: chapter-sectioned bullet list, one line per verse
 * - `html`: chat-style page, grouped and collapsible, or ungrouped with the
 *   principal speaker's text behind click-to-reveal
 * - `assets`: inline stylesheet, legend and script embedded in the HTML page
 */

pub mod assets;
pub mod html;
pub mod markdown;

use std::path::Path;

use anyhow::Result;
use log::info;

use crate::file_utils::FileManager;

pub use html::{HtmlRenderer, HtmlVariant};
pub use markdown::MarkdownRenderer;

/// Counts reported after rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    /// Verses read from the corpus
    pub verses: usize,
    /// Messages emitted; equals `verses` when nothing was grouped
    pub messages: usize,
}

/// A rendered document ready to be written
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub content: String,
    pub summary: RenderSummary,
}

impl RenderedDocument {
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        FileManager::write_to_file(&path, &self.content)?;
        info!("Successfully generated {:?}", path.as_ref());
        Ok(())
    }
}

/// Escape text for inclusion in HTML element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
