use std::fmt;

use crate::corpus::VerseEntry;
use crate::render::{RenderSummary, RenderedDocument};

// @module: Markdown renderer, one bullet per verse with the literal commentary

const TITLE: &str = "# Bhagavad Gita - Swami Ramsukhdas Commentary";
const INTRO: &str = "This document contains the Hindi translation and commentary by Swami Ramsukhdas.";

// @struct: Renders verse entries into a Markdown document
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `entries`, which must be sorted by verse
    pub fn render(&self, entries: &[VerseEntry]) -> RenderedDocument {
        RenderedDocument {
            content: MarkdownDocument { entries }.to_string(),
            summary: RenderSummary {
                verses: entries.len(),
                messages: entries.len(),
            },
        }
    }
}

struct MarkdownDocument<'a> {
    entries: &'a [VerseEntry],
}

impl fmt::Display for MarkdownDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f)?;
        writeln!(f, "{}", INTRO)?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;

        let mut current_chapter = None;
        for entry in self.entries {
            if current_chapter != Some(entry.id.chapter) {
                current_chapter = Some(entry.id.chapter);
                writeln!(f)?;
                writeln!(f, "## Chapter {}", entry.id.chapter)?;
                writeln!(f)?;
            }
            writeln!(f, "- **{}** {}", entry.id, entry.commentary)?;
        }

        Ok(())
    }
}
