use std::fmt;

use crate::corpus::VerseEntry;
use crate::grouping::{group_verses, strip_verse_prefix, GroupedMessage, TextEquivalence};
use crate::render::assets;
use crate::render::{escape_html, RenderSummary, RenderedDocument};
use crate::speakers::SpeakerRole;

// @module: HTML chat-style renderer

/// Layout of the HTML page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlVariant {
    /// Grouped messages in collapsible chapter blocks
    #[default]
    Chat,
    /// One message per verse, principal speaker concealed behind click-to-reveal
    Reveal,
}

// @struct: Renders verse entries into a single HTML page
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    variant: HtmlVariant,
    conceal_principal: bool,
    equivalence: TextEquivalence,
}

impl HtmlRenderer {
    /// Grouped, collapsible chat layout
    pub fn chat(equivalence: TextEquivalence) -> Self {
        Self {
            variant: HtmlVariant::Chat,
            conceal_principal: false,
            equivalence,
        }
    }

    /// Ungrouped layout with the principal speaker concealed
    pub fn reveal() -> Self {
        Self {
            variant: HtmlVariant::Reveal,
            conceal_principal: true,
            equivalence: TextEquivalence::default(),
        }
    }

    /// Conceal principal-speaker text behind click-to-reveal
    pub fn with_concealed_principal(mut self, conceal: bool) -> Self {
        self.conceal_principal = conceal || self.variant == HtmlVariant::Reveal;
        self
    }

    /// Messages to display for `entries`, which must be sorted by verse
    pub fn messages(&self, entries: &[VerseEntry]) -> Vec<GroupedMessage> {
        match self.variant {
            HtmlVariant::Chat => group_verses(entries, &self.equivalence),
            HtmlVariant::Reveal => entries.iter().map(GroupedMessage::single).collect(),
        }
    }

    pub fn render(&self, entries: &[VerseEntry]) -> RenderedDocument {
        let messages = self.messages(entries);
        let summary = RenderSummary {
            verses: entries.len(),
            messages: messages.len(),
        };
        let page = HtmlPage {
            renderer: self,
            messages: &messages,
            summary,
        };
        RenderedDocument {
            content: page.to_string(),
            summary,
        }
    }
}

struct HtmlPage<'a> {
    renderer: &'a HtmlRenderer,
    messages: &'a [GroupedMessage],
    summary: RenderSummary,
}

impl HtmlPage<'_> {
    fn collapsible(&self) -> bool {
        self.renderer.variant == HtmlVariant::Chat
    }

    fn write_head(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"hi\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "    <meta charset=\"UTF-8\">")?;
        writeln!(f, "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
        writeln!(f, "    <title>{}</title>", assets::PAGE_TITLE)?;
        writeln!(f, "    <style>")?;
        write!(f, "{}", assets::STYLE)?;
        writeln!(f, "    </style>")?;
        writeln!(f, "</head>")
    }

    fn open_chapter(&self, f: &mut fmt::Formatter<'_>, chapter: u32) -> fmt::Result {
        if self.collapsible() {
            writeln!(f, "            <div class=\"chapter-block collapsed\" data-chapter=\"{}\">", chapter)?;
            writeln!(
                f,
                "                <div class=\"chapter-header\" onclick=\"toggleChapter(this)\"><span class=\"triangle\">►</span> {} {}</div>",
                assets::CHAPTER_LABEL,
                chapter
            )?;
            writeln!(f, "                <div class=\"chapter-content\">")
        } else {
            writeln!(f, "            <div class=\"chapter-header\">{} {}</div>", assets::CHAPTER_LABEL, chapter)
        }
    }

    fn close_chapter(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.collapsible() {
            writeln!(f, "                </div>")?;
            writeln!(f, "            </div>")?;
        }
        Ok(())
    }

    fn write_message(&self, f: &mut fmt::Formatter<'_>, message: &GroupedMessage) -> fmt::Result {
        let role = SpeakerRole::from_speaker(message.speaker.as_deref());
        let verse_label = message.verse_label();
        let label = match role.label() {
            Some(name) => format!("{} - {}", escape_html(name), verse_label),
            None => verse_label,
        };
        let text = escape_html(&strip_verse_prefix(&message.text));
        let concealed = role == SpeakerRole::PrincipalSpeaker && self.renderer.conceal_principal;

        if concealed {
            writeln!(f, "                    <div class=\"message {} concealed\">", role.css_class())?;
            writeln!(f, "                        <div class=\"message-content\" onclick=\"revealMessage(this)\">")?;
            writeln!(f, "                            <span class=\"verse-number\">{}</span>", label)?;
            writeln!(f, "                            <span class=\"reveal-hint\">{}</span>", assets::REVEAL_HINT)?;
            writeln!(f, "                            <span class=\"hidden-text\">{}</span>", text)?;
        } else {
            writeln!(f, "                    <div class=\"message {}\">", role.css_class())?;
            writeln!(f, "                        <div class=\"message-content\">")?;
            writeln!(f, "                            <span class=\"verse-number\">{}</span>", label)?;
            writeln!(f, "                            {}", text)?;
        }
        writeln!(f, "                        </div>")?;
        writeln!(f, "                    </div>")
    }

    fn write_footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "        <div class=\"footer\">")?;
        writeln!(f, "            <p>{}</p>", assets::FOOTER_TITLE)?;
        writeln!(
            f,
            "            <p style=\"margin-top: 10px; font-size: 0.85em;\">Total Verses: {} | Messages Displayed: {}</p>",
            self.summary.verses, self.summary.messages
        )?;
        writeln!(f, "        </div>")
    }

    fn write_script(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    <script>")?;
        if self.collapsible() {
            write!(f, "{}", assets::CHAPTER_SCRIPT)?;
        }
        if self.renderer.conceal_principal {
            write!(f, "{}", assets::REVEAL_SCRIPT)?;
        }
        writeln!(f, "    </script>")
    }
}

impl fmt::Display for HtmlPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_head(f)?;
        writeln!(f, "<body>")?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "        <div class=\"header\">")?;
        writeln!(f, "            <h1>{}</h1>", assets::BOOK_TITLE)?;
        writeln!(f, "            <p>{}</p>", assets::BOOK_SUBTITLE)?;
        writeln!(f, "        </div>")?;
        writeln!(f)?;
        write!(f, "{}", assets::LEGEND)?;
        writeln!(f)?;
        writeln!(f, "        <div class=\"chat-container\">")?;

        let mut current_chapter = None;
        for message in self.messages {
            if current_chapter != Some(message.chapter) {
                if current_chapter.is_some() {
                    self.close_chapter(f)?;
                }
                current_chapter = Some(message.chapter);
                self.open_chapter(f, message.chapter)?;
            }
            self.write_message(f, message)?;
        }
        if current_chapter.is_some() {
            self.close_chapter(f)?;
        }

        writeln!(f, "        </div>")?;
        self.write_footer(f)?;
        writeln!(f, "    </div>")?;
        self.write_script(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}
