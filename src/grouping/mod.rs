/*!
 * Grouping of consecutive verses with equivalent commentary.
 *
 * Several consecutive verses often share one commentary text, sometimes with
 * small editorial differences. Such runs are collapsed into a single
 * [`GroupedMessage`] covering a verse range.
 *
 * - `text`: normalization applied before comparing
 * - `similarity`: longest-matching-block similarity ratio
 */

pub mod similarity;
pub mod text;

use std::collections::HashSet;

use log::debug;

use crate::app_config::GroupingConfig;
use crate::corpus::VerseEntry;
use crate::verse_record::VerseId;

pub use similarity::similarity_ratio;
pub use text::{normalize_text, strip_verse_prefix};

/// Commentary prepared for repeated comparison
#[derive(Debug, Clone)]
pub struct ComparableText {
    normalized: String,
    tokens: Vec<String>,
}

impl ComparableText {
    pub fn new(text: &str) -> Self {
        Self {
            normalized: normalize_text(text),
            tokens: text::tokenize(text),
        }
    }
}

/// Which rule judged two texts equivalent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquivalenceRule {
    Exact,
    Similar,
    TokenDelta,
}

/// Equivalence predicate over commentary texts
#[derive(Debug, Clone)]
pub struct TextEquivalence {
    config: GroupingConfig,
}

impl Default for TextEquivalence {
    fn default() -> Self {
        Self::new(GroupingConfig::default())
    }
}

impl TextEquivalence {
    pub fn new(config: GroupingConfig) -> Self {
        Self { config }
    }

    /// First rule under which the two texts are equivalent, if any
    pub fn rule(&self, a: &ComparableText, b: &ComparableText) -> Option<EquivalenceRule> {
        if a.normalized == b.normalized {
            return Some(EquivalenceRule::Exact);
        }

        if similarity_ratio(&a.normalized, &b.normalized) > self.config.similarity_threshold {
            return Some(EquivalenceRule::Similar);
        }

        let set_a: HashSet<&str> = a.tokens.iter().map(String::as_str).collect();
        let set_b: HashSet<&str> = b.tokens.iter().map(String::as_str).collect();
        let symmetric_difference = set_a.symmetric_difference(&set_b).count();
        let length_difference = a.tokens.len().abs_diff(b.tokens.len());

        if symmetric_difference <= self.config.max_token_difference
            && length_difference <= self.config.max_length_difference
        {
            return Some(EquivalenceRule::TokenDelta);
        }

        None
    }

    pub fn are_equivalent(&self, a: &str, b: &str) -> bool {
        self.rule(&ComparableText::new(a), &ComparableText::new(b)).is_some()
    }
}

/// A run of consecutive verses rendered as one message
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedMessage {
    pub chapter: u32,
    pub start_verse: u32,
    pub end_verse: u32,
    /// Commentary of the first verse in the run
    pub text: String,
    pub speaker: Option<String>,
}

impl GroupedMessage {
    /// A message covering a single verse
    pub fn single(entry: &VerseEntry) -> Self {
        Self {
            chapter: entry.id.chapter,
            start_verse: entry.id.verse,
            end_verse: entry.id.verse,
            text: entry.commentary.clone(),
            speaker: entry.speaker.clone(),
        }
    }

    pub fn is_multi_verse(&self) -> bool {
        self.start_verse != self.end_verse
    }

    pub fn verse_count(&self) -> usize {
        (self.end_verse - self.start_verse) as usize + 1
    }

    /// `C.V` for one verse, `C.S - C.E` for a range
    pub fn verse_label(&self) -> String {
        if self.is_multi_verse() {
            format!("{}.{} - {}.{}", self.chapter, self.start_verse, self.chapter, self.end_verse)
        } else {
            format!("{}.{}", self.chapter, self.start_verse)
        }
    }

    fn end_id(&self) -> VerseId {
        VerseId::new(self.chapter, self.end_verse)
    }
}

/// Fold sorted verses into grouped messages.
///
/// A verse joins the open group when it is the next verse of the same chapter,
/// has the same speaker, and its text is equivalent to the text of the group's
/// first verse. Comparison is always against the opener, never the previous
/// member, so slowly drifting texts do not chain into one group.
pub fn group_verses(entries: &[VerseEntry], equivalence: &TextEquivalence) -> Vec<GroupedMessage> {
    let mut grouped: Vec<GroupedMessage> = Vec::new();
    let mut opener: Option<ComparableText> = None;

    for entry in entries {
        if let (Some(group), Some(anchor)) = (grouped.last_mut(), opener.as_ref()) {
            if group.end_id().is_followed_by(&entry.id)
                && group.speaker == entry.speaker
                && equivalence.rule(anchor, &ComparableText::new(&entry.commentary)).is_some()
            {
                group.end_verse = entry.id.verse;
                continue;
            }
        }

        grouped.push(GroupedMessage::single(entry));
        opener = Some(ComparableText::new(&entry.commentary));
    }

    let multi: Vec<&GroupedMessage> = grouped.iter().filter(|g| g.is_multi_verse()).collect();
    if !multi.is_empty() {
        debug!("Found {} multi-verse grouped messages. Examples:", multi.len());
        for example in multi.iter().take(8) {
            debug!(
                "  Chapter {} verses {}-{} speaker={}",
                example.chapter,
                example.start_verse,
                example.end_verse,
                example.speaker.as_deref().unwrap_or("None")
            );
        }
    }

    grouped
}
