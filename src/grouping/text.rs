/*!
 * Commentary text normalization used before any comparison.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// @const: Leading verse marker, single (।।2.69।।) or ranged (।।3.1 -- 3.2।।)
static VERSE_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^।।\s*\d+\.\d+(?:\s*(?:--|[-–—])\s*\d+\.\d+)?।।\s*")
        .expect("Invalid verse prefix regex")
});

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

static SPACE_BEFORE_PUNCTUATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+([!?,।;:])").expect("Invalid punctuation spacing regex")
});

// @const: Punctuation dropped before tokenizing
static TOKEN_PUNCTUATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[!?,।;:\-–—\[\]"()/]"#).expect("Invalid token punctuation regex")
});

/// Remove a leading verse-number marker from trimmed text
pub fn strip_verse_prefix(text: &str) -> String {
    VERSE_PREFIX_REGEX.replace(text.trim(), "").into_owned()
}

/// Normalize commentary for comparison.
///
/// Strips the verse marker, collapses whitespace runs to one space, trims, and
/// removes whitespace in front of `! ? , । ; :`.
pub fn normalize_text(text: &str) -> String {
    let stripped = strip_verse_prefix(text);
    let collapsed = WHITESPACE_REGEX.replace_all(stripped.trim(), " ");
    SPACE_BEFORE_PUNCTUATION_REGEX
        .replace_all(&collapsed, "${1}")
        .into_owned()
}

/// Normalized, lowercased text with punctuation replaced by spaces
pub fn strip_for_tokens(text: &str) -> String {
    let normalized = normalize_text(text);
    let spaced = TOKEN_PUNCTUATION_REGEX.replace_all(&normalized, " ");
    WHITESPACE_REGEX.replace_all(&spaced, " ").to_lowercase()
}

/// Whitespace-separated tokens of [`strip_for_tokens`]
pub fn tokenize(text: &str) -> Vec<String> {
    strip_for_tokens(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
