/*!
 * Verse records: one JSON document per verse.
 *
 * A record is kept as an explicit ordered list of `(key, value)` pairs so a
 * rewrite reproduces the field order of the file it was read from. The only
 * reorderings are the named operations on [`VerseRecord`] (`insert_before`,
 * `remove`, `set_speaker`).
 *
 * On disk a record is UTF-8 JSON with 4-space indentation, non-ASCII text left
 * unescaped, and exactly one trailing newline.
 */

use std::fmt;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::errors::RecordError;

// @const: Verse filename pattern, e.g. bhagavadgita_chapter_2_slok_40.json
static FILENAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"chapter_([0-9]+)_slok_([0-9]+)\.json$").expect("Invalid verse filename regex")
});

/// Key holding the verse text
pub const SLOK_KEY: &str = "slok";

/// Key holding the attributed speaker
pub const SPEAKER_KEY: &str = "speaker";

/// Identity of a verse: `(chapter, verse)`, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseId {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseId {
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }

    /// Extract the verse identity from a filename, if it follows the corpus pattern
    pub fn from_filename(name: &str) -> Option<Self> {
        let caps = FILENAME_REGEX.captures(name)?;
        let chapter = caps.get(1)?.as_str().parse().ok()?;
        let verse = caps.get(2)?.as_str().parse().ok()?;
        Some(Self { chapter, verse })
    }

    /// Extract the verse identity from the basename of a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self::from_filename(&name).ok_or(RecordError::InvalidFilename(name))
    }

    /// True if `next` is the verse immediately after this one in the same chapter
    pub fn is_followed_by(&self, next: &VerseId) -> bool {
        self.chapter == next.chapter && self.verse.checked_add(1) == Some(next.verse)
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chapter, self.verse)
    }
}

/// Order-preserving key-value document for one verse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VerseRecord {
    fields: Vec<(String, Value)>,
}

impl VerseRecord {
    /// Parse a record from JSON text. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(content).map_err(|source| RecordError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(map) => Ok(Self {
                fields: map.into_iter().collect(),
            }),
            _ => Err(RecordError::NotAnObject(path.to_path_buf())),
        }
    }

    /// Read and parse a record file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Rewrite the whole record file in canonical form
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), RecordError> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize with 4-space indentation, unescaped non-ASCII and one trailing newline
    pub fn to_json_string(&self) -> Result<String, RecordError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer).map_err(RecordError::Encode)?;
        let mut out = String::from_utf8_lossy(&buf).into_owned();
        out.push('\n');
        Ok(out)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a string through nested objects, e.g. `["rams", "ht"]`
    pub fn get_nested_str(&self, path: &[&str]) -> Option<&str> {
        let (first, rest) = path.split_first()?;
        let mut value = self.get(first)?;
        for key in rest {
            value = value.as_object()?.get(*key)?;
        }
        value.as_str()
    }

    /// Remove a field, returning its value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.position(key)?;
        Some(self.fields.remove(idx).1)
    }

    /// Insert `key` immediately before `anchor`, dropping any previous `key` entry.
    ///
    /// When `anchor` is absent the field is appended at the end.
    pub fn insert_before(&mut self, key: &str, value: Value, anchor: &str) {
        self.remove(key);
        let idx = self.position(anchor).unwrap_or(self.fields.len());
        self.fields.insert(idx, (key.to_string(), value));
    }

    // @returns: Verse text
    pub fn slok(&self) -> Option<&str> {
        self.get_str(SLOK_KEY)
    }

    // @returns: Stored speaker, if it is a string
    pub fn speaker(&self) -> Option<&str> {
        self.get_str(SPEAKER_KEY)
    }

    /// Set the speaker, placing it immediately before `slok`
    pub fn set_speaker(&mut self, speaker: &str) {
        self.insert_before(SPEAKER_KEY, Value::String(speaker.to_string()), SLOK_KEY);
    }

    // @returns: Commentary text stored at rams.ht
    pub fn commentary(&self) -> Option<&str> {
        self.get_nested_str(&["rams", "ht"])
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|(k, _)| k == key)
    }
}

impl Serialize for VerseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
