use log::{debug, error, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, CorpusError, RecordError};
use crate::file_utils::FileManager;
use crate::verse_record::{VerseId, VerseRecord};

// @module: Verse corpus directory access

// @struct: A verse file located in the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseFile {
    // @field: Chapter and verse from the filename
    pub id: VerseId,

    // @field: Path to the record
    pub path: PathBuf,
}

impl VerseFile {
    pub fn read(&self) -> Result<VerseRecord, RecordError> {
        VerseRecord::read(&self.path)
    }

    pub fn file_name(&self) -> String {
        FileManager::display_name(&self.path)
    }
}

/// Commentary and speaker of one verse, as consumed by the renderers
#[derive(Debug, Clone, PartialEq)]
pub struct VerseEntry {
    pub id: VerseId,
    pub commentary: String,
    pub speaker: Option<String>,
}

impl VerseEntry {
    pub fn new(id: VerseId, commentary: impl Into<String>, speaker: Option<&str>) -> Self {
        Self {
            id,
            commentary: commentary.into(),
            speaker: speaker.map(str::to_string),
        }
    }
}

/// List every verse file in `dir`, sorted by numeric `(chapter, verse)`.
///
/// `.json` files whose names do not encode a chapter and verse are ignored.
pub fn list_verse_files<P: AsRef<Path>>(dir: P) -> Result<Vec<VerseFile>, AppError> {
    let dir = dir.as_ref();
    if !FileManager::dir_exists(dir) {
        return Err(CorpusError::MissingDirectory(dir.to_path_buf()).into());
    }

    let mut files: Vec<VerseFile> = FileManager::find_files(dir, "json")?
        .into_iter()
        .filter_map(|path| match VerseId::from_path(&path) {
            Ok(id) => Some(VerseFile { id, path }),
            Err(e) => {
                debug!("Ignoring {:?}: {}", path, e);
                None
            }
        })
        .collect();

    files.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.path.cmp(&b.path)));
    Ok(files)
}

/// Load the commentary of every verse in `dir`, sorted by `(chapter, verse)`.
///
/// Malformed records are reported and skipped; records without `rams.ht` are
/// skipped with a warning.
pub fn load_commentary<P: AsRef<Path>>(dir: P) -> Result<Vec<VerseEntry>, AppError> {
    let mut entries = Vec::new();

    for file in list_verse_files(dir)? {
        let record = match file.read() {
            Ok(record) => record,
            Err(e) => {
                error!("Error reading {}: {}", file.file_name(), e);
                continue;
            }
        };

        match record.commentary() {
            Some(text) => entries.push(VerseEntry::new(file.id, text, record.speaker())),
            None => warn!("'rams.ht' not found in {}", file.file_name()),
        }
    }

    Ok(entries)
}

/// Re-serialize a record that lacks a trailing newline.
///
/// Returns `true` if the file was rewritten.
pub fn fix_trailing_newline<P: AsRef<Path>>(path: P) -> Result<bool, RecordError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.ends_with('\n') {
        return Ok(false);
    }

    let record = VerseRecord::parse(&content, path)?;
    record.write(path)?;
    Ok(true)
}
