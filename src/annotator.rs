/*!
 * Speaker annotation for single verse records.
 *
 * Each record is judged on its own: if the first line of its verse text starts
 * with a known prefix, the mapped speaker is inserted immediately before `slok`.
 * An existing, different speaker is either reported or corrected depending on
 * the configured mode.
 */

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use log::{error, info, warn};

use crate::corpus::VerseFile;
use crate::errors::RecordError;
use crate::file_utils::FileManager;
use crate::speakers::detect_speaker;
use crate::verse_record::{VerseRecord, SPEAKER_KEY};

/// Outcome of annotating one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnnotateAction {
    /// No known prefix on the first line
    None,
    /// Speaker was missing and has been inserted
    Add,
    /// Stored speaker already equals the detected one
    Match,
    /// Stored speaker differs and was left as is
    Mismatch,
    /// Stored speaker differed and has been overwritten
    Fix,
}

impl AnnotateAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Add => "add",
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::Fix => "fix",
        }
    }

    /// Whether this outcome requires rewriting the file
    pub fn rewrites(&self) -> bool {
        matches!(self, Self::Add | Self::Fix)
    }
}

impl fmt::Display for AnnotateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of annotation outcomes over a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTally {
    pub counts: BTreeMap<AnnotateAction, usize>,
    pub errors: usize,
}

impl ActionTally {
    pub fn record(&mut self, action: AnnotateAction) {
        *self.counts.entry(action).or_default() += 1;
    }

    pub fn count(&self, action: AnnotateAction) -> usize {
        self.counts.get(&action).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.errors
    }
}

impl fmt::Display for ActionTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .counts
            .iter()
            .map(|(action, count)| format!("{}={}", action, count))
            .collect();
        if self.errors > 0 {
            parts.push(format!("error={}", self.errors));
        }
        write!(f, "{}", parts.join(", "))
    }
}

// @struct: Per-record speaker annotator
#[derive(Debug, Clone, Copy, Default)]
pub struct Annotator {
    // @field: Overwrite differing stored speakers instead of reporting them
    fix_mismatches: bool,
}

impl Annotator {
    pub fn new(fix_mismatches: bool) -> Self {
        Self { fix_mismatches }
    }

    /// Annotate a record in memory and report what happened.
    ///
    /// Only `Add` and `Fix` modify the record.
    pub fn annotate_record(&self, record: &mut VerseRecord) -> AnnotateAction {
        let Some(detected) = record.slok().and_then(detect_speaker) else {
            return AnnotateAction::None;
        };

        let existing = record.speaker().map(str::to_string);
        match existing.as_deref() {
            None if !record.contains_key(SPEAKER_KEY) => {
                record.set_speaker(detected);
                AnnotateAction::Add
            }
            Some(stored) if stored == detected => AnnotateAction::Match,
            _ if self.fix_mismatches => {
                record.set_speaker(detected);
                AnnotateAction::Fix
            }
            _ => AnnotateAction::Mismatch,
        }
    }

    /// Annotate one record file, rewriting it only when the record changed
    pub fn annotate_file<P: AsRef<Path>>(&self, path: P) -> Result<AnnotateAction, RecordError> {
        let path = path.as_ref();
        let mut record = VerseRecord::read(path)?;
        let previous = record.speaker().map(str::to_string);
        let action = self.annotate_record(&mut record);
        let name = FileManager::display_name(path);

        if action.rewrites() {
            record.write(path)?;
        }

        match action {
            AnnotateAction::Mismatch => warn!(
                "{} {}: stored '{}' differs from detected '{}'",
                action,
                name,
                previous.as_deref().unwrap_or("None"),
                record.slok().and_then(detect_speaker).unwrap_or_default()
            ),
            AnnotateAction::Fix => info!(
                "{} {}: {} -> {}",
                action,
                name,
                previous.as_deref().unwrap_or("None"),
                record.speaker().unwrap_or_default()
            ),
            _ => info!("{} {} -> {}", action, name, record.speaker().unwrap_or("None")),
        }

        Ok(action)
    }

    /// Annotate every file, isolating per-file failures
    pub fn annotate_files(&self, files: &[VerseFile]) -> ActionTally {
        let mut tally = ActionTally::default();

        for file in files {
            match self.annotate_file(&file.path) {
                Ok(action) => tally.record(action),
                Err(e) => {
                    error!("Error processing {}: {}", file.file_name(), e);
                    tally.errors += 1;
                }
            }
        }

        tally
    }
}
