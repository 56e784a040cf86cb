/*!
 * Corpus-wide speaker normalization.
 *
 * A verse may continue the previous speaker's discourse without repeating the
 * "X उवाच" opening, so speakers can only be recomputed in verse order across a
 * whole chapter. Records are ordered by numeric `(chapter, verse)`; filename
 * order would put 2.40 before 2.4.
 *
 * The whole corpus is read before any file is written, so a malformed record
 * aborts the run without partial rewrites.
 */

use log::info;

use crate::corpus::VerseFile;
use crate::errors::AppError;
use crate::speakers::detect_speaker;
use crate::verse_record::{VerseId, VerseRecord};

/// Carry-forward state for one pass over a sorted corpus
#[derive(Debug, Default, Clone, Copy)]
pub struct SpeakerCarry {
    chapter: Option<u32>,
    current: Option<&'static str>,
}

impl SpeakerCarry {
    /// Advance to the next verse and return the speaker it should have.
    ///
    /// `None` means no speaker can be inferred and the record is left alone.
    pub fn step(&mut self, id: VerseId, detected: Option<&'static str>) -> Option<&'static str> {
        if self.chapter != Some(id.chapter) {
            self.chapter = Some(id.chapter);
            self.current = None;
        }
        if detected.is_some() {
            self.current = detected;
        }
        self.current
    }
}

/// Compute the intended speaker of each verse.
///
/// `verses` must be sorted by `(chapter, verse)`; each item pairs a verse with
/// the speaker detected from its own text.
pub fn compute_speakers(verses: &[(VerseId, Option<&'static str>)]) -> Vec<Option<&'static str>> {
    verses
        .iter()
        .scan(SpeakerCarry::default(), |carry, (id, detected)| Some(carry.step(*id, *detected)))
        .collect()
}

/// Result of a normalization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub examined: usize,
    pub changed: usize,
}

// @struct: Recomputes every record's speaker by carry-forward
#[derive(Debug, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Recompute speakers for all `files` and rewrite the records that change
    pub fn run(&self, files: &[VerseFile]) -> Result<NormalizeSummary, AppError> {
        let mut loaded: Vec<(VerseFile, VerseRecord)> = files
            .iter()
            .map(|file| file.read().map(|record| (file.clone(), record)))
            .collect::<Result<_, _>>()?;
        loaded.sort_by_key(|(file, _)| file.id);

        let detected: Vec<(VerseId, Option<&'static str>)> = loaded
            .iter()
            .map(|(file, record)| (file.id, record.slok().and_then(detect_speaker)))
            .collect();
        let computed = compute_speakers(&detected);

        let mut summary = NormalizeSummary::default();
        for ((file, mut record), speaker) in loaded.into_iter().zip(computed) {
            summary.examined += 1;
            let existing = record.speaker().map(str::to_string);

            match speaker {
                Some(speaker) if existing.as_deref() != Some(speaker) => {
                    record.set_speaker(speaker);
                    record.write(&file.path)?;
                    summary.changed += 1;
                    info!(
                        "Updated {} -> {} (was {})",
                        file.file_name(),
                        speaker,
                        existing.as_deref().unwrap_or("None")
                    );
                }
                _ => info!(
                    "Kept    {} -> {}",
                    file.file_name(),
                    existing.as_deref().unwrap_or("None")
                ),
            }
        }

        info!("Summary: examined={}, changed={}", summary.examined, summary.changed);
        Ok(summary)
    }
}
