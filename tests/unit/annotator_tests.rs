/*!
 * Tests for per-record speaker annotation
 */

use std::fs;
use anyhow::Result;
use slokwai::annotator::{AnnotateAction, Annotator};
use slokwai::verse_record::VerseRecord;
use crate::common;

const ARJUNA_SLOK: &str = "अर्जुन उवाच\nसेनयोरुभयोर्मध्ये रथं स्थापय मेऽच्युत।।1.21।।";
const BHAGAVAN_SLOK: &str = "श्रीभगवानुवाच\nकुतस्त्वा कश्मलमिदं विषमे समुपस्थितम्।।2.2।।";

/// A record with a known prefix and no speaker gets one right before slok
#[test]
fn test_annotateFile_withPrefixAndNoSpeaker_shouldInsertBeforeSlok() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_verse(temp_dir.path(), 1, 21, ARJUNA_SLOK, None, Some("टीका"))?;

    let action = Annotator::new(false).annotate_file(&path)?;
    assert_eq!(action, AnnotateAction::Add);

    let record = VerseRecord::read(&path)?;
    assert_eq!(
        record.keys().collect::<Vec<_>>(),
        vec!["_id", "chapter", "verse", "speaker", "slok", "rams"]
    );
    assert_eq!(record.speaker(), Some("अर्जुन"));

    let expected = common::verse_json(1, 21, ARJUNA_SLOK, Some("अर्जुन"), Some("टीका"));
    assert_eq!(fs::read_to_string(&path)?, expected);
    Ok(())
}

/// Running twice leaves the file untouched the second time
#[test]
fn test_annotateFile_runTwice_shouldMatchWithoutRewrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_verse(temp_dir.path(), 2, 2, BHAGAVAN_SLOK, None, None)?;
    let annotator = Annotator::new(false);

    assert_eq!(annotator.annotate_file(&path)?, AnnotateAction::Add);
    let after_first = fs::read_to_string(&path)?;
    let modified_first = fs::metadata(&path)?.modified()?;

    assert_eq!(annotator.annotate_file(&path)?, AnnotateAction::Match);
    assert_eq!(fs::read_to_string(&path)?, after_first);
    assert_eq!(fs::metadata(&path)?.modified()?, modified_first);
    Ok(())
}

/// A differing speaker is reported but kept unless mismatches are fixed
#[test]
fn test_annotateFile_withMismatch_shouldReportOrFix() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let original = common::verse_json(2, 2, BHAGAVAN_SLOK, Some("अर्जुन"), None);
    let path = common::create_test_file(temp_dir.path(), &common::verse_filename(2, 2), &original)?;

    assert_eq!(Annotator::new(false).annotate_file(&path)?, AnnotateAction::Mismatch);
    assert_eq!(fs::read_to_string(&path)?, original);

    assert_eq!(Annotator::new(true).annotate_file(&path)?, AnnotateAction::Fix);
    assert_eq!(common::read_speaker(&path)?.as_deref(), Some("श्रीभगवान्"));
    Ok(())
}

/// Fixing a speaker stored after slok moves it in front of slok
#[test]
fn test_annotateRecord_fixMisplacedSpeaker_shouldRestoreOrder() -> Result<()> {
    let mut record = VerseRecord::parse(
        r#"{"slok": "सञ्जय उवाच\nएवमुक्त्वा", "speaker": "अर्जुन", "rams": {"ht": "x"}}"#,
        std::path::Path::new("x.json"),
    )?;

    assert_eq!(Annotator::new(true).annotate_record(&mut record), AnnotateAction::Fix);
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["speaker", "slok", "rams"]);
    assert_eq!(record.speaker(), Some("सञ्जय"));
    Ok(())
}

/// Files that fail to parse are counted and do not stop the run
#[test]
fn test_annotateFiles_withMalformedFile_shouldContinue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_verse(temp_dir.path(), 1, 1, "धृतराष्ट्र उवाच\nधर्मक्षेत्रे", None, None)?;
    common::create_test_file(temp_dir.path(), &common::verse_filename(1, 2), "not json")?;
    common::create_verse(temp_dir.path(), 1, 3, "दृष्ट्वा तु पाण्डवानीकं", None, None)?;

    let files = slokwai::corpus::list_verse_files(temp_dir.path())?;
    let tally = Annotator::new(false).annotate_files(&files);

    assert_eq!(tally.count(AnnotateAction::Add), 1);
    assert_eq!(tally.count(AnnotateAction::None), 1);
    assert_eq!(tally.errors, 1);
    assert_eq!(tally.total(), 3);
    Ok(())
}
