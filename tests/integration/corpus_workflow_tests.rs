/*!
 * End-to-end tests running the corpus tools through the controller
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use slokwai::annotator::AnnotateAction;
use slokwai::app_config::Config;
use slokwai::app_controller::{Controller, NewlineSummary};
use slokwai::errors::{AppError, CorpusError};
use slokwai::normalizer::NormalizeSummary;
use crate::common;

fn controller_for(dir: &Path) -> Result<Controller> {
    let config = Config {
        slok_dir: dir.to_path_buf(),
        ..Config::default()
    };
    Ok(Controller::with_config(config)?)
}

/// Test that the annotator and normalizer together produce a fully attributed corpus
#[test]
fn test_addThenRecompute_shouldAttributeEveryVerse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_verse(dir, 1, 1, "धृतराष्ट्र उवाच\nधर्मक्षेत्रे कुरुक्षेत्रे", None, Some("धृतराष्ट्र बोले"))?;
    common::create_verse(dir, 1, 2, "सञ्जय उवाच\nदृष्ट्वा तु पाण्डवानीकं", None, Some("सञ्जय बोले"))?;
    common::create_verse(dir, 1, 3, "पश्यैतां पाण्डुपुत्राणाम्", None, Some("आगे"))?;
    // Non-record files in the directory are ignored
    common::create_test_file(dir, "notes.json", "{}")?;
    common::create_test_file(dir, "README.txt", "x")?;

    let controller = controller_for(dir)?;

    let tally = controller.add_speakers(false)?;
    assert_eq!(tally.count(AnnotateAction::Add), 2);
    assert_eq!(tally.count(AnnotateAction::None), 1);
    assert_eq!(common::read_speaker(&dir.join(common::verse_filename(1, 3)))?, None);

    let summary = controller.recompute_speakers()?;
    assert_eq!(summary, NormalizeSummary { examined: 3, changed: 1 });
    assert_eq!(
        common::read_speaker(&dir.join(common::verse_filename(1, 3)))?.as_deref(),
        Some("सञ्जय")
    );

    // A second annotation pass now matches everywhere it detects a prefix
    let tally = controller.add_speakers(false)?;
    assert_eq!(tally.count(AnnotateAction::Match), 2);
    assert_eq!(tally.count(AnnotateAction::Add), 0);
    Ok(())
}

/// Test that newline repair rewrites only files lacking the trailing newline
#[test]
fn test_fixNewlines_shouldRewriteOnlyUnterminatedFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    let good = common::create_verse(dir, 6, 1, "श्रीभगवानुवाच\nअनाश्रितः", Some("श्रीभगवान्"), None)?;
    let expected = fs::read_to_string(&good)?;
    let bad = common::create_test_file(dir, &common::verse_filename(6, 2), expected.trim_end())?;
    common::create_test_file(dir, &common::verse_filename(6, 3), "{ broken")?;

    let summary = controller_for(dir)?.fix_newlines()?;

    assert_eq!(summary, NewlineSummary { examined: 3, fixed: 1, errors: 1 });
    assert_eq!(fs::read_to_string(&bad)?, expected);
    assert_eq!(fs::read_to_string(&good)?, expected);
    Ok(())
}

/// Test that a missing corpus directory is reported before anything runs
#[test]
fn test_addSpeakers_withMissingDirectory_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = controller_for(&temp_dir.path().join("missing"))?;

    let err = controller.add_speakers(true).unwrap_err();
    assert!(matches!(err, AppError::Corpus(CorpusError::MissingDirectory(_))));
    assert!(controller.recompute_speakers().is_err());
    Ok(())
}

/// Test that an invalid configuration is rejected when building the controller
#[test]
fn test_withConfig_withInvalidThreshold_shouldFail() {
    let mut config = Config::default();
    config.grouping.similarity_threshold = -0.5;
    assert!(Controller::with_config(config).is_err());
}
