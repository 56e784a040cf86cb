/*!
 * Tests for corpus-wide speaker normalization
 */

use std::fs;
use anyhow::Result;
use slokwai::corpus::list_verse_files;
use slokwai::normalizer::{NormalizeSummary, Normalizer};
use slokwai::verse_record::VerseRecord;
use crate::common;

/// Continuation verses inherit the speaker in numeric, not lexicographic, order
#[test]
fn test_run_withVerse4And40_shouldCarryInNumericOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();

    common::create_verse(dir, 2, 1, "सञ्जय उवाच\nतं तथा कृपयाविष्टम्", None, None)?;
    common::create_verse(dir, 2, 2, "श्रीभगवानुवाच\nकुतस्त्वा कश्मलमिदं", None, None)?;
    common::create_verse(dir, 2, 3, "क्लैब्यं मा स्म गमः पार्थ", None, None)?;
    common::create_verse(dir, 2, 4, "अर्जुन उवाच\nकथं भीष्ममहं सङ्ख्ये", None, None)?;
    common::create_verse(dir, 2, 5, "गुरूनहत्वा हि महानुभावान्", None, None)?;
    for verse in 6..=39 {
        common::create_verse(dir, 2, verse, "श्रीभगवानुवाच\nअशोच्यानन्वशोचस्त्वं", None, None)?;
    }
    // Wrongly propagated from 2.4 by an earlier filename-ordered pass
    common::create_verse(dir, 2, 40, "नेहाभिक्रमनाशोऽस्ति", Some("अर्जुन"), None)?;

    let files = list_verse_files(dir)?;
    let summary = Normalizer::new().run(&files)?;

    let speaker = |verse: u32| common::read_speaker(&dir.join(common::verse_filename(2, verse)));
    assert_eq!(speaker(3)?.as_deref(), Some("श्रीभगवान्"));
    assert_eq!(speaker(5)?.as_deref(), Some("अर्जुन"));
    assert_eq!(speaker(40)?.as_deref(), Some("श्रीभगवान्"));
    assert_eq!(summary, NormalizeSummary { examined: 40, changed: 40 });
    Ok(())
}

/// A continuation inherits the speaker and a new prefix switches it
#[test]
fn test_run_withContinuationThenNewPrefix_shouldSwitchSpeaker() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_verse(dir, 1, 1, "अर्जुन उवाच\nपहला", None, None)?;
    common::create_verse(dir, 1, 2, "निरन्तर", None, None)?;
    common::create_verse(dir, 1, 3, "धृतराष्ट्र उवाच\nतीसरा", None, None)?;

    Normalizer::new().run(&list_verse_files(dir)?)?;

    let speaker = |verse: u32| common::read_speaker(&dir.join(common::verse_filename(1, verse)));
    assert_eq!(speaker(1)?.as_deref(), Some("अर्जुन"));
    assert_eq!(speaker(2)?.as_deref(), Some("अर्जुन"));
    assert_eq!(speaker(3)?.as_deref(), Some("धृतराष्ट्र"));
    Ok(())
}

/// Carry-forward resets at a chapter boundary and unknown openers are left alone
#[test]
fn test_run_atChapterBoundary_shouldNotInheritPreviousChapter() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_verse(dir, 1, 47, "सञ्जय उवाच\nएवमुक्त्वार्जुनः", None, None)?;
    let opener = common::create_verse(dir, 2, 1, "तं तथा कृपयाविष्टम्", None, None)?;
    let before = fs::read_to_string(&opener)?;

    let summary = Normalizer::new().run(&list_verse_files(dir)?)?;

    assert_eq!(fs::read_to_string(&opener)?, before);
    assert_eq!(common::read_speaker(&opener)?, None);
    assert_eq!(summary, NormalizeSummary { examined: 2, changed: 1 });
    Ok(())
}

/// A correct corpus is not rewritten
#[test]
fn test_run_withCorrectSpeakers_shouldChangeNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_verse(dir, 3, 1, "अर्जुन उवाच\nज्यायसी चेत्", Some("अर्जुन"), Some("टीका"))?;
    common::create_verse(dir, 3, 2, "व्यामिश्रेणेव वाक्येन", Some("अर्जुन"), Some("टीका"))?;

    let summary = Normalizer::new().run(&list_verse_files(dir)?)?;
    assert_eq!(summary, NormalizeSummary { examined: 2, changed: 0 });
    Ok(())
}

/// A speaker stored after slok is moved in front of it when recomputed
#[test]
fn test_run_withStaleSpeakerAfterSlok_shouldReinsertBeforeSlok() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        &common::verse_filename(4, 1),
        "{\n    \"slok\": \"श्रीभगवानुवाच\\nइमं विवस्वते\",\n    \"speaker\": \"अर्जुन\"\n}\n",
    )?;

    Normalizer::new().run(&list_verse_files(temp_dir.path())?)?;

    let record = VerseRecord::read(&path)?;
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["speaker", "slok"]);
    assert_eq!(record.speaker(), Some("श्रीभगवान्"));
    Ok(())
}

/// A malformed record aborts the run before anything is written
#[test]
fn test_run_withMalformedRecord_shouldAbortWithoutWrites() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    let first = common::create_verse(dir, 5, 1, "अर्जुन उवाच\nसंन्यासं", None, None)?;
    common::create_test_file(dir, &common::verse_filename(5, 2), "{ broken")?;
    let before = fs::read_to_string(&first)?;

    let result = Normalizer::new().run(&list_verse_files(dir)?);

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&first)?, before);
    Ok(())
}
