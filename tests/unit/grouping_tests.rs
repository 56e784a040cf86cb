/*!
 * Tests for commentary normalization and verse grouping
 */

use slokwai::app_config::GroupingConfig;
use slokwai::corpus::VerseEntry;
use slokwai::grouping::{group_verses, normalize_text, strip_verse_prefix, TextEquivalence};
use slokwai::verse_record::VerseId;

fn entry(chapter: u32, verse: u32, text: &str, speaker: Option<&str>) -> VerseEntry {
    VerseEntry::new(VerseId::new(chapter, verse), text, speaker)
}

/// Verse markers are removed in both single and ranged forms
#[test]
fn test_stripVersePrefix_withSingleAndRangedMarkers_shouldRemove() {
    assert_eq!(strip_verse_prefix("।।2.69।। some text"), "some text");
    assert_eq!(strip_verse_prefix("।।3.1 -- 3.2।। other text"), "other text");
    assert_eq!(normalize_text("।।2.69।। some text"), "some text");
}

/// Near-duplicate texts merge into one group and unrelated text starts a new one
#[test]
fn test_groupVerses_withNearDuplicates_shouldMergeRun() {
    let speaker = Some("श्रीभगवान्");
    let entries = vec![
        entry(2, 11, "ABC", speaker),
        entry(2, 12, "ABC ", speaker),
        entry(2, 13, "ABCD", speaker),
        entry(2, 14, "completely different commentary about something else", speaker),
    ];

    let grouped = group_verses(&entries, &TextEquivalence::default());

    assert_eq!(grouped.len(), 2);
    assert_eq!((grouped[0].chapter, grouped[0].start_verse, grouped[0].end_verse), (2, 11, 13));
    assert_eq!(grouped[0].text, "ABC");
    assert_eq!((grouped[1].start_verse, grouped[1].end_verse), (14, 14));
}

/// A shared commentary repeated with its verse range marker groups the whole range
#[test]
fn test_groupVerses_withRangedMarkers_shouldGroupRange() {
    let text = "तुम्हारा शोक करना उचित नहीं है, क्योंकि पण्डित लोग मरे हुए या जीवित किसीके लिये भी शोक नहीं करते।";
    let entries = vec![
        entry(2, 11, &format!("।।2.11 -- 2.12।। {}", text), Some("श्रीभगवान्")),
        entry(2, 12, &format!("।।2.11 – 2.12।।{}", text), Some("श्रीभगवान्")),
    ];

    let grouped = group_verses(&entries, &TextEquivalence::default());
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].verse_label(), "2.11 - 2.12");
}

/// Speaker changes always split groups, even for identical text
#[test]
fn test_groupVerses_withSpeakerChange_shouldSplit() {
    let entries = vec![
        entry(1, 1, "same", Some("सञ्जय")),
        entry(1, 2, "same", Some("धृतराष्ट्र")),
        entry(1, 3, "same", None),
        entry(1, 4, "same", None),
    ];
    let grouped = group_verses(&entries, &TextEquivalence::default());
    assert_eq!(grouped.len(), 3);
    assert_eq!((grouped[2].start_verse, grouped[2].end_verse), (3, 4));
}

/// Group count never exceeds verse count and equals it when nothing merges
#[test]
fn test_groupVerses_withDistinctTexts_shouldKeepEveryVerse() {
    let entries: Vec<VerseEntry> = (1..=5)
        .map(|v| entry(4, v, &format!("पाठ {} एक दो तीन चार पाँच छह {}", v, "क".repeat(v as usize)), None))
        .collect();
    let grouped = group_verses(&entries, &TextEquivalence::default());
    assert!(grouped.len() <= entries.len());
    assert_eq!(grouped.len(), entries.len());
    assert!(grouped.iter().all(|g| !g.is_multi_verse()));
}

/// Single-token edits in long texts fall under the similarity threshold
#[test]
fn test_areEquivalent_withLongTextAndSmallEdit_shouldMatch() {
    let base = "भगवान् कहते हैं कि मनुष्यको अपने कर्तव्यका पालन करना चाहिये और फलकी इच्छा नहीं रखनी चाहिये। ".repeat(4);
    let edited = base.replacen("मनुष्यको", "मनुष्य को", 1);
    assert!(TextEquivalence::default().are_equivalent(&base, &edited));
}

/// Tolerances come from the configuration
#[test]
fn test_areEquivalent_withStrictConfig_shouldRejectTokenDelta() {
    let strict = TextEquivalence::new(GroupingConfig {
        similarity_threshold: 1.0,
        max_token_difference: 0,
        max_length_difference: 0,
    });
    assert!(!strict.are_equivalent("ABC", "ABCD"));
    assert!(strict.are_equivalent("ABC", " ABC "));
    assert!(TextEquivalence::default().are_equivalent("ABC", "ABCD"));
}
