/*!
 * Speaker attribution for verses.
 *
 * A verse announces its speaker with a fixed opening phrase ("अर्जुन उवाच" and
 * so on). This module holds the prefix table, detection against a verse's
 * first line, and the closed set of presentation roles used by the renderers.
 */

/// Canonical name of the principal speaker
pub const BHAGAVAN: &str = "श्रीभगवान्";

/// Canonical name of the questioner
pub const ARJUNA: &str = "अर्जुन";

/// Canonical narrator names
pub const SANJAYA: &str = "सञ्जय";
pub const DHRITARASHTRA: &str = "धृतराष्ट्र";

/// Label shown for messages without any speaker
pub const UNKNOWN_SPEAKER_LABEL: &str = "अन्य";

/// Verse-opening prefixes and the canonical speaker each one announces.
///
/// Prefixes are mutually exclusive, so the iteration order only has to be fixed.
pub const SPEAKER_PREFIXES: [(&str, &str); 4] = [
    ("श्रीभगवानुवाच", BHAGAVAN),
    ("अर्जुन उवाच", ARJUNA),
    ("सञ्जय उवाच", SANJAYA),
    ("धृतराष्ट्र उवाच", DHRITARASHTRA),
];

/// Detect the speaker announced on the first line of a verse.
pub fn detect_speaker(slok: &str) -> Option<&'static str> {
    let first_line = slok.split('\n').next().unwrap_or_default().trim();
    SPEAKER_PREFIXES
        .iter()
        .find(|(prefix, _)| first_line.starts_with(prefix))
        .map(|(_, speaker)| *speaker)
}

/// Presentation role of a speaker in rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerRole {
    /// The one asking questions, shown left-aligned
    Questioner,
    /// The principal speaker, shown right-aligned and optionally concealed
    PrincipalSpeaker,
    /// Narration, shown centered; holds the narrator's name
    Narrator(String),
    /// Anything else; holds the label to display
    Other(String),
}

impl SpeakerRole {
    // @maps: Raw speaker value to its role
    pub fn from_speaker(speaker: Option<&str>) -> Self {
        match speaker {
            Some(ARJUNA) => Self::Questioner,
            Some(BHAGAVAN) => Self::PrincipalSpeaker,
            Some(name @ (SANJAYA | DHRITARASHTRA)) => Self::Narrator(name.to_string()),
            Some(name) => Self::Other(name.to_string()),
            None => Self::Other(UNKNOWN_SPEAKER_LABEL.to_string()),
        }
    }

    // @returns: CSS class for the message bubble
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Questioner => "arjuna",
            Self::PrincipalSpeaker => "bhagavan",
            Self::Narrator(_) => "narrator",
            Self::Other(_) => "other",
        }
    }

    /// Name shown ahead of the verse label, for roles that carry one
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Narrator(name) | Self::Other(name) => Some(name),
            Self::Questioner | Self::PrincipalSpeaker => None,
        }
    }
}
