//! The journal entry data model.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reference to a recorded voice note attached to an entry.
///
/// The resource locator is opaque to the journal core: it is whatever the
/// capture capability handed back, kept only so the presentation layer can
/// play it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceNote {
    /// Opaque locator of the playable resource.
    pub resource: String,
    /// Recording length in whole seconds.
    #[serde(default)]
    pub duration_secs: u32,
}

impl VoiceNote {
    /// Formats the duration as `M:SS` for display.
    pub fn format_duration(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }
}

/// A single journal record.
///
/// Entries are immutable once created: there is no update or delete. They
/// are appended to the store in creation order and persisted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque unique id. Uniqueness is the only requirement; ordering is
    /// carried by the collection, not the id.
    pub id: String,
    /// Creation instant, serialized as an RFC 3339 timestamp.
    pub created_at: DateTime<Local>,
    /// Free-text content; non-empty once persisted.
    pub content: String,
    /// Mood label. Drawn from the display set in practice, but unknown
    /// labels are tolerated everywhere.
    pub mood: String,
    /// Optional attached voice note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_note: Option<VoiceNote>,
}

impl Entry {
    /// Creates a new entry with a freshly generated id.
    pub fn new(
        content: impl Into<String>,
        mood: impl Into<String>,
        voice_note: Option<VoiceNote>,
        created_at: DateTime<Local>,
    ) -> Self {
        Entry {
            id: Uuid::new_v4().to_string(),
            created_at,
            content: content.into(),
            mood: mood.into(),
            voice_note,
        }
    }

    /// The local calendar day this entry was written.
    pub fn day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// A mood offered by the entry form, with its display emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMood {
    /// The mood label as shown and stored.
    pub label: &'static str,
    /// The emoji shown next to the label.
    pub emoji: &'static str,
}

/// The closed set of moods the entry form offers.
///
/// This is a display convenience, not a validation list: entries carrying
/// labels outside this set are rendered with [`UNKNOWN_MOOD_EMOJI`].
pub const DISPLAY_MOODS: &[DisplayMood] = &[
    DisplayMood {
        label: "In Love",
        emoji: "\u{1f495}",
    },
    DisplayMood {
        label: "Adoring",
        emoji: "\u{1f970}",
    },
    DisplayMood {
        label: "Peaceful",
        emoji: "\u{1f60c}",
    },
    DisplayMood {
        label: "Missing",
        emoji: "\u{1f494}",
    },
    DisplayMood {
        label: "Grateful",
        emoji: "\u{2728}",
    },
    DisplayMood {
        label: "Dreamy",
        emoji: "\u{1f319}",
    },
];

/// Generic icon shown for mood labels outside the display set.
pub const UNKNOWN_MOOD_EMOJI: &str = "\u{1f4dd}";

/// Returns the display emoji for a mood label, case-insensitively.
pub fn mood_emoji(label: &str) -> &'static str {
    DISPLAY_MOODS
        .iter()
        .find(|mood| mood.label.eq_ignore_ascii_case(label))
        .map(|mood| mood.emoji)
        .unwrap_or(UNKNOWN_MOOD_EMOJI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_new_entries_get_unique_ids() {
        let a = Entry::new("first", "Peaceful", None, fixed_instant());
        let b = Entry::new("second", "Peaceful", None, fixed_instant());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_entry_day_uses_local_calendar() {
        let entry = Entry::new("evening note", "Dreamy", None, fixed_instant());
        assert_eq!(
            entry.day(),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_entry_round_trips_through_json() {
        let entry = Entry::new(
            "a note with a recording",
            "Grateful",
            Some(VoiceNote {
                resource: "blob:abc123".to_string(),
                duration_secs: 75,
            }),
            fixed_instant(),
        );

        let json = serde_json::to_string(&entry).unwrap();
        let restored: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, entry);
    }

    #[test]
    fn test_entry_without_voice_note_omits_field() {
        let entry = Entry::new("plain", "Calm", None, fixed_instant());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("voice_note"));

        let restored: Entry = serde_json::from_str(&json).unwrap();
        assert!(restored.voice_note.is_none());
    }

    #[test]
    fn test_voice_note_duration_formatting() {
        let note = VoiceNote {
            resource: "blob:x".to_string(),
            duration_secs: 75,
        };
        assert_eq!(note.format_duration(), "1:15");

        let short = VoiceNote {
            resource: "blob:y".to_string(),
            duration_secs: 4,
        };
        assert_eq!(short.format_duration(), "0:04");
    }

    #[test]
    fn test_mood_emoji_lookup() {
        assert_eq!(mood_emoji("Peaceful"), "\u{1f60c}");
        assert_eq!(mood_emoji("peaceful"), "\u{1f60c}");
        assert_eq!(mood_emoji("Xyzzy"), UNKNOWN_MOOD_EMOJI);
    }
}
