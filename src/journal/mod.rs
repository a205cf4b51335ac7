//! The journal facade: state, submissions, and derived insights.
//!
//! `Journal` is the explicit store object the presentation layer drives. It
//! owns the persisted entry collection and streak state, and exposes the
//! derived computations (streak, resurfaced memory, mood trend) as methods
//! invoked on defined lifecycle events instead of implicit mount effects.

use crate::constants;
use crate::errors::{AppResult, JournalError};
use crate::journal_core::{self, StreakState};
use crate::store::KvStore;
use chrono::{DateTime, Local};
use rand::Rng;
use tracing::{debug, info, warn};

pub mod entry;
pub mod store;

pub use entry::{mood_emoji, DisplayMood, Entry, VoiceNote, DISPLAY_MOODS};
pub use store::EntryStore;

/// Chooses one index from a non-empty candidate set.
///
/// Resurfacing picks a memory uniformly at random; the picker is injected so
/// tests can supply a deterministic choice.
pub trait Picker {
    /// Returns an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// The production picker, backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// The outcome of a successful entry submission.
#[derive(Debug)]
pub struct Submission {
    /// The entry as persisted.
    pub entry: Entry,
    /// The streak count after this submission.
    pub streak: u32,
    /// Whether this submission extended a streak past one day.
    pub celebrated: bool,
}

/// A roughly year-old entry chosen for resurfacing.
#[derive(Debug, Clone, PartialEq)]
pub struct ResurfacedMemory {
    /// The resurfaced entry.
    pub entry: Entry,
    /// Display label for the entry's age ("A year ago today", "2 years ago").
    pub age_label: String,
}

/// One point of the mood trend projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Display date of the entry (short month plus day).
    pub date: String,
    /// Mood value on the 1..=5 scale.
    pub value: u8,
    /// The entry's original mood label.
    pub label: String,
}

/// The journal: entries, streak, and derived insights over one store.
pub struct Journal<S: KvStore> {
    store: EntryStore<S>,
    streak: StreakState,
    picker: Box<dyn Picker>,
}

impl<S: KvStore> Journal<S> {
    /// Opens the journal: loads persisted state and reconciles the streak.
    ///
    /// Reconciliation applies decay-on-read: a gap of two or more days since
    /// the last counted entry zeroes the stored streak. The load path never
    /// fails; malformed state degrades to defaults, and a failure to persist
    /// the decayed streak is logged and carried in memory only.
    pub fn open(store: S, now: DateTime<Local>) -> Self {
        Self::with_picker(store, now, Box::new(RandomPicker))
    }

    /// Opens the journal with an injected memory picker.
    pub fn with_picker(store: S, now: DateTime<Local>, picker: Box<dyn Picker>) -> Self {
        let store = EntryStore::load(store);
        let persisted = store.read_streak();
        let streak = journal_core::reconcile_on_load(persisted, now.date_naive());

        let mut journal = Journal {
            store,
            streak,
            picker,
        };

        if streak != persisted {
            info!(
                "Streak decayed from {} to {} after inactivity",
                persisted.count, streak.count
            );
            if let Err(e) = journal.store.write_streak(&streak) {
                warn!("Could not persist decayed streak: {}", e);
            }
        }

        journal
    }

    /// Submits a new entry.
    ///
    /// Validates defensively even though the presentation layer disables
    /// submit for incomplete input: blank content or a blank mood fails with
    /// [`JournalError::InvalidEntry`] before anything is persisted. On
    /// success the entry is appended and the streak state advanced and
    /// persisted.
    ///
    /// # Errors
    ///
    /// - `AppError::Journal` for invalid submissions
    /// - `AppError::Store` when the entry or streak cannot be persisted
    pub fn submit_entry(
        &mut self,
        content: &str,
        mood: &str,
        voice_note: Option<VoiceNote>,
        now: DateTime<Local>,
    ) -> AppResult<Submission> {
        if content.trim().is_empty() {
            return Err(JournalError::InvalidEntry {
                reason: "content is empty".to_string(),
            }
            .into());
        }
        if mood.trim().is_empty() {
            return Err(JournalError::InvalidEntry {
                reason: "mood is missing".to_string(),
            }
            .into());
        }

        let entry = Entry::new(content, mood, voice_note, now);
        self.store.append(entry.clone())?;

        let update = journal_core::record_submission(self.streak, now.date_naive());
        if update.state != self.streak {
            self.store.write_streak(&update.state)?;
            self.streak = update.state;
        }
        debug!(
            "Entry submitted; streak is {} day(s), celebrated: {}",
            self.streak.count, update.celebrated
        );

        Ok(Submission {
            entry,
            streak: self.streak.count,
            celebrated: update.celebrated,
        })
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    /// The current streak count.
    pub fn streak(&self) -> u32 {
        self.streak.count
    }

    /// Picks one roughly year-old entry to resurface, if any qualifies.
    ///
    /// Candidates are entries within the seven-day window around the same
    /// date one year ago. The choice is recomputed on every call and is not
    /// pinned; repeat calls may surface different candidates, which is fine
    /// for a surprise feature.
    pub fn resurfaced_memory(&mut self, now: DateTime<Local>) -> Option<ResurfacedMemory> {
        let today = now.date_naive();
        let candidates: Vec<&Entry> = self
            .store
            .entries()
            .iter()
            .filter(|entry| journal_core::in_resurface_window(entry.day(), today))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let index = self.picker.pick(candidates.len()).min(candidates.len() - 1);
        let entry = candidates[index].clone();
        let age_label = journal_core::memory_age_label(entry.day(), today);
        debug!(
            "Resurfacing 1 of {} candidate memories: {}",
            candidates.len(),
            age_label
        );

        Some(ResurfacedMemory { entry, age_label })
    }

    /// Projects the most recent entries' moods onto the 1..=5 scale.
    ///
    /// Takes up to `limit` of the newest entries in stored order, maps each
    /// mood through the fixed scale (unknown labels go to neutral), then
    /// reverses the sequence, reproducing the chart feed of the original
    /// timeline exactly.
    pub fn mood_trend(&self, limit: usize) -> Vec<TrendPoint> {
        let entries = self.store.entries();
        let start = entries.len().saturating_sub(limit);
        let mut points: Vec<TrendPoint> = entries[start..]
            .iter()
            .map(|entry| TrendPoint {
                date: entry
                    .created_at
                    .format(constants::TREND_DATE_FORMAT)
                    .to_string(),
                value: journal_core::mood_value(&entry.mood),
                label: entry.mood.clone(),
            })
            .collect();
        points.reverse();
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    /// Picker that always chooses a fixed index.
    struct FixedPicker(usize);

    impl Picker for FixedPicker {
        fn pick(&mut self, len: usize) -> usize {
            self.0.min(len - 1)
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 20, 15, 0).unwrap()
    }

    fn open_empty(now: DateTime<Local>) -> Journal<MemoryStore> {
        Journal::with_picker(MemoryStore::new(), now, Box::new(FixedPicker(0)))
    }

    #[test]
    fn test_submitted_entries_keep_insertion_order() {
        let now = at(2024, 1, 15);
        let mut journal = open_empty(now);

        journal.submit_entry("first", "Peaceful", None, now).unwrap();
        journal.submit_entry("second", "Anxious", None, now).unwrap();
        journal.submit_entry("third", "Grateful", None, now).unwrap();

        let contents: Vec<&str> = journal
            .entries()
            .iter()
            .map(|e| e.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let now = at(2024, 1, 15);
        let mut journal = open_empty(now);

        let result = journal.submit_entry("   ", "Peaceful", None, now);
        match result {
            Err(AppError::Journal(JournalError::InvalidEntry { reason })) => {
                assert!(reason.contains("content"));
            }
            other => panic!("Expected InvalidEntry, got {:?}", other.map(|s| s.entry)),
        }
        assert!(journal.entries().is_empty());
        assert_eq!(journal.streak(), 0);
    }

    #[test]
    fn test_missing_mood_is_rejected() {
        let now = at(2024, 1, 15);
        let mut journal = open_empty(now);

        let result = journal.submit_entry("real content", "", None, now);
        match result {
            Err(AppError::Journal(JournalError::InvalidEntry { reason })) => {
                assert!(reason.contains("mood"));
            }
            other => panic!("Expected InvalidEntry, got {:?}", other.map(|s| s.entry)),
        }
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn test_streak_across_consecutive_days() {
        let mut journal = open_empty(at(2024, 1, 15));

        let first = journal
            .submit_entry("day one", "Calm", None, at(2024, 1, 15))
            .unwrap();
        assert_eq!(first.streak, 1);
        assert!(!first.celebrated);

        let second = journal
            .submit_entry("day two", "Calm", None, at(2024, 1, 16))
            .unwrap();
        assert_eq!(second.streak, 2);
        assert!(second.celebrated);
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let mut journal = open_empty(at(2024, 1, 15));

        journal
            .submit_entry("day one", "Calm", None, at(2024, 1, 15))
            .unwrap();
        let after_gap = journal
            .submit_entry("back again", "Hopeful", None, at(2024, 1, 18))
            .unwrap();
        assert_eq!(after_gap.streak, 1);
        assert!(!after_gap.celebrated);
    }

    #[test]
    fn test_same_day_submission_keeps_streak() {
        let now = at(2024, 1, 15);
        let mut journal = open_empty(now);

        journal.submit_entry("morning", "Calm", None, now).unwrap();
        let evening = journal.submit_entry("evening", "Dreamy", None, now).unwrap();
        assert_eq!(evening.streak, 1);
        assert!(!evening.celebrated);
        assert_eq!(journal.entries().len(), 2);
    }

    #[test]
    fn test_resurfaces_year_old_entry() {
        let mut journal = open_empty(at(2024, 6, 15));
        // 2023-06-15 is exactly 366 days before 2024-06-15
        journal
            .submit_entry("last summer", "Joyful", None, at(2023, 6, 15))
            .unwrap();

        let memory = journal.resurfaced_memory(at(2024, 6, 15)).unwrap();
        assert_eq!(memory.entry.content, "last summer");
        assert_eq!(memory.age_label, "A year ago today");
    }

    #[test]
    fn test_does_not_resurface_outside_window() {
        let mut journal = open_empty(at(2024, 6, 15));
        // 17 days before the one-year anchor: outside the window
        journal
            .submit_entry("late spring", "Calm", None, at(2023, 5, 29))
            .unwrap();
        // A recent entry is never a memory
        journal
            .submit_entry("yesterday", "Calm", None, at(2024, 6, 14))
            .unwrap();

        assert!(journal.resurfaced_memory(at(2024, 6, 15)).is_none());
    }

    #[test]
    fn test_picker_selects_among_candidates() {
        let now = at(2024, 6, 15);
        let mut journal =
            Journal::with_picker(MemoryStore::new(), now, Box::new(FixedPicker(1)));
        journal
            .submit_entry("candidate one", "Calm", None, at(2023, 6, 14))
            .unwrap();
        journal
            .submit_entry("candidate two", "Calm", None, at(2023, 6, 16))
            .unwrap();

        let memory = journal.resurfaced_memory(now).unwrap();
        assert_eq!(memory.entry.content, "candidate two");
    }

    #[test]
    fn test_mood_trend_values_and_order() {
        let mut journal = open_empty(at(2024, 1, 15));
        journal
            .submit_entry("calm start", "Peaceful", None, at(2024, 1, 13))
            .unwrap();
        journal
            .submit_entry("odd one", "Xyzzy", None, at(2024, 1, 14))
            .unwrap();
        journal
            .submit_entry("rough day", "Overwhelmed", None, at(2024, 1, 15))
            .unwrap();

        let trend = journal.mood_trend(30);
        assert_eq!(trend.len(), 3);
        // The projection reverses the stored order
        assert_eq!(trend[0].label, "Overwhelmed");
        assert_eq!(trend[0].value, 1);
        assert_eq!(trend[1].label, "Xyzzy");
        assert_eq!(trend[1].value, 3);
        assert_eq!(trend[2].label, "Peaceful");
        assert_eq!(trend[2].value, 5);
        assert_eq!(trend[2].date, "Jan 13");
    }

    #[test]
    fn test_mood_trend_respects_limit() {
        let mut journal = open_empty(at(2024, 1, 1));
        for d in 1..=5 {
            journal
                .submit_entry("note", "Calm", None, at(2024, 1, d))
                .unwrap();
        }

        let trend = journal.mood_trend(2);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date, "Jan 5");
        assert_eq!(trend[1].date, "Jan 4");
    }

    #[test]
    fn test_decay_on_read_zeroes_stale_streak() {
        use crate::constants;
        use serde_json::json;

        let store = MemoryStore::with_values([
            (constants::STORE_KEY_STREAK_COUNT.to_string(), json!(5)),
            (
                constants::STORE_KEY_LAST_ENTRY_DAY.to_string(),
                json!("2024-01-05"),
            ),
        ]);
        let journal = Journal::open(store, at(2024, 1, 15));
        assert_eq!(journal.streak(), 0);
    }

    #[test]
    fn test_one_day_gap_keeps_stored_streak_on_load() {
        use crate::constants;
        use serde_json::json;

        let store = MemoryStore::with_values([
            (constants::STORE_KEY_STREAK_COUNT.to_string(), json!(5)),
            (
                constants::STORE_KEY_LAST_ENTRY_DAY.to_string(),
                json!("2024-01-14"),
            ),
        ]);
        let journal = Journal::open(store, at(2024, 1, 15));
        // Merely opening after a one-day gap neither resets nor increments
        assert_eq!(journal.streak(), 5);
    }
}
