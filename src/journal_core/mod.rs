//! Core journal logic without I/O operations.
//!
//! This module contains the pure date and mood arithmetic behind the derived
//! insights: streak transitions, decay-on-read reconciliation, the
//! resurfacing date window, memory age labels, and the mood-to-value scale.
//! Everything here is a pure function of its arguments, invoked by the
//! `Journal` facade on defined lifecycle events.

use crate::constants;
use chrono::{Datelike, NaiveDate};

pub use constants::NEUTRAL_MOOD_VALUE;
pub use constants::RESURFACE_WINDOW_DAYS;
pub use constants::STREAK_BREAK_GAP_DAYS;

/// The derived writing-streak state.
///
/// A streak counts consecutive local calendar days on which at least one
/// entry was submitted. The state is recomputed on each submission and
/// reconciled once on load; it is derived, never canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakState {
    /// Number of consecutive days with at least one entry.
    pub count: u32,
    /// The last calendar day on which an entry was counted.
    pub last_entry_day: Option<NaiveDate>,
}

impl StreakState {
    /// The state of a journal with no counted entries.
    pub fn zero() -> Self {
        StreakState {
            count: 0,
            last_entry_day: None,
        }
    }
}

/// The outcome of folding a submission into the streak state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    /// The streak state after the submission.
    pub state: StreakState,
    /// Whether the submission warrants a celebration signal.
    ///
    /// Fires only when the submission changed the state and the resulting
    /// count exceeds one, i.e. the user extended a streak.
    pub celebrated: bool,
}

/// Folds a "new entry submitted" event into the streak state.
///
/// Transitions, where `today` is the local calendar day of the submission:
/// - same day as the last counted entry: no change (a second entry on the
///   same day does not increment)
/// - exactly one day later: count increments
/// - anything else (gap of two or more days, or no prior record): count
///   restarts at one
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vesper::journal_core::{record_submission, StreakState};
///
/// let day1 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let day2 = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
///
/// let first = record_submission(StreakState::zero(), day1);
/// assert_eq!(first.state.count, 1);
/// assert!(!first.celebrated);
///
/// let second = record_submission(first.state, day2);
/// assert_eq!(second.state.count, 2);
/// assert!(second.celebrated);
/// ```
pub fn record_submission(state: StreakState, today: NaiveDate) -> StreakUpdate {
    match state.last_entry_day {
        Some(last) if last == today => StreakUpdate {
            state,
            celebrated: false,
        },
        Some(last) if (today - last).num_days() == 1 => {
            let count = state.count + 1;
            StreakUpdate {
                state: StreakState {
                    count,
                    last_entry_day: Some(today),
                },
                celebrated: count > 1,
            }
        }
        _ => StreakUpdate {
            state: StreakState {
                count: 1,
                last_entry_day: Some(today),
            },
            celebrated: false,
        },
    }
}

/// Reconciles a persisted streak state against `today` at load time.
///
/// A gap of two or more days since the last counted entry resets the stored
/// count to zero (decay-on-read). A gap of zero or one day keeps the stored
/// count as-is; the count only ever increments on the submission path. The
/// last-entry day is kept either way, so a write after a one-day gap still
/// extends the streak.
///
/// A negative gap (a last-entry day in the future, from a clock change or a
/// hand-edited store file) also resets to zero.
pub fn reconcile_on_load(state: StreakState, today: NaiveDate) -> StreakState {
    match state.last_entry_day {
        Some(last) if (0..STREAK_BREAK_GAP_DAYS).contains(&(today - last).num_days()) => state,
        Some(last) => StreakState {
            count: 0,
            last_entry_day: Some(last),
        },
        None => StreakState::zero(),
    }
}

/// Returns the same month/day of the previous year.
///
/// February 29 rolls over to March 1 on non-leap years, matching how the
/// resurfacing anchor has always behaved.
pub fn one_year_before(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() - 1, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(today.year() - 1, 3, 1))
        .unwrap_or(today)
}

/// Whether an entry's calendar day falls inside the resurfacing window.
///
/// The window is `RESURFACE_WINDOW_DAYS` whole days on either side of the
/// same date one year before `today`, sign-insensitive.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vesper::journal_core::in_resurface_window;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let a_year_ago = NaiveDate::from_ymd_opt(2023, 6, 12).unwrap();
/// let last_month = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
///
/// assert!(in_resurface_window(a_year_ago, today));
/// assert!(!in_resurface_window(last_month, today));
/// ```
pub fn in_resurface_window(entry_day: NaiveDate, today: NaiveDate) -> bool {
    let anchor = one_year_before(today);
    (entry_day - anchor).num_days().abs() <= RESURFACE_WINDOW_DAYS
}

/// Produces the display label for a resurfaced memory's age.
///
/// Age is measured in whole calendar years between the entry's day and
/// `today`. Exactly one year reads "A year ago today"; more than one reads
/// "N years ago". Any other value gets a generic fallback; the window filter
/// should make that unreachable, but an odd value must not error.
pub fn memory_age_label(entry_day: NaiveDate, today: NaiveDate) -> String {
    let years = today.year() - entry_day.year();
    if years == 1 {
        "A year ago today".to_string()
    } else if years > 1 {
        format!("{} years ago", years)
    } else {
        "Some time ago".to_string()
    }
}

/// Maps a mood label to its value on the 1..=5 mood scale.
///
/// Matching is case-insensitive; unrecognized labels map to the neutral
/// value of 3 rather than failing.
///
/// # Examples
///
/// ```
/// use vesper::journal_core::mood_value;
///
/// assert_eq!(mood_value("Peaceful"), 5);
/// assert_eq!(mood_value("sad"), 2);
/// assert_eq!(mood_value("Xyzzy"), 3);
/// ```
pub fn mood_value(label: &str) -> u8 {
    match label.to_lowercase().as_str() {
        "peaceful" | "happy" | "joyful" => 5,
        "grateful" | "hopeful" | "content" => 4,
        "neutral" | "calm" => 3,
        "uncertain" | "sad" => 2,
        "anxious" | "overwhelmed" | "angry" => 1,
        _ => NEUTRAL_MOOD_VALUE,
    }
}
