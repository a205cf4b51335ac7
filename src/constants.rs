//! Constants used throughout the application.
//!
//! This module contains all constants used in the Vesper application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "vesper";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A gentle journaling companion";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Vesper data directory.
pub const ENV_VAR_VESPER_DIR: &str = "VESPER_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for journal data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = "Documents/vesper";

// Persisted Store
/// File name of the key-value store inside the data directory.
pub const STORE_FILE_NAME: &str = "vesper.json";
/// Store key under which the entry collection is persisted.
pub const STORE_KEY_ENTRIES: &str = "entries";
/// Store key under which the current streak count is persisted.
pub const STORE_KEY_STREAK_COUNT: &str = "streak_count";
/// Store key under which the last-entry calendar day is persisted.
pub const STORE_KEY_LAST_ENTRY_DAY: &str = "last_entry_day";

// File System Parameters
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format used for trend chart labels (short month name plus day).
pub const TREND_DATE_FORMAT: &str = "%b %-d";
/// A streak breaks once this many whole days have passed without an entry.
pub const STREAK_BREAK_GAP_DAYS: i64 = 2;
/// Half-width, in whole days, of the resurfacing window around one year ago.
pub const RESURFACE_WINDOW_DAYS: i64 = 7;

// Mood Scale
/// Lowest value on the mood scale.
pub const MOOD_VALUE_MIN: u8 = 1;
/// Highest value on the mood scale.
pub const MOOD_VALUE_MAX: u8 = 5;
/// Value assigned to unrecognized mood labels.
pub const NEUTRAL_MOOD_VALUE: u8 = 3;
/// Number of recent entries projected onto the mood trend.
pub const TREND_ENTRY_LIMIT: usize = 30;

// Logging Configuration
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when verbose output is requested.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
