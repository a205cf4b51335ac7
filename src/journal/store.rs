//! Persistence gateway for journal state.
//!
//! `EntryStore` wraps a [`KvStore`] and owns the in-memory entry collection
//! plus the two persisted streak scalars. Reads tolerate absent or malformed
//! payloads by degrading to empty/zero defaults; writes persist the full
//! collection synchronously, overwriting whatever was stored before.

use crate::constants;
use crate::errors::StoreError;
use crate::journal::entry::Entry;
use crate::journal_core::StreakState;
use crate::store::KvStore;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, warn};

/// The entry collection and streak scalars, backed by a key-value store.
pub struct EntryStore<S: KvStore> {
    store: S,
    entries: Vec<Entry>,
}

impl<S: KvStore> EntryStore<S> {
    /// Restores the entry collection from the store.
    ///
    /// An absent or malformed `entries` payload yields an empty collection;
    /// it is logged, never propagated.
    pub fn load(store: S) -> Self {
        let entries = match store.get(constants::STORE_KEY_ENTRIES) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => match serde_json::from_value::<Vec<Entry>>(value.clone()) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Persisted entries are malformed ({}); starting empty", e);
                    Vec::new()
                }
            },
        };
        debug!("Loaded {} journal entries", entries.len());

        EntryStore { store, entries }
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Appends an entry and synchronously persists the full collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated collection cannot be serialized
    /// or written. The entry is not kept in memory when the write fails, so
    /// the in-memory and persisted collections never diverge.
    pub fn append(&mut self, entry: Entry) -> Result<(), StoreError> {
        self.entries.push(entry);
        let serialized = serde_json::to_value(&self.entries)?;
        if let Err(e) = self.store.put(constants::STORE_KEY_ENTRIES, serialized) {
            self.entries.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Reads the persisted streak state.
    ///
    /// Absent values yield the zero state. Malformed values (a non-numeric
    /// count, an unparseable day) degrade to the zero state with a warning.
    pub fn read_streak(&self) -> StreakState {
        let count = match self.store.get(constants::STORE_KEY_STREAK_COUNT) {
            None | Some(Value::Null) => Some(0),
            Some(value) => value.as_u64().and_then(|n| u32::try_from(n).ok()),
        };

        let last_entry_day = match self.store.get(constants::STORE_KEY_LAST_ENTRY_DAY) {
            None | Some(Value::Null) => Some(None),
            Some(value) => value
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s, constants::DATE_FORMAT_ISO).ok())
                .map(Some),
        };

        match (count, last_entry_day) {
            (Some(count), Some(last_entry_day)) => StreakState {
                count,
                last_entry_day,
            },
            _ => {
                warn!("Persisted streak state is malformed; resetting to zero");
                StreakState::zero()
            }
        }
    }

    /// Persists the streak state as its two scalar keys.
    pub fn write_streak(&mut self, state: &StreakState) -> Result<(), StoreError> {
        self.store
            .put(constants::STORE_KEY_STREAK_COUNT, Value::from(state.count))?;
        let day = match state.last_entry_day {
            Some(day) => Value::from(day.format(constants::DATE_FORMAT_ISO).to_string()),
            None => Value::Null,
        };
        self.store.put(constants::STORE_KEY_LAST_ENTRY_DAY, day)
    }
}
