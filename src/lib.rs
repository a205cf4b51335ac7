/*!
# Vesper

Vesper is a small personal journal: the user records text entries (optionally
with a voice note) tagged with a mood, views them as a list, sees a mood
trend over recent entries, gets a day-streak nudge, and occasionally receives
a resurfaced memory from roughly a year prior. All state is local to one
machine; there is no server, sync, or multi-user concern.

## Core Features

- Append-only journal entries with mood labels and optional voice notes
- A consecutive-day writing streak, derived from entry timestamps
- Resurfacing of a roughly year-old entry as a nostalgic prompt
- A mood trend projection of the most recent entries for charting

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `store`: The local key-value store all state persists to
- `journal`: The journal facade the presentation layer drives
- `journal_core`: Pure streak, resurfacing, and mood-scale logic
- `voice`: The external voice-capture boundary

## Usage Example

```rust,no_run
use chrono::Local;
use vesper::store::FileStore;
use vesper::{Config, Journal};

fn main() -> vesper::AppResult<()> {
    // Load configuration
    let config = Config::load()?;

    // Open the journal from the local store
    let now = Local::now();
    let mut journal = Journal::open(FileStore::open(config.store_path()), now);

    // Record an entry
    journal.submit_entry("A quiet evening by the window.", "Peaceful", None, now)?;
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// The journal facade: entries, submissions, and derived insights
pub mod journal;
/// Pure streak, resurfacing, and mood-scale logic
pub mod journal_core;
/// Local key-value persistence
pub mod store;
/// The external voice-capture boundary
pub mod voice;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{Entry, Journal, VoiceNote};
