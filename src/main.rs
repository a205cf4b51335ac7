/*!
# Vesper - A Gentle Journaling Companion

Vesper is a command-line journal for small daily reflections. Entries carry a
mood and an optional voice note; the journal derives a day streak, a mood
trend, and the occasional resurfaced memory from about a year ago.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```
vesper [MESSAGE] [OPTIONS]

Arguments:
  [MESSAGE]                     Free-text content of a new entry; requires --mood

Options:
  -m, --mood <MOOD>             Mood label for the new entry
      --voice <LOCATOR>         Locator of a pre-captured voice note to attach
      --voice-duration <SECS>   Duration of the attached voice note
  -l, --list                    Lists all entries, newest first
  -t, --trend                   Shows the mood trend over the most recent entries
      --memory                  Shows a resurfaced memory from about a year ago
      --streak                  Shows the current day streak
  -v, --verbose                 Enable verbose output
  -h, --help                    Print help information
  -V, --version                 Print version information
```

## Configuration

The application can be configured with the following environment variables:
- `VESPER_DIR`: The directory to store journal data (defaults to "~/Documents/vesper")
*/

use chrono::Local;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vesper::cli::CliArgs;
use vesper::config::Config;
use vesper::constants;
use vesper::errors::AppResult;
use vesper::journal::{mood_emoji, Journal, ResurfacedMemory, Submission, TrendPoint, VoiceNote};
use vesper::store::{self, FileStore};

/// The main entry point for the vesper application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Ensures the data directory exists
/// 5. Opens the journal from the local store (reconciling the streak)
/// 6. Dispatches the requested operation and prints its result
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid configuration)
/// - I/O errors (data directory cannot be created, etc.)
/// - Journal errors (invalid submissions)
/// - Store errors (journal state cannot be persisted)
fn main() -> AppResult<()> {
    // Obtain current date/time once at the beginning
    let current_datetime = Local::now();

    // Parse command-line arguments
    let args = CliArgs::parse();

    // Initialize structured logging on stderr; stdout is for journal output
    let default_level = if args.verbose {
        constants::VERBOSE_LOG_LEVEL
    } else {
        constants::DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting vesper");
    debug!("CLI arguments: {:?}", args);

    // Load and validate configuration
    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;

    // Ensure data directory exists
    debug!("Data directory: {:?}", config.data_dir);
    store::ensure_data_directory_exists(&config.data_dir)?;

    // Open the journal, reconciling the persisted streak against today
    let mut journal = Journal::open(FileStore::open(config.store_path()), current_datetime);

    if let Some(message) = args.message.as_deref() {
        let mood = args.mood.as_deref().unwrap_or_default();
        let voice_note = args.voice.map(|resource| VoiceNote {
            resource,
            duration_secs: args.voice_duration,
        });
        let submission = journal.submit_entry(message, mood, voice_note, current_datetime)?;
        print_submission(&submission);
    } else if args.list {
        print_entries(&journal);
    } else if args.trend {
        print_trend(&journal.mood_trend(constants::TREND_ENTRY_LIMIT));
    } else if args.memory {
        match journal.resurfaced_memory(current_datetime) {
            Some(memory) => print_memory(&memory),
            None => println!("No memories from about a year ago yet."),
        }
    } else if args.streak {
        println!("{}", journal.streak());
    } else {
        print_status(&mut journal, current_datetime);
    }

    Ok(())
}

fn print_submission(submission: &Submission) {
    println!(
        "Saved {} {} entry.",
        mood_emoji(&submission.entry.mood),
        submission.entry.mood
    );
    if let Some(note) = &submission.entry.voice_note {
        println!("Voice note attached ({}).", note.format_duration());
    }
    let marker = if submission.celebrated { " \u{2728}" } else { "" };
    println!(
        "\u{1f525} {} day{}{}",
        submission.streak,
        if submission.streak == 1 { "" } else { "s" },
        marker
    );
}

fn print_entries<S: vesper::store::KvStore>(journal: &Journal<S>) {
    if journal.entries().is_empty() {
        println!("No entries yet. Write one with: vesper \"...\" --mood Peaceful");
        return;
    }
    // Newest first for display; stored order stays insertion order
    for entry in journal.entries().iter().rev() {
        println!(
            "{}  {} {}",
            entry.created_at.format("%B %d, %Y"),
            mood_emoji(&entry.mood),
            entry.mood
        );
        println!("  {}", entry.content);
        if let Some(note) = &entry.voice_note {
            println!("  \u{1f399} voice note ({})", note.format_duration());
        }
    }
}

fn print_trend(points: &[TrendPoint]) {
    if points.is_empty() {
        println!("Not enough entries for a trend yet.");
        return;
    }
    for point in points {
        println!(
            "{:>7}  {:<5}  {}",
            point.date,
            "\u{2588}".repeat(point.value as usize),
            point.label
        );
    }
}

fn print_memory(memory: &ResurfacedMemory) {
    println!("\u{2728} {}", memory.age_label);
    println!("{}", memory.entry.content);
    println!("You felt {}", memory.entry.mood.to_lowercase());
}

fn print_status<S: vesper::store::KvStore>(
    journal: &mut Journal<S>,
    now: chrono::DateTime<Local>,
) {
    let count = journal.entries().len();
    println!(
        "{} entr{} in your journal.",
        count,
        if count == 1 { "y" } else { "ies" }
    );
    if journal.streak() > 0 {
        println!(
            "\u{1f525} {} day{}",
            journal.streak(),
            if journal.streak() == 1 { "" } else { "s" }
        );
    }
    if let Some(memory) = journal.resurfaced_memory(now) {
        println!();
        print_memory(&memory);
    }
}
