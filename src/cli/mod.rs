use clap::{ArgGroup, Parser};

/// A gentle journaling companion
#[derive(Parser, Debug)]
#[clap(name = "vesper", about = "A gentle journaling companion")]
#[clap(author, version, long_about = None)]
#[clap(group(ArgGroup::new("mode").args(["list", "trend", "memory", "streak"])))]
pub struct CliArgs {
    /// Free-text content of a new entry; requires a mood
    #[clap(requires = "mood", conflicts_with = "mode")]
    pub message: Option<String>,

    /// Mood label for the new entry (e.g. Peaceful, Grateful, Missing)
    #[clap(short = 'm', long, conflicts_with = "mode")]
    pub mood: Option<String>,

    /// Locator of a pre-captured voice note to attach to the entry
    #[clap(long, requires = "message")]
    pub voice: Option<String>,

    /// Duration of the attached voice note, in seconds
    #[clap(long, default_value_t = 0, requires = "voice")]
    pub voice_duration: u32,

    /// Lists all entries, newest first
    #[clap(short = 'l', long)]
    pub list: bool,

    /// Shows the mood trend over the most recent entries
    #[clap(short = 't', long)]
    pub trend: bool,

    /// Shows a resurfaced memory from about a year ago, if one exists
    #[clap(long)]
    pub memory: bool,

    /// Shows the current day streak
    #[clap(long)]
    pub streak: bool,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
