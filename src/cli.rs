//! Command line definitions.
//!
//! Kept in the library so the man page generator can share them.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

/// Word highlighting synchronized to audio playback.
#[derive(Debug, Parser)]
#[command(name = "readalong", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the highlightable words of a markdown file with their offsets
    Index {
        /// Markdown file
        file: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Find the word spoken at a playback time
    Locate {
        /// Markdown file
        file: PathBuf,
        #[command(flatten)]
        timing: TimingArgs,
    },

    /// Print the playback time at which a word starts
    Seek {
        /// Markdown file
        file: PathBuf,
        /// Word index (0-based)
        #[arg(short, long)]
        word: usize,
        /// Total playback duration in seconds
        #[arg(short, long)]
        duration: f64,
    },

    /// Render a markdown file to HTML with one span per word
    Render {
        /// Markdown file
        file: PathBuf,
    },

    /// Simulate playback, highlighting words in the terminal
    Play(PlayArgs),

    /// Resolve a citation reference such as "1", "3-5" or "1,2"
    Cite {
        /// JSON reference table
        references: PathBuf,
        /// Reference spec
        spec: String,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub struct TimingArgs {
    /// Playback time in seconds
    #[arg(short, long)]
    pub time: f64,
    /// Total playback duration in seconds
    #[arg(short, long)]
    pub duration: f64,
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Markdown file
    pub file: PathBuf,
    /// Playback duration in seconds (estimated from the word count if omitted)
    #[arg(short, long)]
    pub duration: Option<f64>,
    /// Playback speed multiplier
    #[arg(short, long)]
    pub speed: Option<f64>,
    /// Start at this word instead of the beginning
    #[arg(long, value_name = "WORD")]
    pub start_word: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the default config file location
    Path,
}
