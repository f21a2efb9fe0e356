//! CLI command definitions and dispatch.
//!
//! This module provides the command-line interface for Lyric Minder.
//! Each subcommand is implemented in its own submodule:
//! - `count`: Full pipeline, and the deduplicated track listing
//! - `search`: Artist candidate lookup
//! - `config`: Show or initialise the config file

mod config;
mod count;
mod search;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

pub use config::cmd_config;
pub use count::{CountOptions, cmd_count, cmd_tracks};
pub use search::cmd_search;

/// Lyric Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show debug output, including every removed track
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Average the word count of an artist's songs
    Count {
        /// Artist name (prompted for when omitted)
        artist: Option<String>,
        /// Also show deviation, variance and the shortest and longest songs
        #[arg(long)]
        stats: bool,
        /// Show word counts ordered by release date
        #[arg(long)]
        timeline: bool,
        /// Show how long the run took
        #[arg(long)]
        timing: bool,
        /// Use the Nth search result instead of the best match (1-based)
        #[arg(long)]
        pick: Option<usize>,
    },
    /// List an artist's songs after removing duplicates, grouped by release
    Tracks {
        /// Artist name
        artist: String,
        /// Use the Nth search result instead of the best match (1-based)
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Search for artists by name
    Search {
        /// Artist name
        name: String,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show the config file location and current values
    Config {
        /// Write the default config file
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let settings = crate::config::load();

    match &cli.command {
        Commands::Count {
            artist,
            stats,
            timeline,
            timing,
            pick,
        } => {
            let rt = Runtime::new()?;
            let options = CountOptions {
                pick: *pick,
                show_statistics: *stats || settings.output.show_statistics,
                show_timeline: *timeline || settings.output.show_timeline,
                show_timing: *timing || settings.output.show_timing,
                verbose: cli.verbose,
            };
            cmd_count(&rt, &settings, artist.as_deref(), &options)
        }
        Commands::Tracks { artist, pick } => {
            let rt = Runtime::new()?;
            cmd_tracks(&rt, &settings, artist, *pick, cli.verbose)
        }
        Commands::Search { name, limit } => {
            let rt = Runtime::new()?;
            cmd_search(&rt, &settings, name, *limit)
        }
        Commands::Config { init } => cmd_config(&settings, *init),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Print a horizontal rule between report sections
pub(crate) fn print_separator() {
    println!("{}", "-".repeat(60));
}
