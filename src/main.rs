//! Lyric Minder - how many words does an artist use in their songs?
//!
//! Fetches an artist's recordings from MusicBrainz, removes duplicates,
//! live versions and re-releases, fetches lyrics for what is left and
//! reports word-count statistics.

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod model;
pub mod stats;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    let directive = if args.verbose {
        "lyric_minder=debug"
    } else {
        "lyric_minder=warn"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    cli::run_command(&args)
}
