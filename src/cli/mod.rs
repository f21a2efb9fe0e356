//! Command-line interface for lyric-minder.
//!
//! This module provides the commands that look up an artist, clean up their
//! recordings and report on the lyrics.

mod commands;

pub use commands::{Cli, Commands, run_command};
