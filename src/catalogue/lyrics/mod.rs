//! lyrics.ovh integration
//!
//! Looks up song lyrics by artist name and song title.
//!
//! API docs: https://lyricsovh.docs.apiary.io/

pub mod dto;
mod adapter;
mod client;

pub use adapter::{remove_lyrics_credit, to_lookup};
pub use client::{LyricsClient, lyrics_url, sanitise_segment};
