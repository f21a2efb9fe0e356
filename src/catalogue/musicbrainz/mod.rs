//! MusicBrainz API integration
//!
//! Provides artist search and the paginated recordings search used to build
//! an artist's raw track list.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;

pub use adapter::{to_candidates, to_page, to_track};
pub use client::{MusicBrainzClient, artist_search_url, recordings_query_url};
