//! Internal domain models for catalogue and lyrics lookups.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

use crate::model::Artist;

/// An artist returned by a name search
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistCandidate {
    pub artist: Artist,
    /// Search relevance (0-100)
    pub score: u32,
}

/// One page of an artist's recordings
#[derive(Debug, Clone, Default)]
pub struct RecordingPage {
    /// Total recordings matching the query, across all pages
    pub total: usize,
    /// Offset of the first recording in this page
    pub offset: usize,
    /// Raw recording objects, converted to tracks during ingestion
    pub recordings: Vec<serde_json::Value>,
}

/// Outcome of a lyrics lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsLookup {
    /// Cleaned lyrics text
    Found(String),
    /// The provider's text marks the song as an instrumental
    Instrumental,
    /// The provider has nothing for this song
    Missing,
}

/// Errors that can occur while talking to the metadata or lyrics services
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogueError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No matches found")]
    NoMatches,

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Malformed recording: {0}")]
    MalformedRecord(String),
}

impl CatalogueError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
