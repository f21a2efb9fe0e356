//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz search API returns.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! Only the fields we read are declared; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// Artist search response (`/artist?query=...`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Artist search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    /// MusicBrainz artist ID
    pub id: String,
    /// Official artist name
    pub name: String,
    /// Search relevance (0-100)
    pub score: Option<u32>,
    /// Disambiguation comment
    pub disambiguation: Option<String>,
    /// Folksonomy tags
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Tag with vote count
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub count: i64,
}

/// Recording search response (`/recording?query=...`)
///
/// Recordings are kept as raw JSON so the original object can travel with
/// each track; [`Recording`] is parsed from each one during ingestion.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordingSearchResponse {
    /// Total matches across all pages
    pub count: usize,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub recordings: Vec<serde_json::Value>,
}

/// Recording search hit.
///
/// Only the fields every recording must carry. Credits and releases are
/// read from the raw object, so a malformed entry past `releases[0]` does
/// not reject the whole recording.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recording {
    /// MusicBrainz recording ID
    pub id: String,
    /// Recording title
    pub title: String,
}

/// Release (album/single/EP)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: String,
    /// Release status (Official, Bootleg, etc.)
    pub status: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// Bare year some payloads carry instead of `date`, string or number
    pub year: Option<serde_json::Value>,
    /// Release group (groups same album across editions)
    pub release_group: Option<ReleaseGroup>,
}

/// Release group
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    pub id: Option<String>,
    /// Primary type (Album, Single, EP, etc.)
    pub primary_type: Option<String>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
