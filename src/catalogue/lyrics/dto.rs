//! lyrics.ovh API Data Transfer Objects
//!
//! `GET /v1/{artist}/{title}` answers with one of two JSON shapes:
//! `{"lyrics": "..."}` on success or `{"error": "No lyrics found"}`.

use serde::{Deserialize, Serialize};

/// Lyrics lookup response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LyricsResponse {
    pub lyrics: Option<String>,
    pub error: Option<String>,
}
