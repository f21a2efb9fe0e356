//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and answers request
//! bursts with 503. Every request goes through [`retry::with_backoff`].

use std::time::Duration;

use super::{adapter, dto};
use crate::catalogue::domain::{ArtistCandidate, CatalogueError, RecordingPage};
use crate::catalogue::retry::{self, RetryPolicy};
use crate::config::{HttpConfig, MusicBrainzConfig};

/// Filter applied to every recording search: official, non-video releases
/// without secondary types (live, compilation, remix...).
const RECORDING_FILTER: &str = "AND status:official AND video:false NOT secondarytype:*";

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

fn user_agent(contact: &str) -> String {
    format!("LyricMinder/{} ( {} )", env!("CARGO_PKG_VERSION"), contact)
}

impl MusicBrainzClient {
    /// Create a new client
    pub fn new(config: &MusicBrainzConfig, http: &HttpConfig) -> Result<Self, CatalogueError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(user_agent(&config.contact))
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()
            .map_err(|e| CatalogueError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::from_config(http),
        })
    }

    /// Search artists by name, best matches first
    pub async fn search_artists(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Vec<ArtistCandidate>, CatalogueError> {
        let url = artist_search_url(&self.base_url, name, limit);
        let response: dto::ArtistSearchResponse = self.get_json("artist search", &url).await?;
        Ok(adapter::to_candidates(response))
    }

    /// Fetch one page of an artist's recordings
    pub async fn recordings_page(
        &self,
        artist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<RecordingPage, CatalogueError> {
        let url = recordings_query_url(&self.base_url, artist_id, limit, offset);
        let response: dto::RecordingSearchResponse =
            self.get_json("recordings page", &url).await?;
        tracing::debug!(
            offset,
            received = response.recordings.len(),
            total = response.count,
            "Fetched recordings page"
        );
        Ok(adapter::to_page(response))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        url: &str,
    ) -> Result<T, CatalogueError> {
        retry::with_backoff(&self.retry, operation, move || self.send_request::<T>(url)).await
    }

    /// Send the HTTP request and parse the response
    async fn send_request<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, CatalogueError> {
        let response = self
            .http_client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogueError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogueError::RateLimited);
        }

        if !status.is_success() {
            if status.is_client_error()
                && let Ok(error) = response.json::<dto::ApiError>().await
            {
                return Err(CatalogueError::ApiError(error.error));
            }
            return Err(CatalogueError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogueError::Parse(e.to_string()))
    }
}

/// Build the artist search URL
pub fn artist_search_url(base_url: &str, name: &str, limit: usize) -> String {
    let query = format!("artist:{}", name);
    format!(
        "{}/artist/?query={}&limit={}&fmt=json",
        base_url,
        urlencoding::encode(&query),
        limit
    )
}

/// Build the recordings search URL for one page
///
/// The search API returns at most 100 recordings per request; later pages are
/// reached through `offset`.
pub fn recordings_query_url(base_url: &str, artist_id: &str, limit: usize, offset: usize) -> String {
    let query = format!("arid:{} {}", artist_id, RECORDING_FILTER);
    format!(
        "{}/recording/?query={}&limit={}&offset={}&fmt=json",
        base_url,
        urlencoding::encode(&query),
        limit,
        offset
    )
}
