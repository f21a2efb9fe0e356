//! lyrics.ovh HTTP client
//!
//! ## API Quirks
//!
//! - Songs without lyrics come back as `404` with a JSON error body, or as
//!   `text/html` pages when the upstream source is unavailable. Both mean
//!   "no lyrics" rather than a failure.
//! - The service is easily overloaded and answers bursts with 5xx; those are
//!   retried with backoff.
//! - Slashes in artist names or titles would change the path, so they are
//!   replaced with spaces before encoding.

use std::time::Duration;

use super::{adapter, dto};
use crate::catalogue::domain::{CatalogueError, LyricsLookup};
use crate::catalogue::retry::{self, RetryPolicy};
use crate::config::{HttpConfig, LyricsConfig};

/// lyrics.ovh API client
pub struct LyricsClient {
    http_client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl LyricsClient {
    /// Create a new client
    pub fn new(config: &LyricsConfig, http: &HttpConfig) -> Result<Self, CatalogueError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()
            .map_err(|e| CatalogueError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::from_config(http),
        })
    }

    /// Look up the lyrics of one song
    pub async fn lookup(&self, artist: &str, title: &str) -> Result<LyricsLookup, CatalogueError> {
        let url = lyrics_url(&self.base_url, artist, title);
        let url = url.as_str();
        retry::with_backoff(&self.retry, "lyrics lookup", move || self.send_request(url)).await
    }

    async fn send_request(&self, url: &str) -> Result<LyricsLookup, CatalogueError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogueError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(LyricsLookup::Missing);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogueError::RateLimited);
        }

        if !status.is_success() {
            return Err(CatalogueError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        if !is_json {
            tracing::debug!(url, "Lyrics response is not JSON, treating as missing");
            return Ok(LyricsLookup::Missing);
        }

        let body = response
            .json::<dto::LyricsResponse>()
            .await
            .map_err(|e| CatalogueError::Parse(e.to_string()))?;

        Ok(adapter::to_lookup(body))
    }
}

/// Make an artist name or song title safe to use as a path segment
pub fn sanitise_segment(input: &str) -> String {
    urlencoding::encode(&input.replace('/', " ")).into_owned()
}

/// Build the lyrics lookup URL
pub fn lyrics_url(base_url: &str, artist: &str, title: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url,
        sanitise_segment(artist),
        sanitise_segment(title)
    )
}
