//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use lyric_minder::catalogue::traits::MetadataApi;
//!
//! // In production code:
//! async fn first_page<T: MetadataApi>(client: &T, artist_id: &str) {
//!     let page = client.recordings_page(artist_id, 0, 100).await?;
//! }
//!
//! // In tests:
//! struct MockMetadata { ... }
//! impl MetadataApi for MockMetadata { ... }
//! ```

use async_trait::async_trait;

use super::domain::{ArtistCandidate, CatalogueError, LyricsLookup, RecordingPage};

/// Trait for artist and recording lookups.
#[async_trait]
pub trait MetadataApi: Send + Sync {
    /// Search artists by name, best matches first.
    async fn search_artists(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Vec<ArtistCandidate>, CatalogueError>;

    /// Fetch one page of an artist's recordings.
    async fn recordings_page(
        &self,
        artist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<RecordingPage, CatalogueError>;
}

/// Trait for lyrics lookups.
#[async_trait]
pub trait LyricsApi: Send + Sync {
    /// Look up the lyrics of one song.
    async fn lookup(&self, artist: &str, title: &str) -> Result<LyricsLookup, CatalogueError>;
}

// Implement traits for real clients

#[async_trait]
impl MetadataApi for super::musicbrainz::MusicBrainzClient {
    async fn search_artists(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Vec<ArtistCandidate>, CatalogueError> {
        self.search_artists(name, limit).await
    }

    async fn recordings_page(
        &self,
        artist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<RecordingPage, CatalogueError> {
        self.recordings_page(artist_id, offset, limit).await
    }
}

#[async_trait]
impl LyricsApi for super::lyrics::LyricsClient {
    async fn lookup(&self, artist: &str, title: &str) -> Result<LyricsLookup, CatalogueError> {
        self.lookup(artist, title).await
    }
}

/// Mock clients for testing.
///
/// Return configurable responses for testing different scenarios.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock metadata client serving recordings from memory.
    #[derive(Default)]
    pub struct MockMetadata {
        /// Results to return from artist search
        pub artists: Vec<ArtistCandidate>,
        /// All recordings, served page by page
        pub recordings: Vec<serde_json::Value>,
        /// Offsets that always fail with a transient error
        pub failing_offsets: Vec<usize>,
        /// Error to return from every call (takes precedence)
        pub error: Option<CatalogueError>,
        /// Offsets requested so far
        pub requested_offsets: Mutex<Vec<usize>>,
    }

    impl MockMetadata {
        /// Create a mock serving the given recordings.
        pub fn with_recordings(recordings: Vec<serde_json::Value>) -> Self {
            Self {
                recordings,
                ..Default::default()
            }
        }

        /// Create a mock returning the given search results.
        pub fn with_artists(artists: Vec<ArtistCandidate>) -> Self {
            Self {
                artists,
                ..Default::default()
            }
        }

        /// Create a mock that returns an error.
        pub fn with_error(error: CatalogueError) -> Self {
            Self {
                error: Some(error),
                ..Default::default()
            }
        }

        pub fn requested_offsets(&self) -> Vec<usize> {
            let mut offsets = self.requested_offsets.lock().unwrap().clone();
            offsets.sort_unstable();
            offsets
        }
    }

    #[async_trait]
    impl MetadataApi for MockMetadata {
        async fn search_artists(
            &self,
            _name: &str,
            limit: usize,
        ) -> Result<Vec<ArtistCandidate>, CatalogueError> {
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.artists.iter().take(limit).cloned().collect())
        }

        async fn recordings_page(
            &self,
            _artist_id: &str,
            offset: usize,
            limit: usize,
        ) -> Result<RecordingPage, CatalogueError> {
            self.requested_offsets.lock().unwrap().push(offset);

            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            if self.failing_offsets.contains(&offset) {
                return Err(CatalogueError::Http {
                    status: 503,
                    reason: "Service Unavailable".to_string(),
                });
            }

            let recordings = self
                .recordings
                .iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect();

            Ok(RecordingPage {
                total: self.recordings.len(),
                offset,
                recordings,
            })
        }
    }

    /// Mock lyrics client keyed by song title.
    #[derive(Default)]
    pub struct MockLyrics {
        /// Lookup results by title; unknown titles are `Missing`
        pub lyrics: HashMap<String, LyricsLookup>,
        /// Titles whose lookup fails
        pub failing_titles: Vec<String>,
    }

    impl MockLyrics {
        /// Create a mock with lyrics for the given titles.
        pub fn with_lyrics(entries: &[(&str, &str)]) -> Self {
            Self {
                lyrics: entries
                    .iter()
                    .map(|(title, text)| (title.to_string(), LyricsLookup::Found(text.to_string())))
                    .collect(),
                ..Default::default()
            }
        }

        /// Mark a title as an instrumental.
        pub fn instrumental(mut self, title: &str) -> Self {
            self.lyrics.insert(title.to_string(), LyricsLookup::Instrumental);
            self
        }

        /// Make lookups for a title fail.
        pub fn failing(mut self, title: &str) -> Self {
            self.failing_titles.push(title.to_string());
            self
        }
    }

    #[async_trait]
    impl LyricsApi for MockLyrics {
        async fn lookup(
            &self,
            _artist: &str,
            title: &str,
        ) -> Result<LyricsLookup, CatalogueError> {
            if self.failing_titles.iter().any(|t| t == title) {
                return Err(CatalogueError::Network("connection reset".to_string()));
            }
            Ok(self
                .lyrics
                .get(title)
                .cloned()
                .unwrap_or(LyricsLookup::Missing))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::test_utils::raw_recording;

        #[tokio::test]
        async fn test_mock_metadata_pages() {
            let recordings = (0..5)
                .map(|i| raw_recording(&format!("rec-{i}"), "Song", "Album", "rel-1", "art-1"))
                .collect();
            let mock = MockMetadata::with_recordings(recordings);

            let page = mock.recordings_page("art-1", 4, 2).await.unwrap();
            assert_eq!(page.total, 5);
            assert_eq!(page.recordings.len(), 1);
            assert_eq!(mock.requested_offsets(), vec![4]);
        }

        #[tokio::test]
        async fn test_mock_metadata_error() {
            let mock = MockMetadata::with_error(CatalogueError::RateLimited);
            let result = mock.search_artists("Garbage", 3).await;
            assert!(matches!(result, Err(CatalogueError::RateLimited)));
        }

        #[tokio::test]
        async fn test_mock_lyrics() {
            let mock = MockLyrics::with_lyrics(&[("Queer", "you're the queerest")])
                .instrumental("Interlude")
                .failing("Broken");

            assert_eq!(
                mock.lookup("Garbage", "Queer").await.unwrap(),
                LyricsLookup::Found("you're the queerest".to_string())
            );
            assert_eq!(
                mock.lookup("Garbage", "Interlude").await.unwrap(),
                LyricsLookup::Instrumental
            );
            assert_eq!(
                mock.lookup("Garbage", "Unknown").await.unwrap(),
                LyricsLookup::Missing
            );
            assert!(mock.lookup("Garbage", "Broken").await.is_err());
        }
    }
}
