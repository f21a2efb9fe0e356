//! Catalogue service - orchestrates artist lookup, recording ingestion and lyrics
//!
//! This is the high-level API the CLI drives:
//! 1. Search MusicBrainz for the artist and pick one candidate
//! 2. Fetch every recordings page (first page, then the rest concurrently)
//! 3. Convert raw recordings to tracks, registering their releases
//! 4. After deduplication, fetch lyrics for the surviving tracks

use futures::{StreamExt, stream};

use crate::catalogue::{
    domain::{ArtistCandidate, CatalogueError, LyricsLookup, RecordingPage},
    lyrics::LyricsClient,
    musicbrainz::{self, MusicBrainzClient},
    traits::{LyricsApi, MetadataApi},
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Artist, ReleaseRegistry, Track};

/// Largest page the recordings search returns; bigger requests are cut to this
pub const MAX_PAGE_SIZE: usize = 100;

/// Paging and concurrency settings for the service
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSettings {
    /// Recordings requested per page, at most [`MAX_PAGE_SIZE`]
    pub page_size: usize,
    /// Recording pages in flight at once
    pub page_concurrency: usize,
    /// Lyrics lookups in flight at once
    pub lyrics_concurrency: usize,
    /// Artist candidates requested per search
    pub search_limit: usize,
}

impl FetchSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_size: config.musicbrainz.page_size.clamp(1, MAX_PAGE_SIZE),
            page_concurrency: config.musicbrainz.max_concurrent_requests.max(1),
            lyrics_concurrency: config.lyrics.max_concurrent_requests.max(1),
            search_limit: config.output.search_limit.max(1),
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Tracks ingested from an artist's recordings
#[derive(Debug, Default)]
pub struct Ingest {
    /// Tracks in page order
    pub tracks: Vec<Track>,
    /// Recordings the service reported in total
    pub total: usize,
    /// Malformed recordings that were skipped
    pub skipped: usize,
    /// Pages that failed after retries
    pub failed_pages: usize,
}

/// Result of fetching lyrics for a track list
#[derive(Debug, Default)]
pub struct LyricsReport {
    /// Tracks that got lyrics, in input order
    pub tracks: Vec<Track>,
    pub requested: usize,
    pub instrumental: usize,
    pub missing: usize,
    /// Lookups that failed after retries
    pub failed: usize,
}

/// Service for fetching an artist's catalogue and lyrics
pub struct CatalogueService<M, L> {
    metadata: M,
    lyrics: L,
    settings: FetchSettings,
}

impl CatalogueService<MusicBrainzClient, LyricsClient> {
    /// Create a service talking to the configured MusicBrainz and lyrics.ovh endpoints
    pub fn from_config(config: &Config) -> std::result::Result<Self, CatalogueError> {
        Ok(Self::new(
            MusicBrainzClient::new(&config.musicbrainz, &config.http)?,
            LyricsClient::new(&config.lyrics, &config.http)?,
            FetchSettings::from_config(config),
        ))
    }
}

impl<M: MetadataApi, L: LyricsApi> CatalogueService<M, L> {
    pub fn new(metadata: M, lyrics: L, settings: FetchSettings) -> Self {
        Self {
            metadata,
            lyrics,
            settings,
        }
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Search artists by name
    pub async fn search_artists(
        &self,
        name: &str,
        limit: usize,
    ) -> std::result::Result<Vec<ArtistCandidate>, CatalogueError> {
        self.metadata.search_artists(name, limit.max(1)).await
    }

    /// Search for an artist and select one candidate.
    ///
    /// See [`select_artist`] for the selection rules.
    pub async fn find_artist(&self, name: &str, pick: Option<usize>) -> Result<Artist> {
        let candidates = self
            .search_artists(name, self.settings.search_limit)
            .await?;
        select_artist(candidates, name, pick)
    }

    /// Fetch all recordings credited to an artist and turn them into tracks.
    ///
    /// The first page must succeed; later pages that still fail after
    /// retries are logged and skipped. Tracks come back in page order.
    pub async fn fetch_recordings(
        &self,
        artist: &Artist,
        registry: &mut ReleaseRegistry,
    ) -> std::result::Result<Ingest, CatalogueError> {
        let artist_id = artist.mb_id();
        let page_size = self.settings.page_size.clamp(1, MAX_PAGE_SIZE);

        let first = self
            .metadata
            .recordings_page(artist_id, 0, page_size)
            .await?;
        let total = first.total;

        let offsets = page_offsets(total, page_size);
        tracing::debug!(
            artist = %artist.name,
            total,
            pages = offsets.len() + 1,
            "Fetching recordings"
        );

        let rest: Vec<(usize, std::result::Result<RecordingPage, CatalogueError>)> =
            stream::iter(offsets)
                .map(|offset| async move {
                    let page = self
                        .metadata
                        .recordings_page(artist_id, offset, page_size)
                        .await;
                    (offset, page)
                })
                .buffered(self.settings.page_concurrency)
                .collect()
                .await;

        let mut ingest = Ingest {
            total,
            ..Default::default()
        };
        let mut pages = vec![first];
        for (offset, page) in rest {
            match page {
                Ok(page) => pages.push(page),
                Err(e) => {
                    tracing::warn!(offset, error = %e, "Skipping recordings page");
                    ingest.failed_pages += 1;
                }
            }
        }

        for raw in pages.into_iter().flat_map(|p| p.recordings) {
            match musicbrainz::to_track(raw, registry) {
                Ok(track) => ingest.tracks.push(track),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping recording");
                    ingest.skipped += 1;
                }
            }
        }

        tracing::info!(
            artist = %artist.name,
            tracks = ingest.tracks.len(),
            releases = registry.len(),
            skipped = ingest.skipped,
            failed_pages = ingest.failed_pages,
            "Ingested recordings"
        );

        Ok(ingest)
    }

    /// Fetch lyrics for each track.
    ///
    /// Only tracks with lyrics are returned. Instrumentals, songs the provider
    /// does not know and failed lookups are counted and dropped.
    pub async fn fetch_lyrics(&self, artist: &Artist, tracks: Vec<Track>) -> LyricsReport {
        let lookups: Vec<std::result::Result<LyricsLookup, CatalogueError>> =
            stream::iter(tracks.iter())
                .map(|track| self.lyrics.lookup(&artist.name, &track.name))
                .buffered(self.settings.lyrics_concurrency)
                .collect()
                .await;

        let mut report = LyricsReport {
            requested: tracks.len(),
            ..Default::default()
        };

        for (mut track, lookup) in tracks.into_iter().zip(lookups) {
            match lookup {
                Ok(LyricsLookup::Found(text)) => {
                    track.set_lyrics(text);
                    report.tracks.push(track);
                }
                Ok(LyricsLookup::Instrumental) => {
                    tracing::debug!(track = %track.name, "Instrumental");
                    report.instrumental += 1;
                }
                Ok(LyricsLookup::Missing) => {
                    tracing::debug!(track = %track.name, "No lyrics");
                    report.missing += 1;
                }
                Err(e) => {
                    tracing::warn!(track = %track.name, error = %e, "Lyrics lookup failed");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            requested = report.requested,
            found = report.tracks.len(),
            instrumental = report.instrumental,
            missing = report.missing,
            failed = report.failed,
            "Fetched lyrics"
        );

        report
    }
}

/// Pick one artist out of the search results.
///
/// `pick` is 1-based and wins when given. Otherwise a case-insensitive exact
/// name match is preferred, falling back to the best-scored first result.
pub fn select_artist(
    candidates: Vec<ArtistCandidate>,
    name: &str,
    pick: Option<usize>,
) -> Result<Artist> {
    if candidates.is_empty() {
        return Err(Error::no_data(format!("No artist found matching '{name}'")));
    }

    if let Some(pick) = pick {
        let count = candidates.len();
        return pick
            .checked_sub(1)
            .and_then(|index| candidates.into_iter().nth(index))
            .map(|c| c.artist)
            .ok_or_else(|| {
                Error::invalid_input(format!("--pick {pick} is out of range (1-{count})"))
            });
    }

    let wanted = name.trim().to_lowercase();
    let index = candidates
        .iter()
        .position(|c| c.artist.name.to_lowercase() == wanted)
        .unwrap_or(0);

    let mut candidates = candidates;
    Ok(candidates.swap_remove(index).artist)
}

/// Offsets of every page after the first.
///
/// Page sizes above [`MAX_PAGE_SIZE`] step by the cap, since the service
/// never returns more than that per page.
pub fn page_offsets(total: usize, page_size: usize) -> Vec<usize> {
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    (page_size..total).step_by(page_size).collect()
}
