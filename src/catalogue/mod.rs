//! Catalogue module - fetches an artist's recordings and lyrics from external services.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`musicbrainz/dto.rs`, `lyrics/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs, retried with backoff (`retry.rs`)
//! - **Traits** - Seams for swapping clients with mocks in tests
//! - **Service** - Paging, concurrency and lyrics attachment
//!
//! # Usage
//!
//! ```ignore
//! use catalogue::CatalogueService;
//!
//! let service = CatalogueService::from_config(&config)?;
//! let artist = service.find_artist("Garbage", None).await?;
//!
//! let mut registry = ReleaseRegistry::new();
//! let ingest = service.fetch_recordings(&artist, &mut registry).await?;
//! println!("{} recordings", ingest.tracks.len());
//! ```

pub mod domain;
pub mod lyrics;
pub mod musicbrainz;
pub mod retry;
pub mod service;
pub mod traits;

pub use domain::{ArtistCandidate, CatalogueError, LyricsLookup, RecordingPage};
pub use service::{CatalogueService, FetchSettings, Ingest, LyricsReport, select_artist};
