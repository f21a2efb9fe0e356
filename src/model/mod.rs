//! Core data models for an artist's catalogue.
//!
//! Defines the primary entities: [`Artist`], [`Release`], and [`Track`].
//!
//! # Ownership
//!
//! Releases live in a [`ReleaseRegistry`] for the duration of one
//! artist-processing run. A [`Track`] holds a [`ReleaseKey`] handle into that
//! registry rather than owning its release, and each [`Release`] keeps the
//! inverse relation as a list of track IDs.

pub mod registry;

use std::fmt;

pub use registry::{ReleaseData, ReleaseRegistry};

/// An artist as returned by the metadata service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Official artist name
    pub name: String,
    /// MusicBrainz artist ID, immutable once assigned
    mb_id: String,
    /// Disambiguation comment (e.g. "US rock band")
    pub description: Option<String>,
    /// Genre/style tags
    pub tags: Vec<String>,
    /// Releases that survived deduplication, in registry order
    pub releases: Vec<ReleaseKey>,
}

impl Artist {
    pub fn new(name: impl Into<String>, mb_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mb_id: mb_id.into(),
            description: None,
            tags: Vec::new(),
            releases: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.is_empty());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// MusicBrainz artist ID. This is the identity used for attribution checks.
    pub fn mb_id(&self) -> &str {
        &self.mb_id
    }

    /// Tags joined for display, e.g. "rock, grunge".
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }

    /// Populate `releases` from whatever is left in the registry.
    pub fn attach_releases(&mut self, registry: &ReleaseRegistry) {
        self.releases = registry.iter().map(Release::key).collect();
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Release group primary type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ReleaseType {
    Album,
    Single,
    Ep,
    Compilation,
    Broadcast,
    Other(String),
    #[default]
    Unknown,
}

impl ReleaseType {
    /// Parse the `primary-type` string used by MusicBrainz.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => Self::Unknown,
            Some(v) => match v.to_lowercase().as_str() {
                "album" => Self::Album,
                "single" => Self::Single,
                "ep" => Self::Ep,
                "compilation" => Self::Compilation,
                "broadcast" => Self::Broadcast,
                "" => Self::Unknown,
                _ => Self::Other(v.to_string()),
            },
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Album => write!(f, "Album"),
            Self::Single => write!(f, "Single"),
            Self::Ep => write!(f, "EP"),
            Self::Compilation => write!(f, "Compilation"),
            Self::Broadcast => write!(f, "Broadcast"),
            Self::Other(other) => write!(f, "{}", other),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Identity of a release: the (name, MusicBrainz ID) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReleaseKey {
    pub name: String,
    pub mb_id: String,
}

impl ReleaseKey {
    pub fn new(name: impl Into<String>, mb_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mb_id: mb_id.into(),
        }
    }
}

/// An album, single, EP or compilation grouping tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    pub mb_id: String,
    pub release_type: ReleaseType,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// IDs of the tracks referencing this release, in ingestion order
    pub tracks: Vec<String>,
}

impl Release {
    pub fn key(&self) -> ReleaseKey {
        ReleaseKey::new(&self.name, &self.mb_id)
    }

    /// Year parsed from the date prefix.
    pub fn year(&self) -> Option<i32> {
        self.date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.date {
            Some(date) => write!(f, "{}: {} ({})", date, self.name, self.release_type),
            None => write!(f, "{} ({})", self.name, self.release_type),
        }
    }
}

/// A single recording of the artist.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Recording title
    pub name: String,
    /// MusicBrainz recording ID
    pub mb_id: String,
    /// The release this recording was first listed on
    pub release: ReleaseKey,
    /// Raw recording object as returned by the metadata service
    pub raw_metadata: serde_json::Value,
    lyrics: Option<String>,
}

impl Track {
    pub fn new(
        name: impl Into<String>,
        mb_id: impl Into<String>,
        release: ReleaseKey,
        raw_metadata: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            mb_id: mb_id.into(),
            release,
            raw_metadata,
            lyrics: None,
        }
    }

    pub fn release_name(&self) -> &str {
        &self.release.name
    }

    /// ID of the first credited artist in the raw metadata, if present.
    pub fn credited_artist_id(&self) -> Option<&str> {
        self.raw_metadata
            .pointer("/artist-credit/0/artist/id")
            .and_then(serde_json::Value::as_str)
    }

    pub fn lyrics(&self) -> Option<&str> {
        self.lyrics.as_deref()
    }

    pub fn set_lyrics(&mut self, lyrics: impl Into<String>) {
        self.lyrics = Some(lyrics.into());
    }

    pub fn clear_lyrics(&mut self) {
        self.lyrics = None;
    }

    pub fn has_lyrics(&self) -> bool {
        self.lyrics.is_some()
    }

    /// Number of words in the lyrics, 0 while unset.
    pub fn word_count(&self) -> usize {
        self.lyrics.as_deref().map(count_words).unwrap_or(0)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.release.name, self.name)
    }
}

/// Count whitespace-separated words; `\r` and `\n` count as separators.
pub fn count_words(text: &str) -> usize {
    text.replace(['\r', '\n'], " ").split_whitespace().count()
}
