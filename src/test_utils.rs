//! Test utilities and fixtures for lyric-minder tests.
//!
//! This module provides raw recording factories and track builders to
//! reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use lyric_minder::test_utils::{test_artist, track};
//!
//! #[test]
//! fn test_something() {
//!     let mut registry = ReleaseRegistry::new();
//!     let t = track(&mut registry, "rec-1", "Queer", "Garbage");
//!     // ... test logic
//! }
//! ```

use serde_json::json;

use crate::catalogue::ArtistCandidate;
use crate::catalogue::musicbrainz::to_track;
use crate::model::{Artist, ReleaseRegistry, Track};

/// MusicBrainz ID of the artist returned by [`test_artist`].
pub const ARTIST_ID: &str = "683cb2a7-7ea4-4a4e-a8b0-2c7e4e3f0b6f";

/// The artist most fixtures are credited to.
pub fn test_artist() -> Artist {
    Artist::new("Garbage", ARTIST_ID)
        .with_description(Some("Scottish-American rock band".to_string()))
        .with_tags(vec!["rock".to_string(), "alternative rock".to_string()])
}

/// A search candidate for an artist.
pub fn candidate(name: &str, mb_id: &str, score: u32) -> ArtistCandidate {
    ArtistCandidate {
        artist: Artist::new(name, mb_id),
        score,
    }
}

/// Creates a raw recording object shaped like a MusicBrainz search hit.
///
/// The release is an official album dated 1998-05-04.
pub fn raw_recording(
    id: &str,
    title: &str,
    release_title: &str,
    release_id: &str,
    artist_id: &str,
) -> serde_json::Value {
    raw_recording_dated(id, title, release_title, release_id, artist_id, Some("1998-05-04"))
}

/// Like [`raw_recording`], with an explicit (or missing) release date.
pub fn raw_recording_dated(
    id: &str,
    title: &str,
    release_title: &str,
    release_id: &str,
    artist_id: &str,
    date: Option<&str>,
) -> serde_json::Value {
    let mut release = json!({
        "id": release_id,
        "title": release_title,
        "status": "Official",
        "release-group": {
            "id": format!("{release_id}-group"),
            "primary-type": "Album"
        }
    });
    if let Some(date) = date {
        release["date"] = json!(date);
    }

    json!({
        "id": id,
        "score": 100,
        "title": title,
        "length": 215000,
        "artist-credit": [
            {
                "name": "Garbage",
                "artist": { "id": artist_id, "name": "Garbage" }
            }
        ],
        "releases": [release]
    })
}

/// Builds a track credited to [`test_artist`], registering its release.
///
/// Tracks with the same `release_title` share one release.
pub fn track(registry: &mut ReleaseRegistry, id: &str, title: &str, release_title: &str) -> Track {
    track_by(registry, id, title, release_title, ARTIST_ID)
}

/// Builds a track credited to any artist.
pub fn track_by(
    registry: &mut ReleaseRegistry,
    id: &str,
    title: &str,
    release_title: &str,
    artist_id: &str,
) -> Track {
    let release_id = format!("rel-{}", release_title.to_lowercase().replace(' ', "-"));
    to_track(
        raw_recording(id, title, release_title, &release_id, artist_id),
        registry,
    )
    .expect("fixture recording should be well-formed")
}

/// Builds a track with lyrics already attached.
pub fn track_with_lyrics(
    registry: &mut ReleaseRegistry,
    id: &str,
    title: &str,
    release_title: &str,
    lyrics: &str,
) -> Track {
    let mut t = track(registry, id, title, release_title);
    t.set_lyrics(lyrics);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_tracks_share_release_by_title() {
        let mut registry = ReleaseRegistry::new();
        let a = track(&mut registry, "rec-1", "Queer", "Garbage");
        let b = track(&mut registry, "rec-2", "Vow", "Garbage");

        assert_eq!(a.release, b.release);
        assert_eq!(registry.len(), 1);
        assert_eq!(a.credited_artist_id(), Some(ARTIST_ID));
    }

    #[test]
    fn test_raw_recording_without_date() {
        let raw = raw_recording_dated("rec-1", "Queer", "Garbage", "rel-1", ARTIST_ID, None);
        assert!(raw["releases"][0].get("date").is_none());
    }
}
