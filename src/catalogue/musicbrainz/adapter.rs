//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if MusicBrainz changes their response format,
//! only this file and dto.rs need to change.

use serde::Deserialize;

use super::dto;
use crate::catalogue::domain::{ArtistCandidate, CatalogueError, RecordingPage};
use crate::model::{Artist, ReleaseData, ReleaseRegistry, ReleaseType, Track};

/// Convert an artist search hit to a candidate
pub fn to_candidate(artist: dto::Artist) -> ArtistCandidate {
    // Most-voted tags first
    let mut tags = artist.tags;
    tags.sort_by(|a, b| b.count.cmp(&a.count));
    let tags = tags.into_iter().map(|t| t.name).collect();

    ArtistCandidate {
        score: artist.score.unwrap_or(0),
        artist: Artist::new(artist.name, artist.id)
            .with_description(artist.disambiguation)
            .with_tags(tags),
    }
}

/// Convert an artist search response to candidates, in API order
pub fn to_candidates(response: dto::ArtistSearchResponse) -> Vec<ArtistCandidate> {
    response.artists.into_iter().map(to_candidate).collect()
}

/// Convert a recording search response to a page
pub fn to_page(response: dto::RecordingSearchResponse) -> RecordingPage {
    RecordingPage {
        total: response.count,
        offset: response.offset,
        recordings: response.recordings,
    }
}

/// Release date, falling back to a bare `year` when `date` is absent or empty
fn release_date(release: &dto::Release) -> Option<String> {
    let date = release.date.clone().filter(|d| !d.is_empty());
    date.or_else(|| match release.year.as_ref()? {
        serde_json::Value::String(year) if !year.is_empty() => Some(year.clone()),
        serde_json::Value::Number(year) => Some(year.to_string()),
        _ => None,
    })
}

/// Release fields from the first listed release of a recording
fn to_release_data(release: &dto::Release) -> ReleaseData {
    let primary_type = release
        .release_group
        .as_ref()
        .and_then(|rg| rg.primary_type.as_deref());

    ReleaseData {
        name: release.title.clone(),
        mb_id: release.id.clone(),
        release_type: ReleaseType::parse(primary_type),
        date: release_date(release),
    }
}

/// Build a [`Track`] from a raw recording, registering its release.
///
/// Only `releases[0]` is parsed; later releases are kept in the raw metadata
/// untouched. Fails with [`CatalogueError::MalformedRecord`] when the
/// recording lacks an ID or a title, or when `releases[0]` is missing or has
/// no ID or title. Nothing is registered in that case.
pub fn to_track(
    raw: serde_json::Value,
    registry: &mut ReleaseRegistry,
) -> Result<Track, CatalogueError> {
    let recording = dto::Recording::deserialize(&raw)
        .map_err(|e| CatalogueError::MalformedRecord(e.to_string()))?;

    let first = raw.pointer("/releases/0").ok_or_else(|| {
        CatalogueError::MalformedRecord(format!(
            "recording {} ({}) lists no releases",
            recording.id, recording.title
        ))
    })?;
    let release = dto::Release::deserialize(first).map_err(|e| {
        CatalogueError::MalformedRecord(format!(
            "recording {} ({}): first release: {}",
            recording.id, recording.title, e
        ))
    })?;

    let key = registry.resolve(&recording.id, to_release_data(&release));
    Ok(Track::new(recording.title, recording.id, key, raw))
}
