//! Collapses an artist's noisy recording list into a canonical track list.
//!
//! Removals are marked over the untouched input and applied in one pass at
//! the end, so earlier removals never shift later comparisons. For each track
//! `t` still in the list, every other track whose name contains `t`'s name is
//! either a variant (removed) or, when the names match exactly, a re-release
//! (removed). The first-seen track of a group always survives.

use std::fmt;

use super::classifier::{is_misattributed, is_variant};
use crate::model::{Artist, ReleaseRegistry, Track};

/// Why a track was left out of the canonical list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalReason {
    /// Credited to another artist
    Misattributed,
    /// Alternate rendition of the named track
    Variant { of: String },
    /// Same name as an earlier track, on another release
    ReRelease { of: String },
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Misattributed => write!(f, "not by this artist"),
            Self::Variant { of } => write!(f, "variant of '{of}'"),
            Self::ReRelease { of } => write!(f, "re-release of '{of}'"),
        }
    }
}

/// A track dropped by [`deduplicate`]
#[derive(Debug, Clone)]
pub struct RemovedTrack {
    pub track: Track,
    pub reason: RemovalReason,
}

/// Result of one deduplication pass
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    /// Surviving tracks, in input order
    pub tracks: Vec<Track>,
    /// Dropped tracks, in input order
    pub removed: Vec<RemovedTrack>,
    pub original_count: usize,
}

impl DedupOutcome {
    pub fn removed_count(&self) -> usize {
        self.original_count - self.tracks.len()
    }
}

/// Remove misattributed tracks, variants and re-releases.
///
/// Every removed track is detached from its release in `registry`, and
/// releases left without tracks are evicted. An empty input leaves the
/// registry untouched.
pub fn deduplicate(
    tracks: Vec<Track>,
    artist: &Artist,
    registry: &mut ReleaseRegistry,
) -> DedupOutcome {
    let original_count = tracks.len();
    let marks = mark_removals(&tracks, artist);

    let mut outcome = DedupOutcome {
        tracks: Vec::with_capacity(original_count),
        removed: Vec::new(),
        original_count,
    };

    for (track, mark) in tracks.into_iter().zip(marks) {
        match mark {
            None => outcome.tracks.push(track),
            Some(reason) => {
                tracing::debug!(track = %track, %reason, "Removing track");
                registry.detach(&track.release, &track.mb_id);
                outcome.removed.push(RemovedTrack { track, reason });
            }
        }
    }

    tracing::info!(
        artist = %artist.name,
        original = outcome.original_count,
        remaining = outcome.tracks.len(),
        removed = outcome.removed_count(),
        "Deduplicated tracks"
    );

    outcome
}

/// First reason found for each track, indexed like `tracks`.
fn mark_removals(tracks: &[Track], artist: &Artist) -> Vec<Option<RemovalReason>> {
    let mut marks: Vec<Option<RemovalReason>> = vec![None; tracks.len()];

    for (i, t) in tracks.iter().enumerate() {
        // Already dropped, so it can no longer claim others
        if marks[i].is_some() {
            continue;
        }

        if is_misattributed(t, artist) {
            marks[i] = Some(RemovalReason::Misattributed);
            continue;
        }

        for (j, s) in tracks.iter().enumerate() {
            if marks[j].is_some() || s.mb_id == t.mb_id || !s.name.contains(&t.name) {
                continue;
            }

            if is_variant(s) {
                marks[j] = Some(RemovalReason::Variant { of: t.name.clone() });
            } else if s.name == t.name {
                marks[j] = Some(RemovalReason::ReRelease { of: t.name.clone() });
            }
        }
    }

    marks
}
