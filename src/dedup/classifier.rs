//! Keyword and credit checks used to spot alternate renditions and stray recordings.

use crate::model::{Artist, Track};

/// Words that mark a live, remixed or otherwise alternate rendition.
pub const VARIANT_KEYWORDS: &[&str] = &[
    "live",
    "mix",
    "remix",
    "cut",
    "take",
    "master",
    "mono",
    "deluxe",
    "demo",
    "version",
    "instrumental",
    "session",
    "acoustic",
    "rehearsal",
    "5.1",
];

/// Whether the track credits someone other than `artist`.
///
/// A track with no readable credit counts as misattributed.
pub fn is_misattributed(track: &Track, artist: &Artist) -> bool {
    track.credited_artist_id() != Some(artist.mb_id())
}

/// Whether the track or its release looks like an alternate rendition.
pub fn is_variant(track: &Track) -> bool {
    has_variant_keyword(&track.name) || has_variant_keyword(track.release_name())
}

/// Whole-word keyword match, ignoring case and parentheses.
///
/// Words are split on single spaces only, so a keyword joined by a tab or
/// newline is not a word of its own. "Alive" or "Mixed Up" do not match;
/// "Song (Live)" does.
pub fn has_variant_keyword(text: &str) -> bool {
    let folded: String = text
        .to_lowercase()
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .collect();

    folded
        .split(' ')
        .any(|word| VARIANT_KEYWORDS.contains(&word))
}
