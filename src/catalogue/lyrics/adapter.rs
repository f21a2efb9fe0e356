//! Adapter layer: Convert lyrics.ovh responses to [`LyricsLookup`]
//!
//! Some of the provider's sources prepend a French credit line
//! ("Paroles de la chanson ... par ...") that would inflate word counts, and
//! some instrumentals come back with a placeholder text instead of an error.

use super::dto;
use crate::catalogue::domain::LyricsLookup;

const CREDIT_MARKER: &str = "paroles de la chanson";
/// Any mention marks the whole track instrumental, including a cue such as
/// "[Instrumental Break]" inside otherwise sung lyrics.
const INSTRUMENTAL_MARKER: &str = "instrumental";

/// Convert a lyrics response to a lookup outcome
pub fn to_lookup(response: dto::LyricsResponse) -> LyricsLookup {
    if response.error.is_some() {
        return LyricsLookup::Missing;
    }

    let Some(lyrics) = response.lyrics else {
        return LyricsLookup::Missing;
    };

    let cleaned = remove_lyrics_credit(&lyrics);

    if cleaned.to_lowercase().contains(INSTRUMENTAL_MARKER) {
        return LyricsLookup::Instrumental;
    }

    if cleaned.trim().is_empty() {
        return LyricsLookup::Missing;
    }

    LyricsLookup::Found(cleaned.to_string())
}

/// Trim the provider's credit header, which runs up to the first `\r\n`.
pub fn remove_lyrics_credit(lyrics: &str) -> &str {
    if !lyrics.to_lowercase().contains(CREDIT_MARKER) {
        return lyrics;
    }

    match lyrics.find("\r\n") {
        Some(index) => &lyrics[index..],
        None => lyrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(lyrics: &str) -> dto::LyricsResponse {
        dto::LyricsResponse {
            lyrics: Some(lyrics.to_string()),
            error: None,
        }
    }

    #[test]
    fn test_remove_lyrics_credit() {
        let raw = "Paroles de la chanson Queer par Garbage\r\nYou're the queerest of the queer";
        assert_eq!(
            remove_lyrics_credit(raw),
            "\r\nYou're the queerest of the queer"
        );
    }

    #[test]
    fn test_lyrics_without_credit_unchanged() {
        let raw = "You're the queerest of the queer\r\nThe strangest of the strange";
        assert_eq!(remove_lyrics_credit(raw), raw);
    }

    #[test]
    fn test_credit_without_line_break_unchanged() {
        let raw = "Paroles de la chanson Queer par Garbage";
        assert_eq!(remove_lyrics_credit(raw), raw);
    }

    #[test]
    fn test_found_lyrics_are_cleaned() {
        let lookup = to_lookup(response("Paroles de la chanson X par Y\r\none two three"));
        assert_eq!(lookup, LyricsLookup::Found("\r\none two three".to_string()));
    }

    #[test]
    fn test_instrumental_detected() {
        assert_eq!(to_lookup(response("[Instrumental]")), LyricsLookup::Instrumental);
    }

    #[test]
    fn test_instrumental_cue_marks_whole_track() {
        let lyrics = "I'm only happy when it rains\n[Instrumental Break]\nPour your misery down";
        assert_eq!(to_lookup(response(lyrics)), LyricsLookup::Instrumental);
    }

    #[test]
    fn test_error_and_empty_are_missing() {
        let error = dto::LyricsResponse {
            lyrics: None,
            error: Some("No lyrics found".to_string()),
        };
        assert_eq!(to_lookup(error), LyricsLookup::Missing);
        assert_eq!(to_lookup(dto::LyricsResponse::default()), LyricsLookup::Missing);
        assert_eq!(to_lookup(response("  \r\n ")), LyricsLookup::Missing);
    }
}
