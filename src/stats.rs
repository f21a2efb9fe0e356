//! Word-count statistics over tracks with lyrics.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::{ReleaseRegistry, Track};

/// A track and its word count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCount {
    pub name: String,
    pub word_count: usize,
}

impl TrackCount {
    fn of(track: &Track) -> Self {
        Self {
            name: track.name.clone(),
            word_count: track.word_count(),
        }
    }
}

/// Summary of word counts across a track list
#[derive(Debug, Clone, PartialEq)]
pub struct WordCountSummary {
    pub tracks: usize,
    /// Truncating integer mean
    pub average: u64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Population variance
    pub variance: f64,
    pub shortest: TrackCount,
    pub longest: TrackCount,
}

/// One point of the word count timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub name: String,
    pub word_count: usize,
}

/// Average word count, rounded down.
///
/// Fails with [`Error::NoData`] when there are no tracks.
pub fn average_word_count(tracks: &[Track]) -> Result<u64> {
    if tracks.is_empty() {
        return Err(Error::no_data("No lyrics to count"));
    }

    let total: u64 = tracks.iter().map(|t| t.word_count() as u64).sum();
    Ok(total / tracks.len() as u64)
}

/// Average, spread and extremes of the tracks' word counts.
///
/// On ties the first track wins for both the shortest and the longest.
pub fn summarize(tracks: &[Track]) -> Result<WordCountSummary> {
    let average = average_word_count(tracks)?;

    let counts: Vec<f64> = tracks.iter().map(|t| t.word_count() as f64).collect();
    let n = counts.len() as f64;
    let mean = counts.iter().sum::<f64>() / n;
    let variance = counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;

    let (shortest, longest) = tracks
        .iter()
        .skip(1)
        .fold((&tracks[0], &tracks[0]), |(short, long), t| {
            let short = if t.word_count() < short.word_count() { t } else { short };
            let long = if t.word_count() > long.word_count() { t } else { long };
            (short, long)
        });

    Ok(WordCountSummary {
        tracks: tracks.len(),
        average,
        std_dev: variance.sqrt(),
        variance,
        shortest: TrackCount::of(shortest),
        longest: TrackCount::of(longest),
    })
}

/// Word counts ordered by release date.
///
/// Tracks whose release has no usable date are left out. Tracks released on
/// the same day keep their input order.
pub fn timeline(tracks: &[Track], registry: &ReleaseRegistry) -> Vec<TimelinePoint> {
    let mut points: Vec<TimelinePoint> = tracks
        .iter()
        .filter_map(|track| {
            let date = registry
                .get(&track.release)
                .and_then(|r| r.date.as_deref())
                .and_then(parse_release_date)?;
            Some(TimelinePoint {
                date,
                name: track.name.clone(),
                word_count: track.word_count(),
            })
        })
        .collect();

    points.sort_by_key(|p| p.date);
    points
}

/// Parse a MusicBrainz release date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM` and `YYYY`; partial dates fall on the
/// first day of the month or year.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().splitn(3, '-');

    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 1,
    };
    let day: u32 = match parts.next() {
        Some(d) => d.parse().ok()?,
        None => 1,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}
