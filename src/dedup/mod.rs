//! Duplicate-recording resolution.
//!
//! MusicBrainz lists every recording credited to an artist: album cuts,
//! singles reissuing them, live takes, remixes and compilation appearances.
//! This module reduces that list to one entry per song.

pub mod classifier;
pub mod engine;

pub use classifier::{VARIANT_KEYWORDS, has_variant_keyword, is_misattributed, is_variant};
pub use engine::{DedupOutcome, RemovalReason, RemovedTrack, deduplicate};
