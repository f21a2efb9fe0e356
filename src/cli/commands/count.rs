//! Word count pipeline and deduplicated track listing.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tokio::runtime::Runtime;

use crate::catalogue::CatalogueService;
use crate::catalogue::traits::{LyricsApi, MetadataApi};
use crate::config::Config;
use crate::dedup::{self, DedupOutcome};
use crate::error::{Error, Result};
use crate::model::{Artist, ReleaseRegistry, Track};
use crate::stats::{self, TimelinePoint, WordCountSummary};

use super::print_separator;

/// Report switches for the `count` command
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    pub pick: Option<usize>,
    pub show_statistics: bool,
    pub show_timeline: bool,
    pub show_timing: bool,
    pub verbose: bool,
}

/// Fetch, deduplicate, fetch lyrics and report the average word count
pub fn cmd_count(
    rt: &Runtime,
    config: &Config,
    artist: Option<&str>,
    options: &CountOptions,
) -> anyhow::Result<()> {
    let name = match artist {
        Some(name) => name.to_string(),
        None => prompt_artist()?,
    };
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Artist name cannot be empty");
    }

    let started = Instant::now();
    let service = CatalogueService::from_config(config)?;

    rt.block_on(async {
        let mut artist = service.find_artist(name, options.pick).await?;
        print_artist_header(&artist);

        let mut registry = ReleaseRegistry::new();
        let tracks =
            match canonical_tracks(&service, &mut artist, &mut registry, options.verbose).await {
                Ok(tracks) => tracks,
                Err(e) if e.is_no_data() => {
                    println!("✗ {e}");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

        println!("Fetching lyrics for {} tracks...", tracks.len());
        let report = service.fetch_lyrics(&artist, tracks).await;
        println!(
            "✓ Lyrics found for {}/{} tracks ({} instrumental, {} missing, {} failed)",
            report.tracks.len(),
            report.requested,
            report.instrumental,
            report.missing,
            report.failed
        );

        match stats::summarize(&report.tracks) {
            Ok(summary) => print_summary(&artist, &summary, options.show_statistics),
            Err(e) if e.is_no_data() => {
                println!("✗ No lyrics to count!");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        if options.show_timeline {
            print_timeline(&stats::timeline(&report.tracks, &registry));
        }

        Ok::<_, Error>(())
    })?;

    if options.show_timing {
        println!("Finished in {:.2?}", started.elapsed());
    }

    Ok(())
}

/// List the canonical tracks of an artist, grouped by release
pub fn cmd_tracks(
    rt: &Runtime,
    config: &Config,
    name: &str,
    pick: Option<usize>,
    verbose: bool,
) -> anyhow::Result<()> {
    let service = CatalogueService::from_config(config)?;

    rt.block_on(async {
        let mut artist = service.find_artist(name, pick).await?;
        print_artist_header(&artist);

        let mut registry = ReleaseRegistry::new();
        let tracks = match canonical_tracks(&service, &mut artist, &mut registry, verbose).await {
            Ok(tracks) => tracks,
            Err(e) if e.is_no_data() => {
                println!("✗ {e}");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        print_separator();
        for key in &artist.releases {
            let Some(release) = registry.get(key) else {
                continue;
            };
            println!("{release}");
            for track in tracks.iter().filter(|t| &t.release == key) {
                println!("  - {}", track.name);
            }
        }
        print_separator();
        println!("{} tracks on {} releases", tracks.len(), registry.len());

        Ok::<_, Error>(())
    })?;

    Ok(())
}

/// Fetch recordings and reduce them to the canonical track list.
///
/// Fails with [`Error::NoData`] when nothing is left to work with.
async fn canonical_tracks<M: MetadataApi, L: LyricsApi>(
    service: &CatalogueService<M, L>,
    artist: &mut Artist,
    registry: &mut ReleaseRegistry,
    verbose: bool,
) -> Result<Vec<Track>> {
    println!("Fetching recordings...");
    let ingest = service.fetch_recordings(artist, registry).await?;

    if ingest.skipped > 0 || ingest.failed_pages > 0 {
        println!(
            "  {} malformed recordings skipped, {} pages could not be fetched",
            ingest.skipped, ingest.failed_pages
        );
    }
    if ingest.tracks.is_empty() {
        return Err(Error::no_data(format!(
            "No recordings found for {}",
            artist.name
        )));
    }

    println!("Cleaning duplicate tracks...");
    let outcome = dedup::deduplicate(ingest.tracks, artist, registry);
    print_dedup_summary(&outcome, verbose);

    if outcome.tracks.is_empty() {
        return Err(Error::no_data("No tracks left after removing duplicates"));
    }

    artist.attach_releases(registry);
    Ok(outcome.tracks)
}

/// Ask for an artist name on stdin
fn prompt_artist() -> io::Result<String> {
    print!("Artist name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_artist_header(artist: &Artist) {
    print_separator();
    println!("{}", artist.name);
    if let Some(description) = &artist.description {
        println!("  {description}");
    }
    if !artist.tags.is_empty() {
        println!("  Tags: {}", artist.tags_display());
    }
    print_separator();
}

fn print_dedup_summary(outcome: &DedupOutcome, verbose: bool) {
    if verbose {
        for removed in &outcome.removed {
            println!("  ✗ {} ({})", removed.track, removed.reason);
        }
        print_separator();
        println!("Original tracklist length = {}", outcome.original_count);
        println!("New tracklist length = {}", outcome.tracks.len());
        println!("Duplicate tracks removed = {}", outcome.removed_count());
        print_separator();
    }
    println!(
        "✓ Removed {} duplicates, remixes, or live tracks ({} left)",
        outcome.removed_count(),
        outcome.tracks.len()
    );
}

fn print_summary(artist: &Artist, summary: &WordCountSummary, show_statistics: bool) {
    print_separator();
    println!(
        "{} uses an average of {} words in their songs",
        artist.name, summary.average
    );
    if show_statistics {
        println!("  - Standard deviation of the sample is {:.2}", summary.std_dev);
        println!("  - Variance of the sample is {:.2}", summary.variance);
        println!(
            "  - The song with the least words was {} with {} words",
            summary.shortest.name, summary.shortest.word_count
        );
        println!(
            "  - The song with the most words was {} with {} words",
            summary.longest.name, summary.longest.word_count
        );
    }
    print_separator();
}

fn print_timeline(points: &[TimelinePoint]) {
    if points.is_empty() {
        println!("No dated releases to show.");
        return;
    }

    let widest = points.iter().map(|p| p.word_count).max().unwrap_or(0).max(1);
    println!("Word count over time:");
    for point in points {
        let bar = "#".repeat(point.word_count * 40 / widest);
        println!(
            "  {}  {:>5}  {:<40}  {}",
            point.date, point.word_count, bar, point.name
        );
    }
}
