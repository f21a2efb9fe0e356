//! Artist search command.

use tokio::runtime::Runtime;

use crate::catalogue::{ArtistCandidate, CatalogueService};
use crate::config::Config;

/// List artists matching a name
pub fn cmd_search(
    rt: &Runtime,
    config: &Config,
    name: &str,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let service = CatalogueService::from_config(config)?;
    let limit = limit.unwrap_or(config.output.search_limit);

    let candidates = rt.block_on(service.search_artists(name, limit))?;

    if candidates.is_empty() {
        println!("✗ No artists found matching '{}'", name);
        return Ok(());
    }

    println!("Artists matching '{}':\n", name);
    for (index, candidate) in candidates.iter().enumerate() {
        println!("{}", format_candidate(index + 1, candidate));
    }
    println!();
    println!("Use `count \"{}\" --pick N` to choose one.", name);

    Ok(())
}

fn format_candidate(position: usize, candidate: &ArtistCandidate) -> String {
    let artist = &candidate.artist;
    let mut line = format!("{:>3}. {} (score {})", position, artist.name, candidate.score);
    if let Some(description) = &artist.description {
        line.push_str(&format!(" - {description}"));
    }
    if !artist.tags.is_empty() {
        line.push_str(&format!(" [{}]", artist.tags_display()));
    }
    line.push_str(&format!("\n     https://musicbrainz.org/artist/{}", artist.mb_id()));
    line
}
