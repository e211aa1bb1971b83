use levenshtein::levenshtein;
use log::info;

use crate::plex::models::playlist::PlaylistSummary;

use super::{character_replacement::normalize, Matcher};

const MAX_DISTANCE: usize = 4;

/// Closest title by edit distance, as long as it is within `MAX_DISTANCE`.
pub struct LevenshteinDistance;
impl Matcher for LevenshteinDistance {
    fn match_title<'a>(
        &self,
        playlists: &'a [PlaylistSummary],
        title: &str,
    ) -> Option<&'a PlaylistSummary> {
        let wanted = normalize(title);
        let mut sorted: Vec<(usize, &PlaylistSummary)> = playlists
            .iter()
            .map(|p| (levenshtein(&wanted, &normalize(&p.title)), p))
            .collect();

        // stable, so ties keep listing order
        radsort::sort_by_key(&mut sorted, |(distance, _)| *distance);

        let (distance, playlist) = sorted.first()?;
        if *distance > MAX_DISTANCE {
            return None;
        }
        info!(
            "Closest match ({}): {} => {}",
            distance, title, playlist.title
        );
        Some(*playlist)
    }
}
