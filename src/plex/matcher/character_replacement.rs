use crate::plex::models::playlist::PlaylistSummary;

use super::{forward_backward::MatchForwardBack, Matcher};

const REPLACEMENTS: [(&str, &str); 6] = [
    ("’", "'"),
    ("&", "and"),
    ("-", " "),
    ("(", ""),
    (")", ""),
    (".", ""),
];

pub(crate) fn normalize(title: &str) -> String {
    let mut title = title.to_lowercase();
    for (from, to) in REPLACEMENTS.iter() {
        title = title.replace(from, to);
    }
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Prefix match after smoothing out punctuation differences.
pub struct MatchWithCharReplacements;
impl Matcher for MatchWithCharReplacements {
    fn match_title<'a>(
        &self,
        playlists: &'a [PlaylistSummary],
        title: &str,
    ) -> Option<&'a PlaylistSummary> {
        let normalized: Vec<PlaylistSummary> = playlists
            .iter()
            .map(|p| PlaylistSummary {
                title: normalize(&p.title),
                ..p.clone()
            })
            .collect();

        let found = MatchForwardBack.match_title(&normalized, &normalize(title))?;
        playlists
            .iter()
            .find(|playlist| playlist.rating_key == found.rating_key)
    }
}
