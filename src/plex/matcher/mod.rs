pub mod character_replacement;
pub mod forward_backward;
pub mod levenshtein;

use crate::plex::models::playlist::PlaylistSummary;

use self::{
    character_replacement::MatchWithCharReplacements, forward_backward::MatchForwardBack,
    levenshtein::LevenshteinDistance,
};

/// A strategy for picking the playlist a user meant by `title`.
pub trait Matcher {
    fn match_title<'a>(
        &self,
        playlists: &'a [PlaylistSummary],
        title: &str,
    ) -> Option<&'a PlaylistSummary>;
}

pub struct MatchExact;
impl Matcher for MatchExact {
    fn match_title<'a>(
        &self,
        playlists: &'a [PlaylistSummary],
        title: &str,
    ) -> Option<&'a PlaylistSummary> {
        playlists.iter().find(|playlist| playlist.title == title)
    }
}

/// Looser strategies for suggesting a near miss: prefix, prefix ignoring
/// punctuation, edit distance.
pub fn fuzzy_matchers() -> Vec<Box<dyn Matcher>> {
    vec![
        Box::new(MatchForwardBack),
        Box::new(MatchWithCharReplacements),
        Box::new(LevenshteinDistance),
    ]
}

/// The playlist whose title is exactly `title`.
pub fn find_by_title<'a>(
    playlists: &'a [PlaylistSummary],
    title: &str,
) -> Option<&'a PlaylistSummary> {
    if title.trim().is_empty() {
        return None;
    }
    MatchExact.match_title(playlists, title)
}

/// A playlist with a similar title, for "did you mean" hints. Never used to
/// resolve a lookup.
pub fn suggest_by_title<'a>(
    playlists: &'a [PlaylistSummary],
    title: &str,
) -> Option<&'a PlaylistSummary> {
    if title.trim().is_empty() {
        return None;
    }
    fuzzy_matchers()
        .iter()
        .find_map(|matcher| matcher.match_title(playlists, title))
}
