use crate::plex::models::playlist::PlaylistSummary;

use super::Matcher;

/// Case-insensitive prefix match in either direction, so "car songs" finds
/// "Car songs 2019" and "Car songs 2019" finds "Car songs".
pub struct MatchForwardBack;
impl Matcher for MatchForwardBack {
    fn match_title<'a>(
        &self,
        playlists: &'a [PlaylistSummary],
        title: &str,
    ) -> Option<&'a PlaylistSummary> {
        let wanted = title.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        playlists.iter().find(|playlist| {
            let candidate = playlist.title.trim().to_lowercase();
            !candidate.is_empty()
                && (candidate.starts_with(&wanted) || wanted.starts_with(&candidate))
        })
    }
}
