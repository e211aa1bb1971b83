use indexmap::IndexMap;
use serde::Serialize;

/// One track in an album or one episode in a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: Option<String>,
    pub index: u32,
    pub playlist_item_id: Option<String>,
}

impl Entry {
    pub fn new(title: Option<&str>, index: u32, playlist_item_id: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            index,
            playlist_item_id: playlist_item_id.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoEntry {
    pub file: Option<String>,
    pub thumb: Option<String>,
    pub playlist_item_id: Option<String>,
}

impl PhotoEntry {
    pub fn file_url(&self, base_url: &str) -> Option<String> {
        self.file.as_deref().map(|file| join_url(base_url, file))
    }

    pub fn thumb_url(&self, base_url: &str) -> Option<String> {
        self.thumb.as_deref().map(|thumb| join_url(base_url, thumb))
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieEntry {
    pub year: Option<String>,
    pub duration: Option<String>,
    pub playlist_item_id: Option<String>,
}

/// grouping -> subgroup -> entries. Keys and entries keep document order.
pub type Grouped = IndexMap<String, IndexMap<String, Vec<Entry>>>;

/// Playlist items reshaped by media category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedCollection {
    pub tracks: Grouped,
    pub photos: IndexMap<String, PhotoEntry>,
    pub episodes: Grouped,
    pub movies: IndexMap<String, MovieEntry>,
}

impl NormalizedCollection {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
            && self.photos.is_empty()
            && self.episodes.is_empty()
            && self.movies.is_empty()
    }

    /// Rewrites every photo's `file` and `thumb` as a URL on `base_url`.
    pub fn with_photo_urls(mut self, base_url: &str) -> Self {
        for photo in self.photos.values_mut() {
            photo.file = photo.file_url(base_url);
            photo.thumb = photo.thumb_url(base_url);
        }
        self
    }
}
