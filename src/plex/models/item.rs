use serde::Serialize;

/// A track or an episode: something that sits two levels below its
/// grouping (artist/album, show/season).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafItem {
    pub key: Option<String>,
    pub rating_key: Option<String>,
    pub title: Option<String>,
    pub duration: Option<String>,
    pub index: Option<String>,
    pub parent_title: Option<String>,
    pub grandparent_title: Option<String>,
    pub grandparent_thumb: Option<String>,
    #[serde(rename = "playlistItemID")]
    pub playlist_item_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieItem {
    pub key: Option<String>,
    pub rating_key: Option<String>,
    pub title: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub thumb: Option<String>,
    #[serde(rename = "playlistItemID")]
    pub playlist_item_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoItem {
    pub key: Option<String>,
    pub rating_key: Option<String>,
    pub title: Option<String>,
    pub thumb: Option<String>,
    /// `file` attribute of the first nested `Part`.
    pub file: Option<String>,
    #[serde(rename = "playlistItemID")]
    pub playlist_item_id: Option<String>,
}

/// A playlist entry, tagged by the element's own `type` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlaylistItem {
    Track(LeafItem),
    Episode(LeafItem),
    Movie(MovieItem),
    Photo(PhotoItem),
}

impl PlaylistItem {
    pub fn type_name(&self) -> &'static str {
        match self {
            PlaylistItem::Track(_) => "track",
            PlaylistItem::Episode(_) => "episode",
            PlaylistItem::Movie(_) => "movie",
            PlaylistItem::Photo(_) => "photo",
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            PlaylistItem::Track(item) | PlaylistItem::Episode(item) => item.title.as_deref(),
            PlaylistItem::Movie(item) => item.title.as_deref(),
            PlaylistItem::Photo(item) => item.title.as_deref(),
        }
    }

    pub fn playlist_item_id(&self) -> Option<&str> {
        match self {
            PlaylistItem::Track(item) | PlaylistItem::Episode(item) => {
                item.playlist_item_id.as_deref()
            }
            PlaylistItem::Movie(item) => item.playlist_item_id.as_deref(),
            PlaylistItem::Photo(item) => item.playlist_item_id.as_deref(),
        }
    }
}
