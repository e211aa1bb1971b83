use std::collections::BTreeMap;

use client::Plex;
use log::{error, info, warn};
use models::{
    collection::NormalizedCollection,
    item::PlaylistItem,
    metadata::MetadataMediaContainer,
    playlist::{PlaylistSummary, PlaylistType},
    MediaContainerWrapper,
};

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod matcher;
pub mod models;
pub mod parser;

/// Every playlist on the server, or an empty list if the listing failed.
pub async fn list_playlists(plex: &Plex) -> Vec<PlaylistSummary> {
    match plex.fetch_xml("playlists").await {
        Some(root) => parser::extract_playlists(&root),
        None => Vec::new(),
    }
}

pub async fn get_playlists(plex: &Plex) -> BTreeMap<PlaylistType, Vec<PlaylistSummary>> {
    let mut by_type: BTreeMap<PlaylistType, Vec<PlaylistSummary>> = BTreeMap::new();
    for playlist in list_playlists(plex).await {
        by_type
            .entry(playlist.playlist_type)
            .or_default()
            .push(playlist);
    }
    by_type
}

/// The playlist titled exactly `title`.
pub async fn find_playlist(plex: &Plex, title: &str) -> Option<PlaylistSummary> {
    let playlists = list_playlists(plex).await;
    let found = matcher::find_by_title(&playlists, title).cloned();
    if found.is_none() {
        info!("Playlist titled '{}' not found.", title);
    }
    found
}

pub async fn find_playlist_rating_key(plex: &Plex, title: &str) -> Option<String> {
    find_playlist(plex, title)
        .await
        .map(|playlist| playlist.rating_key)
}

/// A playlist whose title is close to `title`, for hinting after a failed lookup.
pub async fn suggest_playlist(plex: &Plex, title: &str) -> Option<PlaylistSummary> {
    let playlists = list_playlists(plex).await;
    matcher::suggest_by_title(&playlists, title).cloned()
}

/// Looks up the playlist's type first, since it decides which elements hold the items.
pub async fn get_playlist_items(plex: &Plex, rating_key: &str) -> Vec<PlaylistItem> {
    let Some(metadata) = plex.fetch_xml(&format!("playlists/{}", rating_key)).await else {
        return Vec::new();
    };
    let Some(playlist_type) = parser::extract_playlist_type(&metadata) else {
        error!("Playlist metadata not found for '{}'.", rating_key);
        return Vec::new();
    };

    match plex
        .fetch_xml(&format!("playlists/{}/items", rating_key))
        .await
    {
        Some(root) => parser::extract_items(&root, playlist_type),
        None => Vec::new(),
    }
}

/// Photo `file`/`thumb` paths come back prefixed with the server's base URL.
pub async fn get_playlist_collection(plex: &Plex, rating_key: &str) -> NormalizedCollection {
    let items = get_playlist_items(plex, rating_key).await;
    parser::classify(&items).with_photo_urls(plex.base_url())
}

/// Creates a playlist from library items. Returns the server's JSON reply on `201`.
pub async fn create_playlist(
    plex: &Plex,
    title: &str,
    playlist_type: PlaylistType,
    item_ids: &[String],
) -> Option<serde_json::Value> {
    let uri = item_ids
        .iter()
        .map(|id| format!("library://{}", id))
        .collect::<Vec<_>>()
        .join(",");
    let fields = [
        ("type", playlist_type.as_str()),
        ("title", title),
        ("uri", uri.as_str()),
    ];

    match plex.post_form("playlists", &fields).await {
        Some(response) => {
            info!("Playlist '{}' created successfully.", title);
            Some(response.body)
        }
        None => {
            error!("Failed to create playlist '{}'.", title);
            None
        }
    }
}

/// Rating key of the playlist described by a `POST /playlists` reply.
pub fn created_rating_key(body: &serde_json::Value) -> Option<String> {
    let created: MediaContainerWrapper<MetadataMediaContainer> =
        match serde_json::from_value(body.clone()) {
            Ok(created) => created,
            Err(err) => {
                warn!("unexpected create playlist reply: {}", err);
                return None;
            }
        };
    created
        .media_container
        .metadata?
        .into_iter()
        .next()
        .map(|metadata| metadata.rating_key)
}

pub async fn delete_playlist(plex: &Plex, rating_key: &str) -> bool {
    if plex
        .delete_resource(&format!("playlists/{}", rating_key))
        .await
    {
        info!("Playlist with key '{}' deleted successfully.", rating_key);
        true
    } else {
        error!("Failed to delete playlist with key '{}'.", rating_key);
        false
    }
}

/// Removes items one at a time, stopping at the first one the server refuses.
pub async fn remove_playlist_items(
    plex: &Plex,
    rating_key: &str,
    playlist_item_ids: &[String],
) -> bool {
    for item_id in playlist_item_ids {
        let path = format!("playlists/{}/items/{}", rating_key, item_id);
        if !plex.delete_resource(&path).await {
            error!(
                "Failed to remove item '{}' from playlist '{}'.",
                item_id, rating_key
            );
            return false;
        }
        info!(
            "Item '{}' removed from playlist '{}'.",
            item_id, rating_key
        );
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rating_key_from_create_reply() {
        let body = serde_json::json!({
            "MediaContainer": {
                "size": 1,
                "Metadata": [{
                    "ratingKey": "4321",
                    "key": "/playlists/4321/items",
                    "type": "playlist",
                    "title": "Road trip",
                    "playlistType": "audio",
                    "leafCount": 2
                }]
            }
        });
        assert_eq!(created_rating_key(&body).as_deref(), Some("4321"));
    }

    #[test]
    fn create_reply_without_metadata_has_no_rating_key() {
        assert_eq!(created_rating_key(&serde_json::json!({"MediaContainer": {"size": 0}})), None);
        assert_eq!(created_rating_key(&serde_json::json!({"errors": []})), None);
    }
}
