//! Turns Plex XML documents into playlist summaries, typed items and the
//! per-category [`NormalizedCollection`].
//!
//! Everything here is a pure function of the element tree it is handed.

use log::warn;
use xmltree::{Element, XMLNode};

use super::{
    error::PlexError,
    models::{
        collection::{Entry, Grouped, MovieEntry, NormalizedCollection, PhotoEntry},
        item::{LeafItem, MovieItem, PhotoItem, PlaylistItem},
        playlist::{PlaylistSummary, PlaylistType},
    },
};

pub fn parse_xml(body: &[u8]) -> Result<Element, PlexError> {
    Ok(Element::parse(body)?)
}

fn xml_children(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| match node {
        XMLNode::Element(elem) => Some(elem),
        _ => None,
    })
}

/// Every element named `name` below `root`, in document order. `root` itself
/// is never included.
fn descendants<'a>(root: &'a Element, name: &str) -> Vec<&'a Element> {
    fn walk<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
        for child in xml_children(element) {
            if child.name == name {
                found.push(child);
            }
            walk(child, name, found);
        }
    }

    let mut found = Vec::new();
    walk(root, name, &mut found);
    found
}

// Empty attributes count as missing.
fn attr(element: &Element, name: &str) -> Option<String> {
    element
        .attributes
        .get(name)
        .filter(|value| !value.is_empty())
        .cloned()
}

pub fn extract_playlists(root: &Element) -> Vec<PlaylistSummary> {
    descendants(root, "Playlist")
        .into_iter()
        .filter_map(|playlist| {
            let rating_key = attr(playlist, "ratingKey")?;
            let title = attr(playlist, "title")?;
            let raw_type = attr(playlist, "playlistType")?;
            match raw_type.parse::<PlaylistType>() {
                Ok(playlist_type) => Some(PlaylistSummary {
                    rating_key,
                    title,
                    playlist_type,
                }),
                Err(err) => {
                    warn!("skipping playlist {} ({}): {}", rating_key, title, err);
                    None
                }
            }
        })
        .collect()
}

/// Type of the first `Playlist` element, as returned by `GET /playlists/{id}`.
pub fn extract_playlist_type(root: &Element) -> Option<PlaylistType> {
    let playlist = descendants(root, "Playlist").into_iter().next()?;
    let raw_type = attr(playlist, "playlistType")?;
    match raw_type.parse() {
        Ok(playlist_type) => Some(playlist_type),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

/// Audio playlists hold `Track` elements, video playlists `Video` elements and
/// photo playlists `Photo` elements. Each element's `type` attribute decides
/// which item it becomes.
pub fn extract_items(root: &Element, playlist_type: PlaylistType) -> Vec<PlaylistItem> {
    let (tag, implied_type) = match playlist_type {
        PlaylistType::Audio => ("Track", Some("track")),
        PlaylistType::Video => ("Video", None),
        PlaylistType::Photo => ("Photo", Some("photo")),
    };

    descendants(root, tag)
        .into_iter()
        .filter_map(|element| match extract_item(element, implied_type) {
            Ok(item) => Some(item),
            Err(err) => {
                warn!(
                    "skipping {} element {:?}: {}",
                    tag,
                    attr(element, "title"),
                    err
                );
                None
            }
        })
        .collect()
}

fn extract_item(element: &Element, implied_type: Option<&str>) -> Result<PlaylistItem, PlexError> {
    let item_type = attr(element, "type");
    match item_type.as_deref().or(implied_type) {
        Some("track") => Ok(PlaylistItem::Track(extract_leaf(element))),
        Some("episode") => Ok(PlaylistItem::Episode(extract_leaf(element))),
        Some("movie") => Ok(PlaylistItem::Movie(extract_movie(element))),
        Some("photo") => Ok(PlaylistItem::Photo(extract_photo(element))),
        _ => Err(PlexError::UnrecognizedItemType(item_type.clone())),
    }
}

fn extract_leaf(element: &Element) -> LeafItem {
    LeafItem {
        key: attr(element, "key"),
        rating_key: attr(element, "ratingKey"),
        title: attr(element, "title"),
        duration: attr(element, "duration"),
        index: attr(element, "index"),
        parent_title: attr(element, "parentTitle"),
        grandparent_title: attr(element, "grandparentTitle"),
        grandparent_thumb: attr(element, "grandparentThumb"),
        playlist_item_id: attr(element, "playlistItemID"),
    }
}

fn extract_movie(element: &Element) -> MovieItem {
    MovieItem {
        key: attr(element, "key"),
        rating_key: attr(element, "ratingKey"),
        title: attr(element, "title"),
        duration: attr(element, "duration"),
        year: attr(element, "year"),
        thumb: attr(element, "thumb"),
        playlist_item_id: attr(element, "playlistItemID"),
    }
}

fn extract_photo(element: &Element) -> PhotoItem {
    PhotoItem {
        key: attr(element, "key"),
        rating_key: attr(element, "ratingKey"),
        title: attr(element, "title"),
        thumb: attr(element, "thumb"),
        file: descendants(element, "Part")
            .into_iter()
            .next()
            .and_then(|part| attr(part, "file")),
        playlist_item_id: attr(element, "playlistItemID"),
    }
}

/// Buckets items by their own type, independent of the playlist's type.
/// Items without the keys their bucket is indexed by are skipped.
pub fn classify(items: &[PlaylistItem]) -> NormalizedCollection {
    let mut collection = NormalizedCollection::default();

    for item in items {
        match item {
            PlaylistItem::Track(track) => push_leaf(&mut collection.tracks, track, "track"),
            PlaylistItem::Episode(episode) => {
                push_leaf(&mut collection.episodes, episode, "episode")
            }
            PlaylistItem::Photo(photo) => {
                let Some(title) = photo.title.clone() else {
                    warn!("skipping photo without a title: {:?}", photo);
                    continue;
                };
                collection.photos.insert(
                    title,
                    PhotoEntry {
                        file: photo.file.clone(),
                        thumb: photo.thumb.clone(),
                        playlist_item_id: photo.playlist_item_id.clone(),
                    },
                );
            }
            PlaylistItem::Movie(movie) => {
                let Some(title) = movie.title.clone() else {
                    warn!("skipping movie without a title: {:?}", movie);
                    continue;
                };
                collection.movies.insert(
                    title,
                    MovieEntry {
                        year: movie.year.clone(),
                        duration: movie.duration.clone(),
                        playlist_item_id: movie.playlist_item_id.clone(),
                    },
                );
            }
        }
    }

    collection
}

fn push_leaf(grouped: &mut Grouped, item: &LeafItem, kind: &str) {
    let (Some(group), Some(subgroup)) = (&item.grandparent_title, &item.parent_title) else {
        warn!(
            "skipping {} {:?}: missing grandparentTitle/parentTitle",
            kind, item.title
        );
        return;
    };

    let index = match item.index.as_deref().map(str::parse::<u32>) {
        None => 0,
        Some(Ok(index)) => index,
        Some(Err(err)) => {
            warn!(
                "skipping {} {:?}: bad index {:?}: {}",
                kind, item.title, item.index, err
            );
            return;
        }
    };

    grouped
        .entry(group.clone())
        .or_default()
        .entry(subgroup.clone())
        .or_default()
        .push(Entry::new(
            item.title.as_deref(),
            index,
            item.playlist_item_id.as_deref(),
        ));
}
