use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::plex::error::PlexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistType {
    Audio,
    Video,
    Photo,
}

impl PlaylistType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistType::Audio => "audio",
            PlaylistType::Video => "video",
            PlaylistType::Photo => "photo",
        }
    }
}

impl fmt::Display for PlaylistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaylistType {
    type Err = PlexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" => Ok(PlaylistType::Audio),
            "video" => Ok(PlaylistType::Video),
            "photo" => Ok(PlaylistType::Photo),
            other => Err(PlexError::Validation(format!(
                "unknown playlist type {:?}",
                other
            ))),
        }
    }
}

/// One `Playlist` element from `GET /playlists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSummary {
    pub rating_key: String,
    pub title: String,
    pub playlist_type: PlaylistType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!("audio".parse::<PlaylistType>().unwrap(), PlaylistType::Audio);
        assert_eq!("video".parse::<PlaylistType>().unwrap(), PlaylistType::Video);
        assert_eq!("photo".parse::<PlaylistType>().unwrap(), PlaylistType::Photo);
        assert!("Audio".parse::<PlaylistType>().is_err());
    }

    #[test]
    fn displays_wire_name() {
        assert_eq!(PlaylistType::Video.to_string(), "video");
    }
}
