use reqwest::StatusCode;

/// Everything that can go wrong while talking to a Plex server.
///
/// Read and write operations on playlists log these and degrade to an
/// empty result; configuration and authentication surface them directly.
#[derive(Debug, thiserror::Error)]
pub enum PlexError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("malformed xml: {0}")]
    Parse(#[from] xmltree::ParseError),

    #[error("malformed xml document: {0}")]
    XmlDocument(#[from] serde_xml_rs::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("unrecognized item type {0:?}")]
    UnrecognizedItemType(Option<String>),
}
