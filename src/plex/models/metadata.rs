use serde::Deserialize;

/// JSON body returned by `POST /playlists`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetadataMediaContainer {
    pub size: Option<i32>,
    #[serde(rename = "Metadata")]
    pub metadata: Option<Vec<Metadata>>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub key: Option<String>,
    pub rating_key: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub rtype: Option<String>,
    pub playlist_type: Option<String>,
    pub leaf_count: Option<i64>,
}
