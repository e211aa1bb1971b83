use serde::Deserialize;

pub mod account;
pub mod collection;
pub mod identity;
pub mod item;
pub mod metadata;
pub mod playlist;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MediaContainerWrapper<T> {
    #[serde(rename = "MediaContainer")]
    pub media_container: T,
}
