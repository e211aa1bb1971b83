use log::{debug, error};
use reqwest::{header::ACCEPT, Response, StatusCode};
use xmltree::Element;

use super::{
    config::PlexConfig, error::PlexError, models::identity::IdentityMediaContainer,
    parser::parse_xml,
};

pub const TOKEN_HEADER: &str = "X-Plex-Token";

/// Body of a successful `POST`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

pub struct Plex {
    config: PlexConfig,
    client: reqwest::Client,
}

impl Plex {
    pub fn new(config: PlexConfig) -> Result<Self, PlexError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &PlexConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url(),
            path.trim_start_matches('/')
        )
    }

    pub async fn get(&self, path: &str) -> Result<Response, PlexError> {
        let response = self
            .client
            .get(self.url(path))
            .header(TOKEN_HEADER, self.config.token())
            .header(ACCEPT, "application/xml")
            .send()
            .await?;

        Ok(response)
    }

    /// Plex reads the fields of a `POST` from the query string, not the body.
    pub async fn post(&self, path: &str, fields: &[(&str, &str)]) -> Result<Response, PlexError> {
        let response = self
            .client
            .post(self.url(path))
            .header(TOKEN_HEADER, self.config.token())
            .header(ACCEPT, "application/json")
            .query(fields)
            .send()
            .await?;

        Ok(response)
    }

    pub async fn delete(&self, path: &str) -> Result<Response, PlexError> {
        let response = self
            .client
            .delete(self.url(path))
            .header(TOKEN_HEADER, self.config.token())
            .send()
            .await?;

        Ok(response)
    }

    pub async fn try_fetch_xml(&self, path: &str) -> Result<Element, PlexError> {
        let response = self.get(path).await?;
        if !response.status().is_success() {
            return Err(status_error(&response));
        }
        let body = response.bytes().await?;
        parse_xml(&body)
    }

    /// GET `path` and parse the body as XML. Failures are logged, not returned.
    pub async fn fetch_xml(&self, path: &str) -> Option<Element> {
        match self.try_fetch_xml(path).await {
            Ok(root) => Some(root),
            Err(err) => {
                error!("GET {} failed: {}", self.url(path), err);
                None
            }
        }
    }

    /// Only `201 Created` counts as success; its body is decoded as JSON.
    pub async fn try_post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<PostResponse, PlexError> {
        let response = self.post(path, fields).await?;
        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(status_error(&response));
        }
        let body = response.json::<serde_json::Value>().await?;
        Ok(PostResponse { status, body })
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Option<PostResponse> {
        match self.try_post_form(path, fields).await {
            Ok(response) => Some(response),
            Err(err) => {
                error!("POST {} failed: {}", self.url(path), err);
                None
            }
        }
    }

    pub async fn try_delete_resource(&self, path: &str) -> Result<StatusCode, PlexError> {
        let response = self.delete(path).await?;
        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(response.status()),
            _ => Err(status_error(&response)),
        }
    }

    /// `true` on 200 or 204.
    pub async fn delete_resource(&self, path: &str) -> bool {
        match self.try_delete_resource(path).await {
            Ok(status) => {
                debug!("DELETE {} -> {}", self.url(path), status);
                true
            }
            Err(err) => {
                error!("DELETE {} failed: {}", self.url(path), err);
                false
            }
        }
    }

    pub async fn fetch_identity(&self) -> Result<IdentityMediaContainer, PlexError> {
        fetch_identity(&self.client, self.base_url(), Some(self.config.token())).await
    }
}

/// `GET {base_url}/identity`. Plex answers this one with or without a token.
pub async fn fetch_identity(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
) -> Result<IdentityMediaContainer, PlexError> {
    let mut request = client
        .get(format!("{}/identity", base_url))
        .header(ACCEPT, "application/xml");
    if let Some(token) = token {
        request = request.header(TOKEN_HEADER, token);
    }
    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(status_error(&response));
    }
    let body = response.text().await?;
    Ok(serde_xml_rs::from_str(&body)?)
}

fn status_error(response: &Response) -> PlexError {
    PlexError::Status {
        status: response.status(),
        url: response.url().to_string(),
    }
}
