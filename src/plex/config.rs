use std::time::Duration;

use super::error::PlexError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a single Plex server. Fixed once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlexConfig {
    base_url: String,
    token: String,
    timeout: Duration,
}

impl PlexConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, PlexError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(PlexError::Validation("PLEX_BASEURL not set".to_string()));
        }

        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(PlexError::Validation("PLEX_TOKEN not set".to_string()));
        }

        Ok(Self {
            base_url,
            token,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads `PLEX_BASEURL` (or the older `PLEX_URL`) and `PLEX_TOKEN`.
    pub fn from_env() -> Result<Self, PlexError> {
        let base_url = std::env::var("PLEX_BASEURL")
            .or_else(|_| std::env::var("PLEX_URL"))
            .unwrap_or_default();
        let token = std::env::var("PLEX_TOKEN").unwrap_or_default();
        Self::new(base_url, token)
    }

    /// Builds `http://{host}:{port}`, dropping any scheme already on `host`.
    pub fn from_host(host: &str, port: u16, token: impl Into<String>) -> Result<Self, PlexError> {
        let host = host
            .trim()
            .trim_start_matches("http://")
            .trim_start_matches("https://");
        if host.is_empty() || port == 0 {
            return Err(PlexError::Validation(
                "server host and port must be provided".to_string(),
            ));
        }
        Self::new(format!("http://{}:{}", host, port), token)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
