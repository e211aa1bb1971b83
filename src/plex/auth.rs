use log::{error, info, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use super::{
    client::fetch_identity,
    config::{PlexConfig, DEFAULT_TIMEOUT},
    error::PlexError,
    models::account::SignInResponse,
};

pub const SIGNIN_URL: &str = "https://plex.tv/users/sign_in.json";

/// The `X-Plex-*` headers plex.tv wants to see on a sign-in request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHeaders {
    pub provides: String,
    pub platform: String,
    pub platform_version: String,
    pub product: String,
    pub version: String,
    pub device: String,
    pub device_name: String,
    pub identifier: String,
    pub client_identifier: String,
    pub language: String,
}

impl ClientHeaders {
    /// `server_version` is what the media server reports on `/identity`.
    pub fn new(server_version: Option<String>) -> Self {
        let platform = non_empty(std::env::consts::OS).unwrap_or("Unknown Platform");
        let device_name = std::env::var("HOSTNAME")
            .or_else(|_| std::env::var("COMPUTERNAME"))
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Unknown Device Name".to_string());

        Self {
            provides: "controller".to_string(),
            platform: platform.to_string(),
            platform_version: non_empty(std::env::consts::ARCH)
                .unwrap_or("Unknown Platform Version")
                .to_string(),
            product: "PlexAPI".to_string(),
            version: server_version.unwrap_or_else(|| "Unknown".to_string()),
            device: platform.to_string(),
            device_name: device_name.clone(),
            identifier: machine_identifier(platform, &device_name),
            client_identifier: uuid::Uuid::new_v4().to_string(),
            language: "en".to_string(),
        }
    }

    /// Same as [`ClientHeaders::new`], asking the server at `base_url` for its version.
    pub async fn for_server(base_url: &str) -> Self {
        let client = reqwest::Client::new();
        match fetch_identity(&client, base_url.trim_end_matches('/'), None).await {
            Ok(identity) => Self::new(identity.version),
            Err(err) => {
                warn!("could not read server version from {}: {}", base_url, err);
                Self::new(None)
            }
        }
    }

    pub fn to_header_map(&self) -> Result<HeaderMap, PlexError> {
        let pairs = [
            ("x-plex-provides", &self.provides),
            ("x-plex-platform", &self.platform),
            ("x-plex-platform-version", &self.platform_version),
            ("x-plex-product", &self.product),
            ("x-plex-version", &self.version),
            ("x-plex-device", &self.device),
            ("x-plex-device-name", &self.device_name),
            ("x-plex-identifier", &self.identifier),
            ("x-plex-client-identifier", &self.client_identifier),
            ("x-plex-language", &self.language),
        ];

        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            let value = HeaderValue::from_str(value).map_err(|err| {
                PlexError::Validation(format!("invalid {} header {:?}: {}", name, value, err))
            })?;
            headers.insert(HeaderName::from_static(name), value);
        }
        Ok(headers)
    }
}

/// Derived from the host, so it stays the same from one run to the next.
fn machine_identifier(platform: &str, device_name: &str) -> String {
    let name = format!("{}/{}", platform, device_name);
    uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, name.as_bytes())
        .simple()
        .to_string()
}

fn non_empty(value: &'static str) -> Option<&'static str> {
    Some(value).filter(|v| !v.is_empty())
}

/// Exchanges a plex.tv username and password for an account token.
pub struct Authenticator {
    client: reqwest::Client,
    signin_url: String,
    headers: ClientHeaders,
}

impl Authenticator {
    pub fn new(headers: ClientHeaders) -> Result<Self, PlexError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            signin_url: SIGNIN_URL.to_string(),
            headers,
        })
    }

    pub fn with_signin_url(mut self, signin_url: impl Into<String>) -> Self {
        self.signin_url = signin_url.into();
        self
    }

    pub fn headers(&self) -> &ClientHeaders {
        &self.headers
    }

    pub async fn fetch_token(&self, username: &str, password: &str) -> Result<String, PlexError> {
        match self.try_fetch_token(username, password).await {
            Ok(token) => Ok(token),
            Err(err) => {
                error!("Failed to fetch Plex token: {}", err);
                Err(match err {
                    PlexError::Authentication(_) => err,
                    other => PlexError::Authentication(other.to_string()),
                })
            }
        }
    }

    async fn try_fetch_token(&self, username: &str, password: &str) -> Result<String, PlexError> {
        let response = self
            .client
            .post(&self.signin_url)
            .headers(self.headers.to_header_map()?)
            .header(ACCEPT, "application/json")
            .form(&[("user[login]", username), ("user[password]", password)])
            .send()
            .await?
            .error_for_status()?;

        let body: SignInResponse = response.json().await?;
        body.user
            .and_then(|user| user.auth_token)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| PlexError::Authentication("token not found in the response".to_string()))
    }
}

/// Signs in and returns a configuration for `base_url` carrying the fresh token.
pub async fn authenticate(
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<PlexConfig, PlexError> {
    info!("attempting to authenticate with Plex");
    let headers = ClientHeaders::for_server(base_url).await;
    let token = Authenticator::new(headers)?
        .fetch_token(username, password)
        .await?;
    info!("authentication successful");
    PlexConfig::new(base_url, token)
}
