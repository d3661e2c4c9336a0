//! Key retrieval client
//!
//! The form talks to the endpoint through [`KeyClient`]; [`HttpKeyClient`]
//! is the reqwest implementation used outside tests.

use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

/// Default endpoint location
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/sapkey";

/// Source of the key shown after a successful submission
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyClient: Send + Sync {
    /// Fetch the current key
    ///
    /// # Errors
    /// - `ClientError::Transport` if no response arrives
    /// - `ClientError::Status` for any non-2xx response
    /// - `ClientError::Decode` if the success body is unreadable
    async fn fetch_key(&self) -> Result<String, ClientError>;
}

/// Form client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL of `GET /api/sapkey`
    pub api_url: String,
}

impl ClientConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With endpoint URL
    #[inline]
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SapKeyBody {
    sap_key: String,
}

/// [`KeyClient`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpKeyClient {
    http: reqwest::Client,
    api_url: String,
}

impl HttpKeyClient {
    /// Build a client for the configured endpoint
    ///
    /// # Errors
    /// - `ClientError::Setup` if the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    /// Endpoint URL
    #[inline]
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl KeyClient for HttpKeyClient {
    async fn fetch_key(&self) -> Result<String, ClientError> {
        tracing::debug!(url = %self.api_url, "requesting SAP key");

        let response = self
            .http
            .get(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "SAP key request failed");
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: SapKeyBody = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(body.sap_key)
    }
}
