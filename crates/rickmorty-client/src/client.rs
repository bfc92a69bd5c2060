use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::types::{CharacterSummary, EpisodeSummary};

const API_BASE: &str = "https://rickandmortyapi.com/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the public Rick and Morty API
///
/// Issues exactly one GET per lookup and projects the JSON body into the
/// trimmed summary records. Failures propagate to the caller; nothing is
/// retried or cached.
#[derive(Debug, Clone)]
pub struct RickAndMortyClient {
    client: Client,
    base_url: String,
}

impl RickAndMortyClient {
    /// Create a client against the public API endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE)
    }

    /// Create a client against a custom endpoint (tests, config overrides)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_options(base_url, REQUEST_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    pub fn with_options(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client resolves lookups against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one episode by id
    pub async fn episode(&self, episode_id: u32) -> Result<EpisodeSummary> {
        let url = format!("{}/episode/{}", self.base_url, episode_id);
        self.get_json(&url).await
    }

    /// Fetch one character by id
    pub async fn character(&self, character_id: u32) -> Result<CharacterSummary> {
        let url = format!("{}/character/{}", self.base_url, character_id);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "Fetching upstream record");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::error!(%url, %status, "Upstream request failed");
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
