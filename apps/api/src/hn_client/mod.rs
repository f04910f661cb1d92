//! HackerNews client — the only module that talks to the upstream item API.
//!
//! Unauthenticated, no retries, no caching: every call goes to the network.
//! The base URL is configurable so tests can point it at a mock server.

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum HnError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// An upstream item record. Stories, comments, jobs and polls all share
/// this shape; only `id` is guaranteed.
#[derive(Debug, Clone, Deserialize)]
pub struct HnItem {
    pub id: u64,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub score: Option<i64>,
    pub time: Option<i64>,
    pub by: Option<String>,
}

#[derive(Clone)]
pub struct HnClient {
    client: Client,
    base_url: String,
}

impl HnClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, HnError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current top-story ids, best first. A `null` body reads as an empty list.
    pub async fn top_story_ids(&self) -> Result<Vec<u64>, HnError> {
        let url = format!("{}/topstories.json", self.base_url);
        let ids: Option<Vec<u64>> = self.get_json(&url).await?;
        Ok(ids.unwrap_or_default())
    }

    /// A single item by id. Deleted items come back as `null` → `None`.
    pub async fn item(&self, id: u64) -> Result<Option<HnItem>, HnError> {
        let url = format!("{}/item/{id}.json", self.base_url);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, HnError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(HnError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!("GET {url} -> {} bytes", body.len());
        Ok(serde_json::from_slice(&body)?)
    }
}
