//! HTTP source for the press release list endpoint

use async_trait::async_trait;
use std::time::Duration;

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use crate::types::{records_from_body, PressRelease};

/// Anything that can produce a page of press releases.
///
/// One call is one attempt; implementations must not retry.
#[async_trait]
pub trait PressReleaseSource: Send + Sync {
    async fn list(&self, limit: u32) -> Result<Vec<PressRelease>>;
}

/// reqwest-backed source for `GET <list_url>?limit=N`
#[derive(Clone)]
pub struct HttpPressReleaseSource {
    client: reqwest::Client,
    list_url: String,
}

impl HttpPressReleaseSource {
    /// Create a source with a plain client
    pub fn new(list_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            list_url: list_url.into(),
        }
    }

    /// Create a source from configuration, applying the request timeout
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            list_url: config.list_url(),
        })
    }

    pub fn list_url(&self) -> &str {
        &self.list_url
    }
}

#[async_trait]
impl PressReleaseSource for HttpPressReleaseSource {
    async fn list(&self, limit: u32) -> Result<Vec<PressRelease>> {
        tracing::debug!(url = %self.list_url, limit, "Fetching press releases");

        let resp = self
            .client
            .get(&self.list_url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let json: serde_json::Value = serde_json::from_str(&body)?;
        if json.is_null() {
            return Err(FeedError::Parse("response body is null".to_string()));
        }
        let records = records_from_body(&json);

        tracing::debug!(count = records.len(), "Fetched press releases");
        Ok(records)
    }
}
