use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

use crate::error::{FeedError, Result};

/// Feed configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub api_base_url: String,
    pub list_path: String,
    pub news_limit: u32,
    pub homepage_limit: u32,
    pub request_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            list_path: "/api/list-prs".to_string(),
            news_limit: 20,
            homepage_limit: 3,
            request_timeout_secs: 30,
        }
    }
}

impl FeedConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();
        Ok(Self {
            api_base_url: env::var("PRESS_FEED_API_URL").unwrap_or(defaults.api_base_url),
            list_path: env::var("PRESS_FEED_LIST_PATH").unwrap_or(defaults.list_path),
            news_limit: parse_var("PRESS_FEED_NEWS_LIMIT", defaults.news_limit)?,
            homepage_limit: parse_var("PRESS_FEED_HOMEPAGE_LIMIT", defaults.homepage_limit)?,
            request_timeout_secs: parse_timeout(defaults.request_timeout_secs)?,
        })
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_news_limit(mut self, limit: u32) -> Self {
        self.news_limit = limit;
        self
    }

    pub fn with_homepage_limit(mut self, limit: u32) -> Self {
        self.homepage_limit = limit;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Full URL of the list endpoint, without the query string
    pub fn list_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.list_path.trim_start_matches('/')
        )
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| FeedError::Config(format!("{name} must be a valid number"))),
        Err(_) => Ok(default),
    }
}

/// A zero timeout would fail every request, so it is rejected
fn parse_timeout(default: u64) -> Result<u64> {
    match parse_var("PRESS_FEED_TIMEOUT_SECS", default)? {
        0 => Err(FeedError::Config(
            "PRESS_FEED_TIMEOUT_SECS must be greater than zero".to_string(),
        )),
        secs => Ok(secs),
    }
}
