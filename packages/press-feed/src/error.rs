//! Error types for the press release feed.

use thiserror::Error;

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

/// Feed errors.
///
/// None of these ever reach the page: the loader turns every fetch error into
/// the fallback sample list and hands the error to [`crate::Diagnostics`].
#[derive(Debug, Error)]
pub enum FeedError {
    /// Connection failed, timed out, or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the list endpoint
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}
