//! Error types for mifirm-feed.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("feed contains no items")]
    NoItems,

    #[error("newest feed item has no id or link")]
    MissingLink,

    #[cfg(feature = "reqwest")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
