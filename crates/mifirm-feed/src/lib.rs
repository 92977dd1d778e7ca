//! Resolve the newest download link from a release RSS feed.
//!
//! # Architecture
//!
//! - [`data`] - Feed configuration
//! - [`core`] - Pure parsing of the feed document
//! - [`effects`] - HTTP access behind the [`FeedClient`] trait
//!
//! The crate only produces a URL string. Opening it is up to the caller.

mod core;
mod data;
mod effects;
mod error;

pub use self::core::latest_link;
pub use data::{DEFAULT_FEED_URL, FeedOptions};
pub use effects::{FeedClient, resolve_latest};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FeedError, Result};
