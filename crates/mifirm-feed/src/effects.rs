use tracing::{debug, info};

use crate::core::latest_link;
use crate::data::FeedOptions;
use crate::error::{FeedError, Result};

/// Blocking HTTP access to a feed document.
///
/// Implementations handle redirects and timeouts themselves and map
/// non-success statuses to [`FeedError::HttpError`].
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait FeedClient {
    fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Fetch the feed at `options.url` and return the newest item's link.
pub fn resolve_latest<C: FeedClient + ?Sized>(client: &C, options: &FeedOptions) -> Result<String> {
    let url = options.url.trim();
    let scheme_ok = url.starts_with("https://") || url.starts_with("http://");
    if !scheme_ok {
        return Err(FeedError::InvalidUrl(options.url.clone()));
    }

    debug!(url, "fetching release feed");
    let body = client.fetch_text(url)?;
    let link = latest_link(&body)?;
    info!(link = %link, "resolved latest download link");
    Ok(link)
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production feed client using blocking `reqwest`.
    pub struct ReqwestClient {
        client: reqwest::blocking::Client,
    }

    impl ReqwestClient {
        pub fn new(options: &FeedOptions) -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .timeout(options.timeout)
                .user_agent(options.user_agent.clone())
                .build()?;
            Ok(Self { client })
        }
    }

    impl FeedClient for ReqwestClient {
        fn fetch_text(&self, url: &str) -> Result<String> {
            let response = self.client.get(url).send()?;
            let status = response.status();
            if !status.is_success() {
                return Err(FeedError::HttpError(status.to_string()));
            }
            Ok(response.text()?)
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct MockClient {
        body: std::result::Result<&'static str, u16>,
        requested: RefCell<Vec<String>>,
    }

    impl MockClient {
        fn ok(body: &'static str) -> Self {
            Self {
                body: Ok(body),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn status(code: u16) -> Self {
            Self {
                body: Err(code),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl FeedClient for MockClient {
        fn fetch_text(&self, url: &str) -> Result<String> {
            self.requested.borrow_mut().push(url.to_string());
            match self.body {
                Ok(body) => Ok(body.to_string()),
                Err(code) => Err(FeedError::HttpError(code.to_string())),
            }
        }
    }

    #[test]
    fn resolves_from_default_feed() {
        let client = MockClient::ok("<item><guid>https://example.com/latest</guid></item>");
        let options = FeedOptions::default();
        assert_eq!(
            resolve_latest(&client, &options).unwrap(),
            "https://example.com/latest"
        );
        assert_eq!(*client.requested.borrow(), vec![options.url.clone()]);
    }

    #[test]
    fn http_errors_propagate() {
        let client = MockClient::status(503);
        let err = resolve_latest(&client, &FeedOptions::default()).unwrap_err();
        assert!(matches!(err, FeedError::HttpError(ref s) if s == "503"));
    }

    #[test]
    fn rejects_non_http_feed_url() {
        let client = MockClient::ok("<item><guid>x</guid></item>");
        let options = FeedOptions::default().url("file:///tmp/feed.xml");
        let err = resolve_latest(&client, &options).unwrap_err();
        assert!(matches!(err, FeedError::InvalidUrl(_)));
        assert!(client.requested.borrow().is_empty());
    }

    #[test]
    fn empty_feed_is_reported() {
        let client = MockClient::ok("<rss><channel></channel></rss>");
        let err = resolve_latest(&client, &FeedOptions::default()).unwrap_err();
        assert!(matches!(err, FeedError::NoItems));
    }

    #[cfg(feature = "reqwest")]
    #[test]
    fn reqwest_client_builds() {
        assert!(ReqwestClient::new(&FeedOptions::default()).is_ok());
    }
}
