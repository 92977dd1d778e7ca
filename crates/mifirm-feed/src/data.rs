use std::time::Duration;

/// Release feed of the companion application.
pub const DEFAULT_FEED_URL: &str =
    "https://www.apkmirror.com/apk/anhui-huami-information-technology-co-ltd/mi-fit/feed/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOptions {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("mifirm-feed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FeedOptions {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let options = FeedOptions::default()
            .url("https://example.com/feed/")
            .timeout(Duration::from_secs(5));
        assert_eq!(options.url, "https://example.com/feed/");
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert!(options.user_agent.starts_with("mifirm-feed/"));
    }

    #[test]
    fn default_points_at_release_feed() {
        assert!(FeedOptions::default().url.ends_with("/mi-fit/feed/"));
    }
}
