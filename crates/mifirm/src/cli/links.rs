use anyhow::Context;
use mifirm_feed::{FeedOptions, ReqwestClient, resolve_latest};

/// Where the newest application package can be downloaded, and a way to
/// show it to the user.
pub trait LinkService {
    fn latest(&self) -> anyhow::Result<String>;
    fn open(&self, url: &str) -> anyhow::Result<()>;
}

pub struct WebLinks {
    options: FeedOptions,
}

impl WebLinks {
    pub fn new(options: FeedOptions) -> Self { Self { options } }
}

impl LinkService for WebLinks {
    fn latest(&self) -> anyhow::Result<String> {
        let client = ReqwestClient::new(&self.options).context("failed to build HTTP client")?;
        resolve_latest(&client, &self.options)
            .with_context(|| format!("failed to read feed {}", self.options.url))
    }

    fn open(&self, url: &str) -> anyhow::Result<()> {
        mifirm_platform::open_url(url)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;

    use anyhow::anyhow;

    use super::*;

    pub struct FakeLinks {
        link: Result<&'static str, &'static str>,
        pub opened: RefCell<Vec<String>>,
    }

    impl FakeLinks {
        pub fn ok(link: &'static str) -> Self {
            Self {
                link: Ok(link),
                opened: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(reason: &'static str) -> Self {
            Self {
                link: Err(reason),
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl LinkService for FakeLinks {
        fn latest(&self) -> anyhow::Result<String> {
            self.link.map(str::to_string).map_err(|reason| anyhow!(reason))
        }

        fn open(&self, url: &str) -> anyhow::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }
}
