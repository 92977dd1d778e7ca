use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use mifirm_feed::{DEFAULT_FEED_URL, FeedOptions};
use serde::{Deserialize, Serialize};

/// Settings layered from defaults, `mifirm.toml` and `MIFIRM_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root folder; each device gets a subfolder named after it.
    pub output_dir: PathBuf,
    pub feed_url: String,
    pub feed_timeout_secs: u64,
    /// Pause after opening the browser so its output settles before the next prompt.
    pub browser_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("Firmware Files"),
            feed_url: DEFAULT_FEED_URL.to_string(),
            feed_timeout_secs: 30,
            browser_delay_secs: 3,
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "mifirm.toml";
    pub const ENV_PREFIX: &'static str = "MIFIRM_";

    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(Self::FILE_NAME));
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(Self::ENV_PREFIX))
            .extract()
    }

    pub fn feed_options(&self) -> FeedOptions {
        FeedOptions::default()
            .url(self.feed_url.clone())
            .timeout(Duration::from_secs(self.feed_timeout_secs))
    }

    pub fn browser_delay(&self) -> Duration { Duration::from_secs(self.browser_delay_secs) }
}
