//! Opening links in the user's default browser.

use tracing::info;

use crate::command::Command;
use crate::error::{Error, Result};

/// Platform program that hands a URL to the default browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launcher {
    Windows,
    Macos,
    Xdg,
}

impl Launcher {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Macos
        } else {
            Self::Xdg
        }
    }

    pub fn command(self, url: &str) -> Command {
        match self {
            // Avoids `cmd /C start`, which would reinterpret `&` in the url.
            Self::Windows => Command::new("rundll32").args(["url.dll,FileProtocolHandler", url]),
            Self::Macos => Command::new("open").arg(url),
            Self::Xdg => Command::new("xdg-open").arg(url),
        }
    }
}

fn check_url(url: &str) -> Result<()> {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Ok(())
    } else {
        Err(Error::UnsupportedUrl {
            url: url.to_string(),
        })
    }
}

/// Open `url` in the default browser without waiting for it.
pub fn open_url(url: &str) -> Result<()> {
    check_url(url)?;
    let mut cmd = Launcher::current().command(url).quiet();
    info!(program = cmd.program(), url, "opening browser");
    cmd.spawn()?;
    Ok(())
}
