pub use browser::{Launcher, open_url};
pub use error::{Error, Result};

pub mod browser;
pub mod command;
mod error;
