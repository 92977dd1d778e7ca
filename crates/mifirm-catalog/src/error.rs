use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("selection {index} is out of range, expected 1 to {len}")]
    OutOfRange { index: isize, len: usize },

    #[error("'{input}' is not a device number")]
    InvalidSelection { input: String },

    #[error("unknown device: {name}")]
    UnknownDevice { name: String },
}

impl Error {
    /// Whether the caller should simply ask again.
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::InvalidSelection { .. })
    }
}
