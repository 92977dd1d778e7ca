use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid source archive '{path}': {reason}")]
    InvalidSource { path: PathBuf, reason: SourceDefect },

    #[error("failed to extract firmware for '{device}'")]
    ExtractionFailed {
        device: String,
        #[source]
        cause: ExtractCause,
    },
}

impl Error {
    pub(crate) fn extraction(device: &str, cause: ExtractCause) -> Self {
        Self::ExtractionFailed {
            device: device.to_string(),
            cause,
        }
    }

    pub fn cause(&self) -> Option<&ExtractCause> {
        match self {
            Self::ExtractionFailed { cause, .. } => Some(cause),
            Self::InvalidSource { .. } => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceDefect {
    #[error("file does not exist")]
    Missing,

    #[error("not a regular file")]
    NotAFile,

    #[error("expected a .{expected} file")]
    WrongExtension { expected: &'static str },

    #[error("file is too small ({len} bytes)")]
    TooSmall { len: u64 },

    #[error("cannot inspect file: {0}")]
    Unreadable(#[source] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractCause {
    #[error("payload name '{name}' is not a plain file name")]
    InvalidPayloadName { name: String },

    #[error("failed to open '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("archive is corrupted: {0}")]
    Corrupted(#[source] zip::result::ZipError),

    #[error("entry '{entry}' not found in archive")]
    EntryNotFound { entry: String },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to create '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to copy '{entry}' to '{path}': {source}")]
    Copy {
        entry: String,
        path: PathBuf,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
