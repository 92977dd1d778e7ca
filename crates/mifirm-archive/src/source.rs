use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result, SourceDefect};

/// Archive extension accepted by the gate, compared case-insensitively.
pub const EXPECTED_EXTENSION: &str = "apk";

/// Anything smaller than this cannot be a real application package.
pub const MIN_SOURCE_SIZE: u64 = u16::MAX as u64;

/// A path that passed [`validate_source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSource {
    path: PathBuf,
    len: u64,
}

impl ArchiveSource {
    pub fn path(&self) -> &Path { &self.path }

    pub fn len(&self) -> u64 { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Open the archive read-only.
    pub fn open(&self) -> io::Result<File> { File::open(&self.path) }
}

/// Reject paths that cannot be an application archive before anything is
/// extracted from them.
pub fn validate_source(path: impl AsRef<Path>) -> Result<ArchiveSource> {
    let path = path.as_ref();
    let invalid = |reason| Error::InvalidSource {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(invalid(SourceDefect::Missing)),
        Err(e) => return Err(invalid(SourceDefect::Unreadable(e))),
    };

    if !metadata.is_file() {
        return Err(invalid(SourceDefect::NotAFile));
    }

    let extension_matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPECTED_EXTENSION));
    if !extension_matches {
        return Err(invalid(SourceDefect::WrongExtension {
            expected: EXPECTED_EXTENSION,
        }));
    }

    let len = metadata.len();
    if len < MIN_SOURCE_SIZE {
        return Err(invalid(SourceDefect::TooSmall { len }));
    }

    debug!(path = %path.display(), len, "source archive accepted");
    Ok(ArchiveSource {
        path: path.to_path_buf(),
        len,
    })
}
