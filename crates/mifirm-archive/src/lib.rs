//! Firmware payload extraction from application archives.
//!
//! # Architecture
//!
//! - `source.rs` - Pre-flight gate for archive paths
//! - `archive.rs` - Read-only zip container with exact entry lookup
//! - `extract.rs` - Per-device extraction into `<root>/<device name>`
//! - `report.rs` - What was written

pub use archive::FirmwareArchive;
pub use error::{Error, ExtractCause, Result, SourceDefect};
pub use extract::{Extractor, Progress};
pub use report::{ExtractedFile, ExtractionReport};
pub use source::{ArchiveSource, EXPECTED_EXTENSION, MIN_SOURCE_SIZE, validate_source};

mod archive;
mod error;
mod extract;
mod report;
mod source;
