//! Per-device extraction.
//!
//! Every payload of a device is looked up at `assets/<name>` and copied to
//! `<root>/<device name>/<name>`, overwriting what is already there. The
//! first failure stops the run; files written before it stay on disk.

use std::fs::{self, File};
use std::io::{self, BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mifirm_catalog::{ASSET_PREFIX, DeviceRecord, is_plain_name};
use tracing::{debug, info, warn};

use crate::archive::FirmwareArchive;
use crate::error::{Error, ExtractCause, Result};
use crate::report::{ExtractedFile, ExtractionReport};
use crate::source::ArchiveSource;

/// Reported after each payload is written.
#[derive(Clone, Debug)]
pub struct Progress {
    pub device: String,
    pub current_file: PathBuf,
    pub position: usize,
    pub total: usize,
    pub bytes_processed: u64,
}

#[derive(Clone, Default)]
pub struct Extractor {
    root: PathBuf,
    on_progress: Option<Arc<dyn Fn(Progress) + Send + Sync>>,
}

impl Extractor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            on_progress: None,
        }
    }

    pub fn on_progress(mut self, callback: Arc<dyn Fn(Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn root(&self) -> &Path { &self.root }

    /// Output folder for `device`.
    pub fn device_dir(&self, device: &DeviceRecord) -> PathBuf { self.root.join(device.name) }

    /// Open `source`, extract, and release the archive on every path.
    pub fn extract_from_source(
        &self,
        source: &ArchiveSource,
        device: &DeviceRecord,
    ) -> Result<ExtractionReport> {
        let file = source.open().map_err(|e| {
            Error::extraction(device.name, ExtractCause::Open {
                path: source.path().to_path_buf(),
                source: e,
            })
        })?;
        let mut archive = FirmwareArchive::new(BufReader::new(file))
            .map_err(|cause| Error::extraction(device.name, cause))?;
        self.extract(&mut archive, device)
    }

    pub fn extract<R: Read + Seek>(
        &self,
        archive: &mut FirmwareArchive<R>,
        device: &DeviceRecord,
    ) -> Result<ExtractionReport> {
        let destination = self.device_dir(device);
        info!(device = device.name, destination = %destination.display(), "extracting firmware");

        match self.extract_into(archive, device, &destination) {
            Ok(report) => {
                info!(
                    device = device.name,
                    files = report.file_count(),
                    bytes = report.total_bytes,
                    "extraction finished"
                );
                Ok(report)
            }
            Err(cause) => {
                warn!(device = device.name, error = %cause, "extraction failed");
                Err(Error::extraction(device.name, cause))
            }
        }
    }

    fn extract_into<R: Read + Seek>(
        &self,
        archive: &mut FirmwareArchive<R>,
        device: &DeviceRecord,
        destination: &Path,
    ) -> std::result::Result<ExtractionReport, ExtractCause> {
        if let Some(name) = device.payload_files.iter().find(|f| !is_plain_name(f)) {
            return Err(ExtractCause::InvalidPayloadName {
                name: name.to_string(),
            });
        }

        fs::create_dir_all(destination).map_err(|e| ExtractCause::DirectoryCreationFailed {
            path: destination.to_path_buf(),
            source: e,
        })?;

        let total = device.payload_files.len();
        let mut report = ExtractionReport::new(device.name, destination.to_path_buf());

        for (index, name) in device.payload_files.iter().enumerate() {
            let extracted = extract_payload(archive, name, &destination.join(name))?;
            debug!(entry = %extracted.entry_path, size = extracted.size, "payload written");

            if let Some(ref callback) = self.on_progress {
                callback(Progress {
                    device: device.name.to_string(),
                    current_file: extracted.target_path.clone(),
                    position: index + 1,
                    total,
                    bytes_processed: report.total_bytes + extracted.size,
                });
            }
            report.push(extracted);
        }

        Ok(report)
    }
}

fn extract_payload<R: Read + Seek>(
    archive: &mut FirmwareArchive<R>,
    name: &str,
    target_path: &Path,
) -> std::result::Result<ExtractedFile, ExtractCause> {
    let entry_path = format!("{ASSET_PREFIX}{name}");

    // Look the entry up before touching the target so a missing payload
    // leaves no empty file behind.
    let mut reader = archive.open_entry(&entry_path)?;
    let mut out = File::create(target_path).map_err(|e| ExtractCause::Write {
        path: target_path.to_path_buf(),
        source: e,
    })?;
    let size = io::copy(&mut reader, &mut out).map_err(|e| ExtractCause::Copy {
        entry: entry_path.clone(),
        path: target_path.to_path_buf(),
        source: e,
    })?;
    drop(reader);

    Ok(ExtractedFile {
        entry_path,
        target_path: target_path.to_path_buf(),
        size,
    })
}
