use std::io::{Read, Seek};

use zip::result::ZipError;

use crate::error::ExtractCause;

/// Read-only view of a zip container, addressed by exact entry path.
pub struct FirmwareArchive<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
}

impl<R: Read + Seek> FirmwareArchive<R> {
    /// Parse the central directory. Malformed containers are reported as
    /// [`ExtractCause::Corrupted`].
    pub fn new(reader: R) -> Result<Self, ExtractCause> {
        let archive = zip::ZipArchive::new(reader).map_err(ExtractCause::Corrupted)?;
        Ok(Self { archive })
    }

    pub fn len(&self) -> usize { self.archive.len() }

    pub fn is_empty(&self) -> bool { self.archive.len() == 0 }

    pub fn contains(&self, entry: &str) -> bool {
        self.archive.file_names().any(|name| name == entry)
    }

    /// Open the decompressed stream of the entry stored at exactly `entry`.
    pub fn open_entry(&mut self, entry: &str) -> Result<impl Read + '_, ExtractCause> {
        self.archive.by_name(entry).map_err(|e| match e {
            ZipError::FileNotFound => ExtractCause::EntryNotFound {
                entry: entry.to_string(),
            },
            other => ExtractCause::Corrupted(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use zip::write::SimpleFileOptions;

    use super::*;

    fn sample() -> Cursor<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("assets/Mili.fw", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"firmware").unwrap();
        writer
            .start_file("Mili.fw", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"decoy").unwrap();
        writer.finish().unwrap()
    }

    #[test]
    fn lookup_is_exact() {
        let mut archive = FirmwareArchive::new(sample()).unwrap();
        assert_eq!(archive.len(), 2);
        assert!(archive.contains("assets/Mili.fw"));
        assert!(!archive.contains("assets/mili.fw"));

        let mut content = Vec::new();
        archive
            .open_entry("assets/Mili.fw")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"firmware");
    }

    #[test]
    fn missing_entry_is_reported() {
        let mut archive = FirmwareArchive::new(sample()).unwrap();
        let err = archive.open_entry("assets/Mili_hr.fw").err().unwrap();
        assert!(matches!(err, ExtractCause::EntryNotFound { entry } if entry == "assets/Mili_hr.fw"));
    }

    #[test]
    fn garbage_is_corrupted() {
        let data = vec![0xDE, 0xAD, 0xBE, 0xEF];
        let result = FirmwareArchive::new(Cursor::new(data));
        assert!(matches!(result, Err(ExtractCause::Corrupted(_))));
    }
}
