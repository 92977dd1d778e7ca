use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use mifirm_archive::MIN_SOURCE_SIZE;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Writes `mifit.apk` holding `entries` plus enough filler to pass the size gate.
pub fn apk(dir: &Path, entries: &[(&str, &[u8])]) -> PathBuf {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content).unwrap();
    }
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file("resources.arsc", stored).unwrap();
    writer.write_all(&vec![7u8; MIN_SOURCE_SIZE as usize]).unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let path = dir.join("mifit.apk");
    fs::write(&path, bytes).unwrap();
    path
}
