use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ExtractionReport {
    pub device: String,
    pub destination: PathBuf,
    pub files: Vec<ExtractedFile>,
    pub total_bytes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedFile {
    pub entry_path: String,
    pub target_path: PathBuf,
    pub size: u64,
}

impl ExtractionReport {
    pub(crate) fn new(device: &str, destination: PathBuf) -> Self {
        Self {
            device: device.to_string(),
            destination,
            files: Vec::new(),
            total_bytes: 0,
        }
    }

    pub(crate) fn push(&mut self, file: ExtractedFile) {
        self.total_bytes += file.size;
        self.files.push(file);
    }

    pub fn file_count(&self) -> usize { self.files.len() }
}
