use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::ValueHint;
use mifirm_archive::{ExtractionReport, Extractor, Progress, validate_source};
use mifirm_catalog::Catalog;

use crate::config::Config;

#[derive(Debug, clap::Args)]
pub struct Extract {
    /// Application package to read
    #[arg(long, short, value_hint = ValueHint::FilePath)]
    apk: PathBuf,

    /// Device number as shown by `mifirm list`
    #[arg(
        long,
        short,
        allow_negative_numbers = true,
        conflicts_with = "name",
        required_unless_present = "name"
    )]
    device: Option<isize>,

    /// Exact device name, e.g. "Mi Band 3"
    #[arg(long, short)]
    name: Option<String>,
}

impl Extract {
    pub fn run(self, config: &Config, catalog: Catalog) -> anyhow::Result<ExtractionReport> {
        let device = match (self.device, self.name.as_deref()) {
            (Some(index), _) => catalog.select(index)?,
            (None, Some(name)) => catalog.find(name)?,
            (None, None) => bail!("either --device or --name is required"),
        };
        let source = validate_source(&self.apk)?;

        let extractor = Extractor::new(&config.output_dir).on_progress(Arc::new(|p: Progress| {
            println!("[{}/{}] {}", p.position, p.total, p.current_file.display());
        }));
        let report = extractor.extract_from_source(&source, device)?;

        println!(
            "Extracted {} file(s), {} bytes, for {} into {}",
            report.file_count(),
            report.total_bytes,
            report.device,
            report.destination.display()
        );
        Ok(report)
    }
}
