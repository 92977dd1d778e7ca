//! The guided flow: pick where the package comes from, point at it, pick a
//! device, extract.

use std::io;

use anyhow::Context;
use mifirm_archive::{ExtractionReport, Extractor, validate_source};
use mifirm_catalog::{Catalog, DeviceRecord};
use tracing::{debug, warn};

use crate::cli::links::LinkService;
use crate::config::Config;
use crate::term::Prompt;

const LINK_FAILED: &str = "Failed to open APKMirror link!";
const SOURCE_INVALID: &str = "Failed to locate valid APK file!";
const EXTRACTION_FAILED: &str = "Failed to extract firmware!";

#[derive(Debug)]
pub enum Outcome {
    Extracted(ExtractionReport),
    /// The user was told what went wrong and acknowledged it.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceChoice {
    OpenLink,
    LocalFile,
}

pub struct Session<'a, P, L> {
    prompt: &'a mut P,
    links: &'a L,
    config: &'a Config,
    catalog: Catalog,
}

impl<'a, P: Prompt, L: LinkService> Session<'a, P, L> {
    pub fn new(prompt: &'a mut P, links: &'a L, config: &'a Config, catalog: Catalog) -> Self {
        Self {
            prompt,
            links,
            config,
            catalog,
        }
    }

    /// Terminal I/O errors are returned; every other failure is shown to the
    /// user and ends in [`Outcome::Failed`].
    pub fn run(mut self) -> anyhow::Result<Outcome> {
        if self.choose_source()? == SourceChoice::OpenLink {
            self.prompt.say("")?;
            self.prompt.say("Opening APKMirror link, standby...")?;
            if let Err(e) = self.open_latest() {
                warn!(error = %format!("{e:#}"), "download link unavailable");
                self.prompt.say(LINK_FAILED)?;
                self.prompt.say(&format!("Error: {e:#}"))?;
                return self.abort();
            }
            self.prompt.pause(self.config.browser_delay());
        }

        self.prompt.clear()?;
        self.prompt
            .say("Please enter the full path of the APK file you would like to extract:")?;
        let raw = self.prompt.read_line()?;
        let source = match validate_source(clean_path(&raw)) {
            Ok(source) => source,
            Err(e) => {
                debug!(error = %e, "source rejected");
                self.prompt.say(SOURCE_INVALID)?;
                return self.abort();
            }
        };

        let device = self.choose_device()?;
        match Extractor::new(&self.config.output_dir).extract_from_source(&source, device) {
            Ok(report) => {
                self.prompt.say("")?;
                self.prompt.say(&format!(
                    "Extracted {} file(s) for {} into {}",
                    report.file_count(),
                    report.device,
                    report.destination.display()
                ))?;
                for file in &report.files {
                    self.prompt.say(&format!("  {}", file.target_path.display()))?;
                }
                Ok(Outcome::Extracted(report))
            }
            Err(e) => {
                self.prompt.say(EXTRACTION_FAILED)?;
                self.prompt.say(&format!("Error: {:#}", anyhow::Error::new(e)))?;
                self.abort()
            }
        }
    }

    fn choose_source(&mut self) -> io::Result<SourceChoice> {
        loop {
            self.prompt.clear()?;
            self.prompt
                .say("Please select one of the following options of obtaining the Mi Fit APK:")?;
            self.prompt.say("1. Open APKMirror link")?;
            self.prompt.say("2. Specify pre-downloaded file")?;
            self.prompt.say("")?;
            match self.prompt.read_key()? {
                '1' => return Ok(SourceChoice::OpenLink),
                '2' => return Ok(SourceChoice::LocalFile),
                _ => {}
            }
        }
    }

    fn open_latest(&mut self) -> anyhow::Result<()> {
        let url = self.links.latest()?;
        self.prompt.say(&url)?;
        self.links
            .open(&url)
            .with_context(|| format!("could not open {url}"))
    }

    fn choose_device(&mut self) -> io::Result<&'static DeviceRecord> {
        loop {
            self.prompt.say("")?;
            self.prompt
                .say("Which of the following devices would you wish to extract firmware for?")?;
            for (position, device) in self.catalog.iter() {
                self.prompt.say(&format!("{position}: {}", device.name))?;
            }
            let key = self.prompt.read_key()?;
            match self.catalog.parse_selection(&key.to_string()) {
                Ok(device) => return Ok(device),
                Err(e) => debug!(error = %e, "selection rejected"),
            }
        }
    }

    fn abort(&mut self) -> anyhow::Result<Outcome> {
        self.prompt.say("Press any key to exit.")?;
        // End of input counts as a keypress here.
        let _ = self.prompt.read_key();
        Ok(Outcome::Failed)
    }
}

/// Paths pasted from a file manager often arrive quoted.
fn clean_path(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}
