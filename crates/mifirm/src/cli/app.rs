use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use mifirm_catalog::Catalog;

use crate::cli::extract::Extract;
use crate::cli::interactive::{Outcome, Session};
use crate::cli::latest::Latest;
use crate::cli::links::WebLinks;
use crate::cli::ls::Ls;
use crate::config::Config;
use crate::term::Terminal;

/// Without a subcommand the tool walks through the interactive prompts.
#[derive(Debug, Parser)]
#[command(name = "mifirm", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// Configuration file [default: ./mifirm.toml]
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output root folder, overrides `output_dir`
    #[arg(long, short, global = true, value_hint = ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "ls", name = "list", about = "List supported devices and their firmware files")]
    List(Ls),
    #[command(alias = "x", name = "extract", about = "Extract firmware for one device without prompting")]
    Extract(Extract),
    #[command(name = "latest", about = "Print the newest application download link")]
    Latest(Latest),
}

impl App {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        if let Some(path) = &self.config {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
        }
        let mut config = Config::load(self.config.as_deref()).context("failed to load configuration")?;
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        Ok(config)
    }

    pub fn run(self) -> anyhow::Result<ExitCode> {
        let config = self.load_config()?;
        let catalog = Catalog::builtin();
        let links = WebLinks::new(config.feed_options());

        match self.cmd {
            None => {
                let mut terminal = Terminal::stdout();
                match Session::new(&mut terminal, &links, &config, catalog).run()? {
                    Outcome::Extracted(_) => Ok(ExitCode::SUCCESS),
                    Outcome::Failed => Ok(ExitCode::FAILURE),
                }
            }
            Some(Commands::List(ls)) => {
                ls.run(catalog);
                Ok(ExitCode::SUCCESS)
            }
            Some(Commands::Extract(extract)) => {
                extract.run(&config, catalog)?;
                Ok(ExitCode::SUCCESS)
            }
            Some(Commands::Latest(latest)) => {
                latest.run(&links)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let app = App::try_parse_from(["mifirm"]).unwrap();
        assert!(app.cmd.is_none());
        assert_eq!(app.verbose, 0);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let app = App::try_parse_from(["mifirm", "list", "-vv", "--output", "fw"]).unwrap();
        assert!(matches!(app.cmd, Some(Commands::List(_))));
        assert_eq!(app.verbose, 2);
        assert_eq!(app.output, Some(PathBuf::from("fw")));
    }

    #[test]
    fn extract_requires_a_device() {
        assert!(App::try_parse_from(["mifirm", "extract", "--apk", "a.apk"]).is_err());
        assert!(
            App::try_parse_from(["mifirm", "x", "--apk", "a.apk", "--device", "1", "--name", "Mi Band 2"])
                .is_err()
        );
        assert!(App::try_parse_from(["mifirm", "x", "--apk", "a.apk", "--name", "Mi Band 2"]).is_ok());
    }

    #[test]
    fn output_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mifirm.toml");
        std::fs::write(&path, "output_dir = \"from-file\"\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let app = App::try_parse_from(["mifirm", "--config", &path]).unwrap();
        assert_eq!(app.load_config().unwrap().output_dir, PathBuf::from("from-file"));

        let app = App::try_parse_from(["mifirm", "--config", &path, "-o", "cli"]).unwrap();
        assert_eq!(app.load_config().unwrap().output_dir, PathBuf::from("cli"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let app = App::try_parse_from(["mifirm", "--config", "/nonexistent/mifirm.toml"]).unwrap();
        assert!(app.load_config().is_err());
    }
}
