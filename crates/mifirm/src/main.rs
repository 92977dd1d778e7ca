mod cli;
mod config;
mod logging;
mod term;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::app::App;

fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.verbose);

    match app.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
