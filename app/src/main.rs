//! FILENAME: app/src/main.rs
//! PURPOSE: Command line entry point. Logs go to stderr, the document to
//!          stdout or the --output file.

use std::process::ExitCode;

use app_lib::cli::Cli;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = app_lib::logging::init_logging(cli.verbose) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match app_lib::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
