//! FILENAME: app/src/logging.rs
//! PURPOSE: Logging setup for the command line tool.
//! CONTEXT: Library crates log through the `log` facade; the subscriber
//!          installed here bridges those records and writes them to stderr
//!          so stdout stays reserved for the rendered document.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Filter used when RUST_LOG is not set, by number of `-v` flags.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. RUST_LOG takes precedence over `-v`.
pub fn init_logging(verbose: u8) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
