//! FILENAME: app/src/lib.rs
//! PURPOSE: Library side of the ratio table generator: loads game data and
//!          table parameters, builds the table catalog and writes the document.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tables;

use std::io::Write;

use gamedata::GameData;
use log::{debug, info};

pub use cli::Cli;
pub use config::{ItemCategory, TablesConfig};
pub use error::AppError;
pub use tables::{build_registry, table_ids};

/// Vanilla game data shipped with the binary.
pub const BUNDLED_GAME_DATA: &str = include_str!("../data/vanilla.json");

pub fn bundled_game_data() -> Result<GameData, AppError> {
    Ok(GameData::from_json_str(BUNDLED_GAME_DATA)?)
}

/// Loads `--data`, or the bundled data when no path was given.
pub fn load_game_data(cli: &Cli) -> Result<GameData, AppError> {
    match &cli.data {
        Some(path) => Ok(GameData::load(path)?),
        None => {
            debug!("Using bundled game data");
            bundled_game_data()
        }
    }
}

/// Loads `--config`, or the default parameters when no path was given.
pub fn load_config(cli: &Cli) -> Result<TablesConfig, AppError> {
    match &cli.config {
        Some(path) => {
            info!("Loading table config from {:?}", path);
            TablesConfig::load(path)
        }
        None => Ok(TablesConfig::default()),
    }
}

/// Renders the selected tables to a string.
pub fn generate(cli: &Cli) -> Result<String, AppError> {
    let data = load_game_data(cli)?;
    let config = load_config(cli)?;
    let registry = build_registry(&data, &config, &cli.tables)?;
    Ok(render::render_document(&registry, cli.format)?)
}

/// Runs one invocation of the command line tool.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    if cli.list {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for id in table_ids() {
            writeln!(out, "{}", id)?;
        }
        return Ok(());
    }

    let document = generate(cli)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &document)?;
            info!("Wrote {} to {:?}", cli.format, path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(document.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
