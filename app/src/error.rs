//! FILENAME: app/src/error.rs

use gamedata::GameDataError;
use render::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Game data error: {0}")]
    GameData(#[from] GameDataError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Unknown table '{0}' (use --list to see available tables)")]
    UnknownTable(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
