//! FILENAME: core/render/src/error.rs

use table_engine::TableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Table already registered: {0}")]
    DuplicateTable(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}
