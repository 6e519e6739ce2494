//! FILENAME: core/gamedata/src/error.rs

use thiserror::Error;

use crate::records::RecordKind;

#[derive(Error, Debug)]
pub enum GameDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {kind} '{name}': {reason}")]
    Invalid {
        kind: RecordKind,
        name: String,
        reason: String,
    },

    #[error("Duplicate {kind}: {name}")]
    Duplicate { kind: RecordKind, name: String },

    #[error("{kind} '{name}' refers to unknown item")]
    UnknownItem { kind: RecordKind, name: String },

    #[error("{kind} not found: {name}")]
    NotFound { kind: RecordKind, name: String },
}
