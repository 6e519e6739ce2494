//! FILENAME: core/table-engine/src/error.rs

use thiserror::Error;

use crate::definition::{CellError, TableId};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("table '{table}': row {row} has {actual} cells, expected {expected}")]
    Shape {
        table: TableId,
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell function failed; `row` and `col` index the body, not the headers.
    #[error("table '{table}': cell ({row}, {col}) failed: {source}")]
    Cell {
        table: TableId,
        row: usize,
        col: usize,
        #[source]
        source: CellError,
    },
}

impl TableError {
    pub fn table(&self) -> &str {
        match self {
            TableError::Shape { table, .. } | TableError::Cell { table, .. } => table,
        }
    }
}
