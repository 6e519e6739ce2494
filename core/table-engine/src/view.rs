//! FILENAME: core/table-engine/src/view.rs
//! Table View - Renderable output of a table calculation.
//!
//! A view is a rectangular grid of display values. The leading
//! `header_rows` rows and `header_cols` columns hold labels; everything
//! else is the body produced by the cell function.

use engine::Displayable;
use serde::{Deserialize, Serialize};

use crate::definition::TableId;
use crate::error::TableError;

/// Whether a cell is a label or a computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableCellType {
    /// Top-left area where the header row meets the header columns.
    Corner,
    RowHeader,
    ColumnHeader,
    Data,
}

/// The rectangular result of a table calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub table: TableId,
    /// Number of leading rows that are column headers.
    pub header_rows: usize,
    /// Number of leading columns that are row headers.
    pub header_cols: usize,
    pub row_count: usize,
    pub col_count: usize,
    pub cells: Vec<Vec<Displayable>>,
}

impl TableView {
    /// Wraps a finished grid, rejecting ragged input.
    pub fn new(
        table: impl Into<TableId>,
        header_rows: usize,
        header_cols: usize,
        cells: Vec<Vec<Displayable>>,
    ) -> Result<Self, TableError> {
        let table = table.into();
        let col_count = cells.first().map(Vec::len).unwrap_or(0);

        if let Some((row, actual)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != col_count)
        {
            return Err(TableError::Shape {
                table,
                row,
                expected: col_count,
                actual,
            });
        }

        Ok(TableView {
            table,
            header_rows: header_rows.min(cells.len()),
            header_cols: header_cols.min(col_count),
            row_count: cells.len(),
            col_count,
            cells,
        })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Displayable> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn cell_type(&self, row: usize, col: usize) -> TableCellType {
        match (row < self.header_rows, col < self.header_cols) {
            (true, true) => TableCellType::Corner,
            (true, false) => TableCellType::ColumnHeader,
            (false, true) => TableCellType::RowHeader,
            (false, false) => TableCellType::Data,
        }
    }

    /// Rows below the header row(s), including their header columns.
    pub fn body_rows(&self) -> &[Vec<Displayable>] {
        &self.cells[self.header_rows..]
    }

    /// Computed values only, without any header cells.
    pub fn body(&self) -> Vec<&[Displayable]> {
        self.body_rows()
            .iter()
            .map(|row| &row[self.header_cols..])
            .collect()
    }

    pub fn header_row(&self) -> Option<&[Displayable]> {
        if self.header_rows > 0 {
            self.cells.first().map(Vec::as_slice)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
