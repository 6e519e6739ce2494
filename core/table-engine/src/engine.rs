//! FILENAME: core/table-engine/src/engine.rs
//! Table Engine - Turns a definition into a TableView.
//!
//! Algorithm:
//! 1. Emit the header row: origin cell(s) followed by one label per column
//! 2. For each row (outer axis first for double-header tables), emit the
//!    row label(s) and then one cell per column, in definition order
//! 3. Validate the grid is rectangular and wrap it in a TableView
//!
//! The cell function is called exactly once per (row, col) pair. The first
//! failing cell aborts the calculation; no partial view is returned.

use engine::Displayable;
use log::debug;

use crate::definition::{DoubleHeaderDefinition, StaticDefinition, TableDefinition};
use crate::error::TableError;
use crate::view::TableView;

// ============================================================================
// SINGLE ROW AXIS
// ============================================================================

/// Calculates a table with one row-header column and one header row.
/// Result is (1 + rows) x (1 + cols).
pub fn calculate_table<R, C>(definition: &TableDefinition<'_, R, C>) -> Result<TableView, TableError> {
    let col_count = definition.cols.len();
    let mut cells: Vec<Vec<Displayable>> = Vec::with_capacity(definition.rows.len() + 1);

    let mut header = Vec::with_capacity(col_count + 1);
    header.push(definition.origin.clone().unwrap_or_default());
    header.extend(definition.cols.iter().map(|c| (definition.col_header)(c)));
    cells.push(header);

    for (ri, row) in definition.rows.iter().enumerate() {
        let mut line = Vec::with_capacity(col_count + 1);
        line.push((definition.row_header)(row));

        for (ci, col) in definition.cols.iter().enumerate() {
            let value = (definition.cell)(row, col, ri, ci).map_err(|source| TableError::Cell {
                table: definition.table.clone(),
                row: ri,
                col: ci,
                source,
            })?;
            line.push(value);
        }

        cells.push(line);
    }

    debug!(
        "Calculated table '{}': {} rows x {} cols",
        definition.table,
        definition.rows.len(),
        col_count
    );

    TableView::new(definition.table.clone(), 1, 1, cells)
}

// ============================================================================
// DOUBLE ROW AXIS
// ============================================================================

/// Calculates a table whose rows are `rows1 x rows2` (rows1 outer).
/// Result is (1 + rows1 * rows2) x (2 + cols). The outer header is repeated
/// on every row of its block.
pub fn calculate_double_header_table<R1, R2, C>(
    definition: &DoubleHeaderDefinition<'_, R1, R2, C>,
) -> Result<TableView, TableError> {
    let col_count = definition.cols.len();
    let row_count = definition.rows1.len() * definition.rows2.len();
    let mut cells: Vec<Vec<Displayable>> = Vec::with_capacity(row_count + 1);

    let mut header = Vec::with_capacity(col_count + 2);
    header.push(definition.origin1.clone().unwrap_or_default());
    header.push(definition.origin2.clone().unwrap_or_default());
    header.extend(definition.cols.iter().map(|c| (definition.col_header)(c)));
    cells.push(header);

    let mut ri = 0;
    for row1 in &definition.rows1 {
        let label1 = (definition.row1_header)(row1);

        for row2 in &definition.rows2 {
            let mut line = Vec::with_capacity(col_count + 2);
            line.push(label1.clone());
            line.push((definition.row2_header)(row2));

            for (ci, col) in definition.cols.iter().enumerate() {
                let value = (definition.cell)(row1, row2, col).map_err(|source| TableError::Cell {
                    table: definition.table.clone(),
                    row: ri,
                    col: ci,
                    source,
                })?;
                line.push(value);
            }

            cells.push(line);
            ri += 1;
        }
    }

    debug!(
        "Calculated double-header table '{}': {} x {} rows x {} cols",
        definition.table,
        definition.rows1.len(),
        definition.rows2.len(),
        col_count
    );

    TableView::new(definition.table.clone(), 1, 2, cells)
}

// ============================================================================
// STATIC TABLE
// ============================================================================

/// Passes a literal grid through after checking it is rectangular.
pub fn calculate_static_table(definition: &StaticDefinition) -> Result<TableView, TableError> {
    debug!(
        "Static table '{}': {} rows",
        definition.table,
        definition.rows.len()
    );
    TableView::new(
        definition.table.clone(),
        definition.header_rows,
        0,
        definition.rows.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::CellResult;
    use engine::{checked, fixed, integer, item, text, ToDisplayable};
    use std::cell::Cell;

    fn numbers(view: &TableView) -> Vec<Vec<f64>> {
        view.body()
            .iter()
            .map(|row| row.iter().filter_map(Displayable::as_number).collect())
            .collect()
    }

    #[test]
    fn test_basic_division_table() {
        let definition = TableDefinition::new("div", vec![10.0, 20.0], vec![1.0, 2.0], |r, c, _, _| {
            Ok((r / c).to_displayable())
        });

        let view = calculate_table(&definition).unwrap();

        assert_eq!(numbers(&view), vec![vec![10.0, 5.0], vec![20.0, 10.0]]);
        assert_eq!(view.row_count, 3);
        assert_eq!(view.col_count, 3);
        assert!(view.cells[0][0].is_blank());
        assert_eq!(view.cells[1][0].to_string(), "10");
    }

    #[test]
    fn test_cell_receives_indices_and_runs_once_per_pair() {
        let calls = Cell::new(0);
        let definition = TableDefinition::new(
            "belt-throughput",
            vec![15.0, 30.0, 45.0],
            vec!["One Lane", "Both Lanes"],
            |throughput: &f64, _: &&str, _, ci| {
                calls.set(calls.get() + 1);
                Ok(fixed(throughput / (2 - ci) as f64))
            },
        )
        .origin(text("Belt"));

        let view = calculate_table(&definition).unwrap();

        assert_eq!(calls.get(), 6);
        assert_eq!(view.cells[0][0], text("Belt"));
        assert_eq!(view.cells[0][1], text("One Lane"));
        assert_eq!(view.cells[1][1].to_string(), "7.50");
        assert_eq!(view.cells[1][2].to_string(), "15.00");
    }

    #[test]
    fn test_custom_headers() {
        let definition = TableDefinition::new("storage", vec![Some(1u32), None], vec![16u32, 32], |row, size, _, _| {
            Ok(match row {
                Some(n) => integer((n * size * 100) as f64),
                None => integer(*size as f64),
            })
        })
        .row_header(|row| match row {
            Some(n) => n.to_displayable(),
            None => text("(slots)"),
        })
        .col_header(|size| item(format!("box-{}", size)))
        .origin("#");

        let view = calculate_table(&definition).unwrap();

        assert_eq!(view.cells[0][1], item("box-16"));
        assert_eq!(view.cells[2][0], text("(slots)"));
        assert_eq!(numbers(&view), vec![vec![1600.0, 3200.0], vec![16.0, 32.0]]);
    }

    #[test]
    fn test_cell_error_propagates() {
        let definition = TableDefinition::new("bad", vec![1.0, 0.0], vec![1.0], |r: &f64, c: &f64, _, _| {
            let value = checked(c / r)?;
            Ok(fixed(value))
        });

        let err = calculate_table(&definition).unwrap_err();
        match err {
            TableError::Cell { table, row, col, .. } => {
                assert_eq!(table, "bad");
                assert_eq!(row, 1);
                assert_eq!(col, 0);
            }
            other => panic!("Expected cell error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_axes() {
        let definition = TableDefinition::new("none", Vec::<u32>::new(), vec![1u32, 2], |_, _, _, _| {
            Ok(integer(0.0))
        });
        let view = calculate_table(&definition).unwrap();
        assert_eq!(view.row_count, 1);
        assert!(view.body().is_empty());
    }

    #[test]
    fn test_double_header_ordering() {
        let seen = std::cell::RefCell::new(Vec::new());
        let definition = DoubleHeaderDefinition::new(
            "crafting",
            vec![0.5, 1.0],
            vec!["yellow", "red", "blue"],
            vec![0.5, 0.75],
            |energy: &f64, belt: &&str, speed: &f64| -> CellResult {
                seen.borrow_mut().push((*energy, belt.to_string()));
                Ok(fixed(energy / speed))
            },
        )
        .origins("Recipe / Speed", "Belt");

        let view = calculate_double_header_table(&definition).unwrap();

        assert_eq!(view.row_count, 1 + 6);
        assert_eq!(view.col_count, 2 + 2);
        assert_eq!(view.cells[0][0], text("Recipe / Speed"));
        assert_eq!(view.cells[0][1], text("Belt"));
        // Outer label repeats on every row of its block
        for row in 1..=3 {
            assert_eq!(view.cells[row][0].to_string(), "0.5");
        }
        assert_eq!(view.cells[4][0].to_string(), "1");
        assert_eq!(view.cells[2][1], text("red"));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2 * 3 * 2);
        assert_eq!(seen[0], (0.5, "yellow".to_string()));
        assert_eq!(seen[2], (0.5, "red".to_string()));
        assert_eq!(seen[6], (1.0, "yellow".to_string()));
    }

    #[test]
    fn test_static_table_normalizes_and_validates() {
        let definition = StaticDefinition::new(
            "steam",
            vec![
                crate::row![item("offshore-pump"), item("boiler"), "Power"],
                crate::row![1, 20, 31.2],
            ],
        );
        let view = calculate_static_table(&definition).unwrap();
        assert_eq!(view.header_rows, 1);
        assert_eq!(view.header_cols, 0);
        assert_eq!(view.cells[1][1].as_number(), Some(20.0));
        assert_eq!(view.cells[0][2], text("Power"));

        let ragged = StaticDefinition::new("ragged", vec![vec!["a", "b"], vec!["c"]]);
        assert!(matches!(
            calculate_static_table(&ragged),
            Err(TableError::Shape { row: 1, .. })
        ));
    }
}
