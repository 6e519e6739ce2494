//! FILENAME: core/table-engine/src/lib.rs
//! Table (cross-product grid) subsystem for the ratio tables.
//!
//! This crate turns ordered record sequences into rectangular grids of
//! display values. It depends on `engine` for the `Displayable` cell type.
//!
//! Layers:
//! - `grouping`: Stable first-seen partition of records by key
//! - `definition`: What a table IS (axes, header and cell functions)
//! - `view`: Renderable output (WHAT we display)
//! - `engine`: Calculation (HOW we build the grid)

pub mod definition;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod view;

// Used by the `row!` macro.
#[doc(hidden)]
pub use ::engine as engine_crate;

pub use definition::*;
pub use crate::engine::{calculate_double_header_table, calculate_static_table, calculate_table};
pub use error::TableError;
pub use grouping::{group_by, group_by_hashed, FloatKey, Group};
pub use view::{TableCellType, TableView};
