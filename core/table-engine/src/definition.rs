//! FILENAME: core/table-engine/src/definition.rs
//! Table Definition - What a table IS.
//!
//! A definition names its axes and the functions that turn axis values into
//! header labels and cell values. Axes are always ordered `Vec`s; the engine
//! enumerates them exactly as given and never sorts.
//!
//! Header functions default to the axis value's own `ToDisplayable` label.

use engine::{Displayable, ToDisplayable};

/// Identifier a table is registered and rendered under (e.g. "belt-throughput").
pub type TableId = String;

/// Error type a cell function may fail with. Lookup and arithmetic errors
/// from any crate convert into it through `?`.
pub type CellError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outcome of computing a single cell.
pub type CellResult = Result<Displayable, CellError>;

/// Turns an axis value into its header label.
pub type HeaderFn<'a, T> = Box<dyn Fn(&T) -> Displayable + 'a>;

/// Computes the cell at (row, col); also receives the zero-based row and column index.
pub type CellFn<'a, R, C> = Box<dyn Fn(&R, &C, usize, usize) -> CellResult + 'a>;

/// Computes the cell at (outer row, inner row, col) of a double-header table.
pub type DoubleCellFn<'a, R1, R2, C> = Box<dyn Fn(&R1, &R2, &C) -> CellResult + 'a>;

fn default_header<'a, T: ToDisplayable + 'a>() -> HeaderFn<'a, T> {
    Box::new(|value: &T| value.to_displayable())
}

// ============================================================================
// SINGLE ROW AXIS
// ============================================================================

/// A cross-product table with one row axis and one column axis.
pub struct TableDefinition<'a, R, C> {
    pub table: TableId,
    pub rows: Vec<R>,
    pub cols: Vec<C>,
    pub cell: CellFn<'a, R, C>,
    pub row_header: HeaderFn<'a, R>,
    pub col_header: HeaderFn<'a, C>,
    /// Top-left cell of the header row. Blank when unset.
    pub origin: Option<Displayable>,
}

impl<'a, R, C> TableDefinition<'a, R, C>
where
    R: ToDisplayable + 'a,
    C: ToDisplayable + 'a,
{
    pub fn new<F>(table: impl Into<TableId>, rows: Vec<R>, cols: Vec<C>, cell: F) -> Self
    where
        F: Fn(&R, &C, usize, usize) -> CellResult + 'a,
    {
        TableDefinition {
            table: table.into(),
            rows,
            cols,
            cell: Box::new(cell),
            row_header: default_header(),
            col_header: default_header(),
            origin: None,
        }
    }
}

impl<'a, R, C> TableDefinition<'a, R, C> {
    /// Builds a definition whose axis values have no default label.
    pub fn with_headers<F, RH, CH>(
        table: impl Into<TableId>,
        rows: Vec<R>,
        cols: Vec<C>,
        row_header: RH,
        col_header: CH,
        cell: F,
    ) -> Self
    where
        F: Fn(&R, &C, usize, usize) -> CellResult + 'a,
        RH: Fn(&R) -> Displayable + 'a,
        CH: Fn(&C) -> Displayable + 'a,
    {
        TableDefinition {
            table: table.into(),
            rows,
            cols,
            cell: Box::new(cell),
            row_header: Box::new(row_header),
            col_header: Box::new(col_header),
            origin: None,
        }
    }

    pub fn row_header(mut self, header: impl Fn(&R) -> Displayable + 'a) -> Self {
        self.row_header = Box::new(header);
        self
    }

    pub fn col_header(mut self, header: impl Fn(&C) -> Displayable + 'a) -> Self {
        self.col_header = Box::new(header);
        self
    }

    pub fn origin(mut self, origin: impl Into<Displayable>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

// ============================================================================
// DOUBLE ROW AXIS
// ============================================================================

/// A table whose rows are the cross-product of two axes (`rows1` outer,
/// `rows2` inner), each contributing its own header column.
pub struct DoubleHeaderDefinition<'a, R1, R2, C> {
    pub table: TableId,
    pub rows1: Vec<R1>,
    pub rows2: Vec<R2>,
    pub cols: Vec<C>,
    pub cell: DoubleCellFn<'a, R1, R2, C>,
    pub row1_header: HeaderFn<'a, R1>,
    pub row2_header: HeaderFn<'a, R2>,
    pub col_header: HeaderFn<'a, C>,
    /// Header row cell above the `rows1` header column.
    pub origin1: Option<Displayable>,
    /// Header row cell above the `rows2` header column.
    pub origin2: Option<Displayable>,
}

impl<'a, R1, R2, C> DoubleHeaderDefinition<'a, R1, R2, C>
where
    R1: ToDisplayable + 'a,
    R2: ToDisplayable + 'a,
    C: ToDisplayable + 'a,
{
    pub fn new<F>(
        table: impl Into<TableId>,
        rows1: Vec<R1>,
        rows2: Vec<R2>,
        cols: Vec<C>,
        cell: F,
    ) -> Self
    where
        F: Fn(&R1, &R2, &C) -> CellResult + 'a,
    {
        DoubleHeaderDefinition {
            table: table.into(),
            rows1,
            rows2,
            cols,
            cell: Box::new(cell),
            row1_header: default_header(),
            row2_header: default_header(),
            col_header: default_header(),
            origin1: None,
            origin2: None,
        }
    }
}

impl<'a, R1, R2, C> DoubleHeaderDefinition<'a, R1, R2, C> {
    pub fn row1_header(mut self, header: impl Fn(&R1) -> Displayable + 'a) -> Self {
        self.row1_header = Box::new(header);
        self
    }

    pub fn row2_header(mut self, header: impl Fn(&R2) -> Displayable + 'a) -> Self {
        self.row2_header = Box::new(header);
        self
    }

    pub fn col_header(mut self, header: impl Fn(&C) -> Displayable + 'a) -> Self {
        self.col_header = Box::new(header);
        self
    }

    pub fn origins(mut self, origin1: impl Into<Displayable>, origin2: impl Into<Displayable>) -> Self {
        self.origin1 = Some(origin1.into());
        self.origin2 = Some(origin2.into());
        self
    }
}

// ============================================================================
// STATIC TABLE
// ============================================================================

/// A literal grid passed through as-is. The first `header_rows` rows are
/// headers (one by default).
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDefinition {
    pub table: TableId,
    pub rows: Vec<Vec<Displayable>>,
    pub header_rows: usize,
}

impl StaticDefinition {
    /// Normalizes bare numbers and strings into display values.
    pub fn new<I, Row, V>(table: impl Into<TableId>, rows: I) -> Self
    where
        I: IntoIterator<Item = Row>,
        Row: IntoIterator<Item = V>,
        V: Into<Displayable>,
    {
        StaticDefinition {
            table: table.into(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            header_rows: 1,
        }
    }

    pub fn header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }
}

/// Builds one literal table row from mixed values:
/// `row![item("coal"), 40, "Chance"]`.
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::engine_crate::Displayable::from($value)),*]
    };
}
