//! Column definitions and the cell values their accessors produce.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// The value a column accessor extracts from a row.
///
/// Cell values are what the engine filters and sorts on, and what a frontend
/// renders. Text compares case-insensitively; numeric kinds compare
/// numerically, mixing integers and floats.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl CellValue {
    /// Shorthand for a text value.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// The rendered form of this value, as shown in a cell.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Total ordering used by the sort pipeline.
    ///
    /// Mismatched kinds (other than Int/Float) fall back to comparing
    /// rendered text, so a column that yields inconsistent kinds still sorts
    /// deterministically.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Text(a), Text(b)) => cmp_ignore_case(a, b),
            _ => cmp_ignore_case(&self.render(), &other.render()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Shared accessor function: row in, cell value out.
pub type Accessor<R> = Arc<dyn Fn(&R) -> CellValue + Send + Sync>;

/// A column definition: stable id, header label and a value accessor.
///
/// Definitions are set once per grid instance and carry no mutable state.
/// The engine never checks that an accessor is meaningful for a given row
/// type; a nonsense accessor simply produces nonsense cells.
pub struct ColumnDef<R> {
    id: String,
    header: String,
    accessor: Accessor<R>,
}

impl<R> ColumnDef<R> {
    /// Create a column with the given id, header label and accessor.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Arc::new(accessor),
        }
    }

    /// Stable identifier, referenced by sort directives.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header label displayed at the top of the column.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Extract this column's value from a row.
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}
