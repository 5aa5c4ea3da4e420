//! Table-state engine: columns, filtering, sorting and pagination.
//!
//! This crate owns no UI and does no I/O. A frontend hands [`derive`] its
//! rows, its column definitions and a [`ViewState`]; it gets back a
//! [`RowWindow`] with the page of row indices to display and the derived
//! counts its controls need. The function is pure and idempotent, so callers
//! recompute whenever data, columns or state change.

pub mod column;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod table;

pub use column::{Accessor, CellValue, ColumnDef};
pub use paginate::{PageState, DEFAULT_PAGE_SIZE};
pub use sort::{ColumnSort, SortDirection, SortState};
pub use table::{derive, RowWindow, ViewState};
