//! The row-derivation pipeline: rows in, view state in, row window out.

use log::trace;

use crate::column::ColumnDef;
use crate::filter;
use crate::paginate::PageState;
use crate::sort::{self, SortState};

/// Everything a grid view owns: the committed filter text, the sort
/// directives and the pagination state. Rows and columns live with the
/// caller and are read-only to the engine.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub filter: String,
    pub sorting: SortState,
    pub pages: PageState,
}

/// Output of [`derive`]: the page of row indices to render, plus the derived
/// counts a frontend's controls need.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowWindow {
    /// Indices into the caller's data, in render order.
    pub page_rows: Vec<usize>,
    /// Rows surviving the filter, before pagination.
    pub filtered_count: usize,
    /// Pages needed for the filtered set.
    pub page_count: usize,
    /// Effective page index after clamping.
    pub page_index: usize,
}

impl RowWindow {
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

/// Recompute the visible window: filter, then stable sort, then page slice.
///
/// Pure and idempotent: callers run it whenever data, columns or state
/// change. The stored page index is clamped into the derived page count, so
/// a shrinking filter lands on the last valid page instead of a phantom one.
pub fn derive<R>(data: &[R], columns: &[ColumnDef<R>], view: &ViewState) -> RowWindow {
    let mut indices = filter::filter_rows(data, columns, &view.filter);
    sort::sort_rows(data, columns, &view.sorting, &mut indices);

    let filtered_count = indices.len();
    let page_count = view.pages.page_count(filtered_count);
    let page_index = view.pages.clamped_index(filtered_count);
    let page_rows = indices[view.pages.range(filtered_count)].to_vec();

    trace!(
        "derived window: {} of {} rows match {:?}, page {} of {}",
        page_rows.len(),
        data.len(),
        view.filter,
        page_index + 1,
        page_count
    );

    RowWindow {
        page_rows,
        filtered_count,
        page_count,
        page_index,
    }
}
