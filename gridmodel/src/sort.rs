//! Sort directives and the comparator pipeline.

use std::cmp::Ordering;

use crate::column::ColumnDef;

/// Direction of a column sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header glyph for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// A single (column, direction) directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSort {
    pub column_id: String,
    pub direction: SortDirection,
}

/// Ordered sequence of sort directives. Empty means original row order.
///
/// The sequence shape allows multi-column sorts and [`sort_rows`] honors
/// every entry in order, but [`SortState::toggle`] (the header-click path)
/// always replaces the whole sequence with a single directive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    entries: Vec<ColumnSort>,
}

impl SortState {
    pub fn entries(&self) -> &[ColumnSort] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direction currently applied to `column_id`, if any.
    pub fn direction_of(&self, column_id: &str) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|entry| entry.column_id == column_id)
            .map(|entry| entry.direction)
    }

    /// Cycle the sort for one column: unsorted, ascending, descending,
    /// unsorted. The new directive replaces the whole sequence.
    pub fn toggle(&mut self, column_id: &str) {
        let next = match self.direction_of(column_id) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };

        self.entries.clear();
        if let Some(direction) = next {
            self.entries.push(ColumnSort {
                column_id: column_id.to_string(),
                direction,
            });
        }
    }

    /// Drop every directive, restoring original row order.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Stable-sort `indices` by every directive in sequence order.
///
/// Later directives only break ties left by earlier ones. Directives naming
/// unknown column ids are skipped. An empty directive list leaves the order
/// untouched, and ties keep their original relative order.
pub fn sort_rows<R>(
    data: &[R],
    columns: &[ColumnDef<R>],
    sorting: &SortState,
    indices: &mut [usize],
) {
    if sorting.is_empty() {
        return;
    }

    let active: Vec<(&ColumnDef<R>, SortDirection)> = sorting
        .entries()
        .iter()
        .filter_map(|entry| {
            columns
                .iter()
                .find(|column| column.id() == entry.column_id)
                .map(|column| (column, entry.direction))
        })
        .collect();

    if active.is_empty() {
        return;
    }

    indices.sort_by(|&a, &b| {
        for (column, direction) in &active {
            let ord = direction.apply(column.value(&data[a]).compare(&column.value(&data[b])));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}
