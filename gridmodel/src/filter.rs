//! Global text filtering over every column of a row.

use crate::column::ColumnDef;

/// Check whether any column's rendered text contains `query`,
/// case-insensitively. An empty query matches every row.
pub fn row_matches<R>(row: &R, columns: &[ColumnDef<R>], query: &str) -> bool {
    query.is_empty() || matches_needle(row, columns, &query.to_lowercase())
}

/// Indices of the rows in `data` that match `query`, in original order.
pub fn filter_rows<R>(data: &[R], columns: &[ColumnDef<R>], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..data.len()).collect();
    }

    let needle = query.to_lowercase();
    data.iter()
        .enumerate()
        .filter(|(_, row)| matches_needle(*row, columns, &needle))
        .map(|(index, _)| index)
        .collect()
}

fn matches_needle<R>(row: &R, columns: &[ColumnDef<R>], needle: &str) -> bool {
    columns
        .iter()
        .any(|column| column.value(row).render().to_lowercase().contains(needle))
}
