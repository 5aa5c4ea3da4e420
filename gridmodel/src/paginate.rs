//! Page windowing: stored index and size, derived boundaries.

use std::ops::Range;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination state: current page index and effective page size.
///
/// Only the index and the size are stored; page count and boundary flags are
/// derived from whatever row count is at hand. The index is 0-based;
/// frontends display it 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    page_index: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// Create a page state on the first page. A zero `page_size` is clamped
    /// to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `row_count` rows. Zero rows means zero
    /// pages.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size)
    }

    /// The stored index clamped into the valid range for `row_count`.
    ///
    /// A filter that shrinks the row set must never strand the view past the
    /// last page, so every derived value goes through this.
    pub fn clamped_index(&self, row_count: usize) -> usize {
        self.page_index
            .min(self.page_count(row_count).saturating_sub(1))
    }

    pub fn can_previous(&self, row_count: usize) -> bool {
        self.clamped_index(row_count) > 0
    }

    pub fn can_next(&self, row_count: usize) -> bool {
        self.clamped_index(row_count) + 1 < self.page_count(row_count)
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn previous(&mut self, row_count: usize) {
        self.page_index = self.clamped_index(row_count).saturating_sub(1);
    }

    pub fn next(&mut self, row_count: usize) {
        let clamped = self.clamped_index(row_count);
        self.page_index = if clamped + 1 < self.page_count(row_count) {
            clamped + 1
        } else {
            clamped
        };
    }

    pub fn last(&mut self, row_count: usize) {
        self.page_index = self.page_count(row_count).saturating_sub(1);
    }

    /// Index range of the current page within `row_count` rows.
    pub fn range(&self, row_count: usize) -> Range<usize> {
        let start = (self.clamped_index(row_count) * self.page_size).min(row_count);
        let end = (start + self.page_size).min(row_count);
        start..end
    }
}
