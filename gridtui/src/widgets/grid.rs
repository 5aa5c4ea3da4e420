//! The grid widget: column headers, a page of rows, pagination controls.
//!
//! The widget owns only view state (filter, sorting, pagination); row
//! derivation is delegated to the `gridmodel` engine and cached per state
//! version. Data and columns are fixed for the widget's lifetime and rows
//! are read in place, never copied.

use std::sync::{Arc, RwLock};

use gridmodel::{ColumnDef, RowWindow, SortDirection, ViewState, derive};
use log::debug;

use crate::buffer::Buffer;
use crate::event::{Key, Position};
use crate::geometry::Rect;
use crate::state::State;
use crate::style::TextStyle;
use crate::text;
use crate::theme::Theme;
use crate::wakeup::WakeupSender;

/// What a mouse click can land on.
#[derive(Clone, Debug)]
enum HitTarget {
    Header(String),
    First,
    Previous,
    Next,
    Last,
}

#[derive(Debug, Default)]
struct WindowCache {
    version: Option<u64>,
    window: RowWindow,
}

/// A paged, sortable, globally filterable grid over externally-owned rows.
///
/// Cheap to clone; clones share state, which is how the search input's
/// `on_change` callback reaches the grid's filter slot.
pub struct Grid<R> {
    data: Arc<Vec<R>>,
    columns: Arc<Vec<ColumnDef<R>>>,
    view: State<ViewState>,
    cache: Arc<RwLock<WindowCache>>,
    hits: Arc<RwLock<Vec<(HitTarget, Rect)>>>,
}

impl<R> Clone for Grid<R> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            columns: Arc::clone(&self.columns),
            view: self.view.clone(),
            cache: Arc::clone(&self.cache),
            hits: Arc::clone(&self.hits),
        }
    }
}

impl<R: Send + Sync + 'static> Grid<R> {
    pub fn new(data: Vec<R>, columns: Vec<ColumnDef<R>>) -> Self {
        Self {
            data: Arc::new(data),
            columns: Arc::new(columns),
            view: State::default(),
            cache: Arc::new(RwLock::new(WindowCache::default())),
            hits: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Override the page size at construction.
    pub fn with_page_size(self, page_size: usize) -> Self {
        self.view
            .update(|view| view.pages = gridmodel::PageState::new(page_size));
        self
    }

    /// Install the runtime's wakeup sender so state changes re-render.
    pub fn install_wakeup(&self, sender: WakeupSender) {
        self.view.install_wakeup(sender);
    }

    // -------------------------------------------------------------------------
    // Derived rows
    // -------------------------------------------------------------------------

    /// The current row window, recomputed through the engine when the view
    /// state changed since the last call.
    pub fn window(&self) -> RowWindow {
        let version = self.view.version();

        if let Ok(cache) = self.cache.read()
            && cache.version == Some(version)
        {
            return cache.window.clone();
        }

        let window = self
            .view
            .with(|view| derive(&self.data, &self.columns, view));
        if let Ok(mut cache) = self.cache.write() {
            cache.version = Some(version);
            cache.window = window.clone();
        }
        window
    }

    pub fn total_count(&self) -> usize {
        self.data.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.window().filtered_count
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    /// Commit a new global filter. Called by the debounced input's
    /// `on_change`, or programmatically by the host.
    pub fn set_global_filter(&self, filter: impl Into<String>) {
        let filter = filter.into();
        debug!("global filter committed: {filter:?}");
        self.view.update(|view| view.filter = filter);
    }

    pub fn global_filter(&self) -> String {
        self.view.with(|view| view.filter.clone())
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Cycle the sort for one column: unsorted, ascending, descending,
    /// unsorted.
    pub fn toggle_sort(&self, column_id: &str) {
        self.view.update(|view| view.sorting.toggle(column_id));
    }

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.view.with(|view| view.sorting.direction_of(column_id))
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn first_page(&self) {
        self.view.update(|view| view.pages.first());
    }

    pub fn previous_page(&self) {
        let row_count = self.window().filtered_count;
        self.view.update(|view| view.pages.previous(row_count));
    }

    pub fn next_page(&self) {
        let row_count = self.window().filtered_count;
        self.view.update(|view| view.pages.next(row_count));
    }

    pub fn last_page(&self) {
        let row_count = self.window().filtered_count;
        self.view.update(|view| view.pages.last(row_count));
    }

    pub fn can_previous(&self) -> bool {
        self.window().can_previous()
    }

    pub fn can_next(&self) -> bool {
        self.window().can_next()
    }

    /// 1-based page label. An empty row set still reads "Page 1 of 1".
    pub fn page_label(&self) -> String {
        let window = self.window();
        format!(
            "Page {} of {}",
            window.page_index + 1,
            window.page_count.max(1)
        )
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Keyboard equivalents of the pagination and header controls.
    pub fn handle_key(&self, key: &Key) -> bool {
        match key {
            Key::Left => self.previous_page(),
            Key::Right => self.next_page(),
            Key::Home => self.first_page(),
            Key::End => self.last_page(),
            Key::Char(c @ '1'..='9') => {
                let index = (*c as usize) - ('1' as usize);
                let Some(column) = self.columns.get(index) else {
                    return false;
                };
                let id = column.id().to_string();
                self.toggle_sort(&id);
            }
            _ => return false,
        }
        true
    }

    /// Route a click through the rects recorded at render time. Disabled
    /// pagination controls swallow the click without navigating.
    pub fn handle_click(&self, position: Position) -> bool {
        let target = self
            .hits
            .read()
            .ok()
            .and_then(|hits| {
                hits.iter()
                    .find(|(_, rect)| rect.contains(position))
                    .map(|(target, _)| target.clone())
            });
        let Some(target) = target else {
            return false;
        };

        let window = self.window();
        match target {
            HitTarget::Header(id) => self.toggle_sort(&id),
            HitTarget::First => {
                if window.can_previous() {
                    self.first_page();
                }
            }
            HitTarget::Previous => {
                if window.can_previous() {
                    self.previous_page();
                }
            }
            HitTarget::Next => {
                if window.can_next() {
                    self.next_page();
                }
            }
            HitTarget::Last => {
                if window.can_next() {
                    self.last_page();
                }
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Draw header, body and pagination footer, recording hit rects.
    pub fn render(&self, buffer: &mut Buffer, area: Rect, theme: &Theme) {
        if area.width < 8 || area.height < 3 || self.columns.is_empty() {
            return;
        }

        let window = self.window();
        let widths = self.column_widths(area.width);
        let mut hits = Vec::new();

        self.render_header(buffer, area, theme, &widths, &mut hits);
        self.render_body(buffer, area, theme, &widths, &window);
        self.render_footer(buffer, area, theme, &window, &mut hits);

        if let Ok(mut stored) = self.hits.write() {
            *stored = hits;
        }
    }

    /// Equal flex shares, remainder to the last column.
    fn column_widths(&self, total: u16) -> Vec<u16> {
        let count = self.columns.len() as u16;
        let base = total / count;
        let mut widths = vec![base; count as usize];
        if let Some(last) = widths.last_mut() {
            *last += total % count;
        }
        widths
    }

    fn render_header(
        &self,
        buffer: &mut Buffer,
        area: Rect,
        theme: &Theme,
        widths: &[u16],
        hits: &mut Vec<(HitTarget, Rect)>,
    ) {
        let sorting = self.view.with(|view| view.sorting.clone());
        let style = TextStyle::new(theme.header, theme.background).bold();

        let mut x = area.x;
        for (column, &width) in self.columns.iter().zip(widths) {
            let mut label = column.header().to_string();
            if let Some(direction) = sorting.direction_of(column.id()) {
                label.push(' ');
                label.push_str(direction.indicator());
            }
            buffer.put_str(
                x,
                area.y,
                &text::pad_to_width(&label, width as usize),
                style,
            );
            hits.push((
                HitTarget::Header(column.id().to_string()),
                Rect::new(x, area.y, width, 1),
            ));
            x += width;
        }
    }

    fn render_body(
        &self,
        buffer: &mut Buffer,
        area: Rect,
        theme: &Theme,
        widths: &[u16],
        window: &RowWindow,
    ) {
        let body_y = area.y + 1;
        let body_height = area.height - 2;

        if window.filtered_count == 0 {
            let style = TextStyle::new(theme.text_muted, theme.background).dim();
            buffer.put_str(area.x + 1, body_y, "No rows match the filter.", style);
            return;
        }

        for (visual, &row_index) in window
            .page_rows
            .iter()
            .take(body_height as usize)
            .enumerate()
        {
            let y = body_y + visual as u16;
            let bg = if visual % 2 == 1 {
                theme.surface
            } else {
                theme.background
            };
            let style = TextStyle::new(theme.text, bg);

            buffer.fill_row(area.x, y, area.width, style);

            let row = &self.data[row_index];
            let mut x = area.x;
            for (column, &width) in self.columns.iter().zip(widths) {
                // One-cell gutter between columns.
                let cell_width = width.saturating_sub(1) as usize;
                let cell = column.value(row).render();
                buffer.put_str(x, y, &text::truncate_to_width(&cell, cell_width), style);
                x += width;
            }
        }
    }

    fn render_footer(
        &self,
        buffer: &mut Buffer,
        area: Rect,
        theme: &Theme,
        window: &RowWindow,
        hits: &mut Vec<(HitTarget, Rect)>,
    ) {
        let y = area.y + area.height - 1;
        let enabled = TextStyle::new(theme.accent, theme.background).bold();
        let disabled = TextStyle::new(theme.disabled, theme.background).dim();
        let label_style = TextStyle::new(theme.text, theme.background);

        let mut x = area.x;
        let controls: [(&str, HitTarget, bool); 2] = [
            ("«", HitTarget::First, window.can_previous()),
            ("‹", HitTarget::Previous, window.can_previous()),
        ];
        for (glyph, target, on) in controls {
            x = self.render_control(buffer, x, y, glyph, target, on, enabled, disabled, hits);
        }

        let label = format!(
            " Page {} of {} ",
            window.page_index + 1,
            window.page_count.max(1)
        );
        x = buffer.put_str(x, y, &label, label_style);

        let controls: [(&str, HitTarget, bool); 2] = [
            ("›", HitTarget::Next, window.can_next()),
            ("»", HitTarget::Last, window.can_next()),
        ];
        for (glyph, target, on) in controls {
            x = self.render_control(buffer, x, y, glyph, target, on, enabled, disabled, hits);
        }

        // Row counts, right-aligned.
        let counts = if window.filtered_count == self.data.len() {
            format!("{} rows", self.data.len())
        } else {
            format!("{} of {} rows", window.filtered_count, self.data.len())
        };
        let counts_width = text::display_width(&counts) as u16;
        if area.x + area.width > counts_width + 1 {
            let counts_x = area.x + area.width - counts_width - 1;
            if counts_x > x {
                buffer.put_str(
                    counts_x,
                    y,
                    &counts,
                    TextStyle::new(theme.text_muted, theme.background),
                );
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_control(
        &self,
        buffer: &mut Buffer,
        x: u16,
        y: u16,
        glyph: &str,
        target: HitTarget,
        on: bool,
        enabled: TextStyle,
        disabled: TextStyle,
        hits: &mut Vec<(HitTarget, Rect)>,
    ) -> u16 {
        let style = if on { enabled } else { disabled };
        let text = format!(" {glyph} ");
        let end = buffer.put_str(x, y, &text, style);
        hits.push((target, Rect::new(x, y, end - x, 1)));
        end
    }
}
