//! The roster browser: a debounced search box over a paged people grid.

use gridtui::buffer::Buffer;
use gridtui::event::{Event, Key};
use gridtui::geometry::Rect;
use gridtui::runtime::App;
use gridtui::style::TextStyle;
use gridtui::theme::Theme;
use gridtui::wakeup::WakeupSender;
use gridtui::widgets::{DebouncedInput, Grid};

use crate::columns::columns;
use crate::data::{Person, load_people};

const PAGE_SIZE: usize = 10;

/// Which widget keystrokes route to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Search,
    Grid,
}

pub struct RosterApp {
    grid: Grid<Person>,
    search: DebouncedInput,
    focus: Focus,
}

impl Default for RosterApp {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterApp {
    pub fn new() -> Self {
        let grid = Grid::new(load_people(), columns()).with_page_size(PAGE_SIZE);
        let search = DebouncedInput::with_placeholder("Search all columns...");

        // The debounced commit is the only writer of the grid's filter slot
        // while the user types; the buffer in the input never renders rows.
        let filter_slot = grid.clone();
        search.set_on_change(move |value: &str| filter_slot.set_global_filter(value));

        Self {
            grid,
            search,
            focus: Focus::Grid,
        }
    }

    /// Reset the filter programmatically: grid state and search box together.
    fn clear_filter(&self) {
        self.grid.set_global_filter("");
        self.search.sync_value("");
    }

    fn on_search_key(&mut self, key: &Key) {
        match key {
            Key::Escape | Key::Enter => self.focus = Focus::Grid,
            Key::Char(c) => self.search.insert_char(*c),
            Key::Backspace => self.search.delete_char_before(),
            Key::Delete => self.search.delete_char_at(),
            Key::Left => self.search.cursor_left(),
            Key::Right => self.search.cursor_right(),
            Key::Home => self.search.cursor_home(),
            Key::End => self.search.cursor_end(),
            _ => {}
        }
    }

    fn on_grid_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Char('q') => return false,
            Key::Char('/') => self.focus = Focus::Search,
            Key::Char('c') => self.clear_filter(),
            _ => {
                self.grid.handle_key(key);
            }
        }
        true
    }
}

impl App for RosterApp {
    fn install_wakeup(&mut self, sender: WakeupSender) {
        self.grid.install_wakeup(sender.clone());
        self.search.install_wakeup(sender);
    }

    fn on_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) => match self.focus {
                Focus::Search => {
                    self.on_search_key(key);
                    true
                }
                Focus::Grid => self.on_grid_key(key),
            },
            Event::Click(position) => {
                if self.search.hit_test(*position) {
                    self.focus = Focus::Search;
                } else if self.grid.handle_click(*position) {
                    self.focus = Focus::Grid;
                }
                true
            }
            _ => true,
        }
    }

    fn render(&self, buffer: &mut Buffer, theme: &Theme) {
        let width = buffer.width();
        let height = buffer.height();
        if width < 20 || height < 12 {
            return;
        }

        let title = TextStyle::new(theme.accent, theme.background).bold();
        let muted = TextStyle::new(theme.text_muted, theme.background);

        buffer.put_str(1, 0, "People Roster", title);
        buffer.put_str(
            16,
            0,
            &format!("{} people", self.grid.total_count()),
            muted,
        );

        // Search box, right-aligned like the original layout, capped width.
        let search_width = (width / 2).clamp(16, 40).min(width - 2);
        let search_area = Rect::new(width - search_width - 1, 1, search_width, 3);
        self.search
            .render(buffer, search_area, theme, self.focus == Focus::Search);

        // The grid takes everything between search box and help line.
        let grid_area = Rect::new(1, 4, width - 2, height - 6);
        self.grid.render(buffer, grid_area, theme);

        let help = match self.focus {
            Focus::Search => "Esc done · type to filter (committed after a pause)",
            Focus::Grid => "q quit · / search · c clear · ←/→ page · Home/End ends · 1-4 sort · click headers",
        };
        buffer.put_str(1, height - 1, help, muted);
    }
}
