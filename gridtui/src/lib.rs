//! Terminal frontend for the grid engine: reactive state, a debounced
//! search input, the grid widget and the event-loop runtime.

pub mod buffer;
pub mod event;
pub mod geometry;
pub mod runtime;
pub mod state;
pub mod style;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod wakeup;
pub mod widgets;

pub use runtime::{App, Runtime, RuntimeError};

pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::event::{Event, Key, Position};
    pub use crate::geometry::Rect;
    pub use crate::runtime::{App, Runtime, RuntimeError};
    pub use crate::state::State;
    pub use crate::style::{Color, TextStyle};
    pub use crate::theme::Theme;
    pub use crate::wakeup::WakeupSender;
    pub use crate::widgets::{DebouncedInput, Grid};
}
