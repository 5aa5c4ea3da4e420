//! Interactive widgets: the debounced search input and the grid.

pub mod debounced_input;
pub mod grid;

pub use debounced_input::{DebouncedInput, DEFAULT_DEBOUNCE};
pub use grid::Grid;
