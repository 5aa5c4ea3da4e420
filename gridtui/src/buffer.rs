//! Double-buffered cell grid with diffing.

use crate::style::TextStyle;
use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: TextStyle,
    /// Occupied by the left half of a wide character; never written directly.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: TextStyle::default(),
            wide_continuation: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let index = self.index(x, y);
            self.cells[index] = cell;
        }
    }

    /// Fill every cell with a styled space.
    pub fn clear(&mut self, style: TextStyle) {
        let blank = Cell {
            ch: ' ',
            style,
            wide_continuation: false,
        };
        self.cells.fill(blank);
    }

    /// Paint `width` styled spaces starting at (x, y), clipped to the buffer.
    pub fn fill_row(&mut self, x: u16, y: u16, width: u16, style: TextStyle) {
        let blank = Cell {
            ch: ' ',
            style,
            wide_continuation: false,
        };
        for offset in 0..width {
            self.set(x + offset, y, blank);
        }
    }

    /// Write text at (x, y), clipped to the buffer. Wide characters occupy
    /// continuation cells. Returns the x position after the last cell.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: TextStyle) -> u16 {
        let mut cx = x;
        for ch in text.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if y >= self.height || cx + width > self.width {
                break;
            }
            self.set(
                cx,
                y,
                Cell {
                    ch,
                    style,
                    wide_continuation: false,
                },
            );
            for offset in 1..width {
                self.set(
                    cx + offset,
                    y,
                    Cell {
                        ch: ' ',
                        style,
                        wide_continuation: true,
                    },
                );
            }
            cx += width;
        }
        cx
    }

    /// Cells that differ from `other`, with their positions.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    /// The visible text of one row, trailing whitespace trimmed. Test helper.
    pub fn row_text(&self, y: u16) -> String {
        let text: String = (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.ch)
            .collect();
        text.trim_end().to_string()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
