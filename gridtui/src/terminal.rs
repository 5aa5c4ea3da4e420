//! Terminal setup, teardown and diffed frame output.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::buffer::Buffer;
use crate::style::{Color, TextStyle};
use crate::text::char_width;

/// Raw-mode terminal with panic-safe cleanup and double-buffered output.
///
/// `frame()` hands out the back buffer; `flush()` diffs it against the
/// previous frame and writes only the changed cells.
pub struct TerminalGuard {
    stdout: Stdout,
    current: Buffer,
    previous: Buffer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the default panic output, or the
        // message is lost to the alternate screen.
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// The back buffer for the next frame. Recreates both buffers when the
    /// terminal was resized, forcing a full repaint.
    pub fn frame(&mut self) -> io::Result<&mut Buffer> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            queue!(self.stdout, Clear(ClearType::All))?;
        }
        Ok(&mut self.current)
    }

    /// Diff the back buffer against the previous frame and write the changes.
    pub fn flush(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_width: u16 = 1;
        let mut last_style: Option<TextStyle> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            // The wide character to the left already occupies this cell.
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x + last_width {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_style.map(|s| s.fg) != Some(cell.style.fg) {
                queue!(self.stdout, SetForegroundColor(ct_color(cell.style.fg)))?;
            }
            if last_style.map(|s| s.bg) != Some(cell.style.bg) {
                queue!(self.stdout, SetBackgroundColor(ct_color(cell.style.bg)))?;
            }
            let attrs_changed = last_style
                .map(|s| (s.bold, s.dim) != (cell.style.bold, cell.style.dim))
                .unwrap_or(true);
            if attrs_changed {
                queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
            }

            write!(self.stdout, "{}", cell.ch)?;

            last_x = x;
            last_y = y;
            last_width = (char_width(cell.ch) as u16).max(1);
            last_style = Some(cell.style);
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn ct_color(color: Color) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        cursor::Show,
        LeaveAlternateScreen
    )
}
