//! Colors and cell styling.

/// 24-bit terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Resolved styling for one cell: colors plus the attributes the widgets use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(Color::rgb(255, 255, 255), Color::rgb(0, 0, 0))
    }
}

impl TextStyle {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Swap foreground and background, used for the cursor cell.
    pub fn inverted(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
            ..self
        }
    }
}
