//! Color theme for the grid frontend.

use crate::style::Color;

/// Flat named-color palette for everything the widgets draw.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Zebra-stripe row background.
    pub surface: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Focused input border.
    pub border_focus: Color,
    /// Normal cell text.
    pub text: Color,
    /// Secondary text: placeholders, status, help.
    pub text_muted: Color,
    /// Enabled pagination controls and highlights.
    pub accent: Color,
    /// Column header text.
    pub header: Color,
    /// Disabled pagination controls.
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Dark blue with a teal accent.
        Self {
            background: Color::rgb(26, 26, 46),
            surface: Color::rgb(40, 40, 70),
            border: Color::rgb(69, 71, 90),
            border_focus: Color::rgb(78, 204, 163),
            text: Color::rgb(232, 232, 232),
            text_muted: Color::rgb(127, 140, 141),
            accent: Color::rgb(78, 204, 163),
            header: Color::rgb(100, 150, 255),
            disabled: Color::rgb(88, 91, 112),
        }
    }
}
