//! Text measurement for terminal cells.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate to at most `max_width` cells, ending in an ellipsis when
/// anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1; // room for the ellipsis
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Truncate, then right-pad with spaces to exactly `width` cells.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&result));
    result.extend(std::iter::repeat_n(' ', pad));
    result
}
