//! Width-aware truncation for labels.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncate a string to fit within `max_width` display columns.
///
/// Strings that fit are returned unchanged. Otherwise `tail` is appended
/// and the whole result, tail included, stays within `max_width`.
///
/// ```
/// use dropsel_widgets::runeutil::truncate;
///
/// assert_eq!(truncate("Lemon yellow", 8, "…"), "Lemon y…");
/// assert_eq!(truncate("Red", 8, "…"), "Red");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let tail_width = display_width(tail);
    let (budget, tail) = if tail_width > max_width {
        (max_width, "")
    } else {
        (max_width - tail_width, tail)
    };

    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > budget {
            break;
        }
        result.push(c);
        width += cw;
    }
    result.push_str(tail);
    result
}
