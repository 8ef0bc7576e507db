//! Placement of the option list and hit testing.
//!
//! Everything here is a pure function of rectangles, so positioning can be
//! checked without a terminal.

use ratatui::layout::{Position, Rect};

/// Narrowest the option list is drawn, in columns.
pub const MIN_LIST_WIDTH: u16 = 15;

/// Vertical offset of the list from the top of the trigger: exactly the
/// trigger's rendered height, so the list sits flush underneath it.
pub fn list_offset(trigger: Rect) -> u16 {
    trigger.height
}

/// The rectangle the list occupies, clamped to `bounds`.
///
/// `rows` is the full height the list wants (entries plus chrome). The list
/// starts `offset` rows below the top of `trigger`, shares its left edge,
/// and is at least [`MIN_LIST_WIDTH`] wide when space allows.
pub fn list_area(trigger: Rect, offset: u16, rows: u16, bounds: Rect) -> Rect {
    let y = trigger.y.saturating_add(offset);
    let x = trigger.x;
    if y >= bounds.bottom() || x >= bounds.right() {
        return Rect::new(x, y, 0, 0);
    }
    let width = trigger
        .width
        .max(MIN_LIST_WIDTH)
        .min(bounds.right() - x);
    let height = rows.min(bounds.bottom() - y);
    Rect::new(x, y, width, height)
}

/// Whether the cell at `(column, row)` lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

/// Index of the entry under `(column, row)` when entries are laid out one per
/// row from the top of `inner`. Rows beyond `count` hit nothing.
pub fn entry_at(inner: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    if !contains(inner, column, row) {
        return None;
    }
    let idx = (row - inner.y) as usize;
    (idx < count).then_some(idx)
}
