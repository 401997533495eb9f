//! Plain-text grid rendering.

use seg_core::Position;
use seg_sim::GridView;

/// Character used for an empty cell.
pub const EMPTY_CELL: char = '.';

/// Render the grid as text: one line per `y` (top to bottom), one character
/// per `x`, `.` for empty cells and the kind label otherwise.
pub fn render_ascii(grid: GridView<'_>) -> String {
    let (w, h) = (grid.width(), grid.height());
    let mut out = String::with_capacity(((w + 1) * h) as usize);
    for y in 0..h {
        for x in 0..w {
            let c = grid
                .kind_at(Position::new(x, y))
                .map_or(EMPTY_CELL, |k| k.label());
            out.push(c);
        }
        out.push('\n');
    }
    out
}
