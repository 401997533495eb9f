//! Grid coordinates on a periodic (toroidal) 2-D lattice.
//!
//! Coordinates are signed so that neighbor offsets can step off either edge
//! before being wrapped back into `[0, width) × [0, height)`.

/// A cell coordinate.  Valid positions satisfy `0 <= x < width` and
/// `0 <= y < height`; use [`Position::wrap`] to bring any offset back in range.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Moore-neighborhood offsets, `dx` outer and `dy` inner, `(0, 0)` excluded.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Wrap both coordinates onto the torus.
    ///
    /// Uses the Euclidean remainder so that `-1` maps to `width - 1`.
    #[inline]
    pub fn wrap(self, width: i32, height: i32) -> Self {
        Self::new(self.x.rem_euclid(width), self.y.rem_euclid(height))
    }

    /// `true` if the position lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        (0..width).contains(&self.x) && (0..height).contains(&self.y)
    }

    /// The 8 toroidal neighbors of `self`, in [`NEIGHBOR_OFFSETS`] order.
    ///
    /// On grids narrower than 3 cells in either direction several offsets
    /// wrap onto the same cell (or onto `self`); they are still returned,
    /// one entry per offset.
    pub fn neighbors(self, width: i32, height: i32) -> [Position; 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.offset(dx, dy).wrap(width, height))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
