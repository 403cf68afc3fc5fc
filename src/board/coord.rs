//! Board coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the board. `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Index of the main diagonal (constant `x + y`), in `[0, 2n - 2]`
    #[inline]
    pub const fn main_diagonal(self) -> usize {
        self.x + self.y
    }

    /// Index of the anti-diagonal (constant `x - y`), shifted by `n - 1` into `[0, 2n - 2]`
    #[inline]
    pub const fn anti_diagonal(self, size: usize) -> usize {
        self.x + (size - 1) - self.y
    }

    /// Whether the coordinate lies on an `size`x`size` board
    #[inline]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
