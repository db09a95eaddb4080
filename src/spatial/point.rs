//! Integer grid coordinates
//!
//! `x` is the column index (left to right) and `y` the row index (top to
//! bottom). The same type serves as an absolute position and as a relative
//! offset (delta) between two positions.

use std::fmt;

/// A position or offset on a 2-D grid
///
/// Ordering is row-major: `y` first, then `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Point {
    /// The zero offset
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a point from its column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Apply `delta` to this point
    ///
    /// Returns `None` if either component overflows.
    pub const fn offset(self, delta: Self) -> Option<Self> {
        match (self.x.checked_add(delta.x), self.y.checked_add(delta.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Convert to `[row, col]` array indices if both components are non-negative
    pub fn to_index(self) -> Option<[usize; 2]> {
        let row = usize::try_from(self.y).ok()?;
        let col = usize::try_from(self.x).ok()?;
        Some([row, col])
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
