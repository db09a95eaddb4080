//! Neighborhood shapes used by surrounding-cell scans

use crate::spatial::point::Point;

/// The four orthogonal offsets, in scan order
pub const CARDINAL_DELTAS: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, 0),
];

/// The four diagonal offsets, in scan order
pub const DIAGONAL_DELTAS: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(1, 1),
];

/// Which offsets around a position a scan visits
///
/// The default matches the common puzzle case: all eight surrounding cells,
/// excluding the position itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    /// Include the four diagonal offsets (8-connectivity)
    pub diagonals: bool,
    /// Include the zero offset
    pub include_self: bool,
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::MOORE
    }
}

impl Neighborhood {
    /// 4-connectivity
    pub const CARDINAL: Self = Self {
        diagonals: false,
        include_self: false,
    };

    /// 8-connectivity
    pub const MOORE: Self = Self {
        diagonals: true,
        include_self: false,
    };

    /// Same shape with the center offset added
    #[must_use]
    pub const fn with_self(mut self) -> Self {
        self.include_self = true;
        self
    }

    /// Number of offsets this neighborhood visits
    pub const fn len(&self) -> usize {
        let mut count = CARDINAL_DELTAS.len();
        if self.diagonals {
            count += DIAGONAL_DELTAS.len();
        }
        if self.include_self {
            count += 1;
        }
        count
    }

    /// Always false; every neighborhood contains the cardinal offsets
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Offsets in scan order: cardinals, then diagonals, then the center
    pub fn deltas(&self) -> impl Iterator<Item = Point> + use<> {
        let diagonals: &'static [Point] = if self.diagonals {
            &DIAGONAL_DELTAS
        } else {
            &[]
        };
        let center = self.include_self.then_some(Point::ORIGIN);

        CARDINAL_DELTAS
            .into_iter()
            .chain(diagonals.iter().copied())
            .chain(center)
    }
}
