//! Distance metrics between grid positions
//!
//! Stateless helpers; neither needs a grid instance, so positions may lie
//! anywhere on the integer plane.

use crate::spatial::point::Point;

/// Sum of absolute coordinate differences (taxicab distance)
pub fn manhattan_distance(a: impl Into<Point>, b: impl Into<Point>) -> u64 {
    let (a, b) = (a.into(), b.into());
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

/// Straight-line distance between the two positions
pub fn euclidean_distance(a: impl Into<Point>, b: impl Into<Point>) -> f64 {
    let (a, b) = (a.into(), b.into());
    let dx = f64::from(a.x.abs_diff(b.x));
    let dy = f64::from(a.y.abs_diff(b.y));
    dx.hypot(dy)
}
