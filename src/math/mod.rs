//! Mathematical utilities for grid geometry

/// Distance metrics between grid positions
pub mod distance;
