//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Grid positions and offsets
//! - Neighborhood shapes for surrounding-cell scans
//! - Row and column insertion into rectangular arrays
//! - The grid itself

/// Row and column splicing utilities
pub mod extension;
/// Grid storage, lifecycle and queries
pub mod grid;
/// Neighborhood shapes and their offsets
pub mod neighborhood;
/// Integer positions and offsets
pub mod point;

pub use grid::Grid;
pub use neighborhood::Neighborhood;
pub use point::Point;
