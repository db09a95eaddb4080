//! Bounded 2-D grid toolkit for text-based grid puzzles
//!
//! Puzzle input arrives as lines of text; each line becomes one grid row.
//! The grid answers point, row and column lookups, grows by whole rows or
//! columns, enumerates 4- or 8-connected neighbors with clipping at the
//! edges, and searches cells by predicate. Distance metrics work on bare
//! positions.

#![forbid(unsafe_code)]

/// Input handling, configuration and error handling
pub mod io;
/// Distance metrics between grid positions
pub mod math;
/// Grid storage, positions and neighborhood queries
pub mod spatial;

pub use io::error::{GridError, Result};
pub use math::distance::{euclidean_distance, manhattan_distance};
pub use spatial::{Grid, Neighborhood, Point};
