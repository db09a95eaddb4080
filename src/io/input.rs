//! Reading puzzle input text from disk
//!
//! Input files hold one grid row per physical line. Trailing newlines are
//! ignored; each line is trimmed when it becomes a grid row.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::spatial::grid::Grid;

/// Read a whole input file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read as UTF-8 text.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| file_system_error(path, "read", source))
}

/// Read an input file as a list of lines
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read as UTF-8 text.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read_to_string(path)?
        .lines()
        .map(str::to_owned)
        .collect())
}

/// Read an input file as consecutive groups of `size` lines
///
/// The last group is shorter when the line count is not a multiple of
/// `size`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `size` is zero and `FileSystem` if the file
/// cannot be read as UTF-8 text.
pub fn read_chunks(path: impl AsRef<Path>, size: usize) -> Result<Vec<Vec<String>>> {
    if size == 0 {
        return Err(invalid_parameter("size", &size, &"must be at least 1"));
    }
    Ok(read_lines(path)?
        .chunks(size)
        .map(<[String]>::to_vec)
        .collect())
}

/// Read an input file into a finalized character grid
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, `EmptyInput` if it has
/// no lines and `RaggedRow` if its lines differ in trimmed length.
pub fn read_grid(path: impl AsRef<Path>) -> Result<Grid<char>> {
    let path = path.as_ref();
    let grid: Grid<char> = read_to_string(path)?.parse()?;
    debug!(path = %path.display(), summary = %grid.summary(), "grid loaded");
    Ok(grid)
}
