//! Bounded 2-D grid with point access, row/column insertion and neighbor queries
//!
//! A grid starts out pending: rows are accumulated in input order until
//! [`Grid::finalize`] fixes the height and width and moves the cells into a
//! rectangular `ndarray` store indexed `[y, x]`. Every query requires a
//! finalized grid. After finalization the grid only grows, one row or one
//! column at a time.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::{debug, trace};

use crate::io::error::{GridError, Result};
use crate::spatial::extension::{insert_column, insert_row};
use crate::spatial::neighborhood::Neighborhood;
use crate::spatial::point::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Layout<T> {
    /// Cells accumulated so far in row-major order; dimensions unknown
    Pending {
        cells: Vec<T>,
        row_lengths: Vec<usize>,
    },
    /// Rectangular cell store, shape (height, width)
    Finalized(Array2<T>),
}

/// Rectangular grid of cell values addressed by [`Point`]
///
/// `x` selects the column and `y` the row, both zero-based from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    layout: Layout<T>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    /// Create an empty grid awaiting rows
    pub const fn new() -> Self {
        Self {
            layout: Layout::Pending {
                cells: Vec::new(),
                row_lengths: Vec::new(),
            },
        }
    }

    /// Build and finalize a grid from rows of cells, top to bottom
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if `rows` is empty and `RaggedRow` if any row
    /// differs in length from the first.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut grid = Self::new();
        for row in rows {
            grid.push_row(row)?;
        }
        grid.finalize()?;
        Ok(grid)
    }

    /// Append a row below the rows accumulated so far
    ///
    /// # Errors
    ///
    /// Returns `AlreadyFinalized` once the dimensions are fixed; use
    /// [`Grid::add_row`] to grow a finalized grid.
    pub fn push_row(&mut self, row: impl IntoIterator<Item = T>) -> Result<()> {
        match &mut self.layout {
            Layout::Pending { cells, row_lengths } => {
                let before = cells.len();
                cells.extend(row);
                row_lengths.push(cells.len() - before);
                Ok(())
            }
            Layout::Finalized(_) => Err(GridError::AlreadyFinalized),
        }
    }

    /// Fix height and width from the accumulated rows
    ///
    /// Height is the row count and width the length of the first row. Every
    /// other row must have that same length.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` with no rows, `RaggedRow` for a row of the wrong
    /// length and `AlreadyFinalized` on a second call. The grid is unchanged
    /// on error.
    pub fn finalize(&mut self) -> Result<()> {
        let Layout::Pending { cells, row_lengths } = &mut self.layout else {
            return Err(GridError::AlreadyFinalized);
        };

        let width = row_lengths.first().copied().ok_or(GridError::EmptyInput)?;
        if let Some((row, &found)) = row_lengths
            .iter()
            .enumerate()
            .find(|&(_, &len)| len != width)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        let height = row_lengths.len();
        let shape_error = |source| GridError::Shape {
            operation: "finalize",
            source,
        };
        ArrayView2::from_shape((height, width), cells.as_slice()).map_err(shape_error)?;
        let cells =
            Array2::from_shape_vec((height, width), std::mem::take(cells)).map_err(shape_error)?;

        self.layout = Layout::Finalized(cells);
        debug!(height, width, "grid finalized");
        Ok(())
    }

    /// Whether [`Grid::finalize`] has completed
    pub const fn is_finalized(&self) -> bool {
        matches!(self.layout, Layout::Finalized(_))
    }

    /// Grid size as `(height, width)`, or `None` before finalization
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        match &self.layout {
            Layout::Pending { .. } => None,
            Layout::Finalized(cells) => Some(cells.dim()),
        }
    }

    /// Number of rows, or `None` before finalization
    pub fn height(&self) -> Option<usize> {
        self.dimensions().map(|(height, _)| height)
    }

    /// Number of columns, or `None` before finalization
    pub fn width(&self) -> Option<usize> {
        self.dimensions().map(|(_, width)| width)
    }

    /// One-line description, reporting `-1` for unknown dimensions
    pub fn summary(&self) -> String {
        let (height, width) = self
            .dimensions()
            .map_or((-1, -1), |(h, w)| (h as i64, w as i64));
        format!("Grid. H: {height}. W: {width}")
    }

    fn cells(&self) -> Result<&Array2<T>> {
        match &self.layout {
            Layout::Finalized(cells) => Ok(cells),
            Layout::Pending { .. } => Err(GridError::NotFinalized),
        }
    }

    /// Cell value at `pos`
    ///
    /// # Errors
    ///
    /// Returns `NotFinalized` before finalization and `OutOfBounds` when
    /// `pos` is outside `[0, width) x [0, height)`.
    pub fn get(&self, pos: impl Into<Point>) -> Result<&T> {
        let position = pos.into();
        let cells = self.cells()?;
        position
            .to_index()
            .and_then(|index| cells.get(index))
            .ok_or(GridError::OutOfBounds {
                position,
                dimensions: cells.dim(),
            })
    }

    /// View of the row at `row_index`
    ///
    /// # Errors
    ///
    /// Returns `RowOutOfRange` when `row_index >= height`.
    pub fn get_row(&self, row_index: usize) -> Result<ArrayView1<'_, T>> {
        let cells = self.cells()?;
        if row_index >= cells.nrows() {
            return Err(GridError::RowOutOfRange {
                height: cells.nrows(),
                requested: row_index,
            });
        }
        Ok(cells.row(row_index))
    }

    /// Every cell value in row-major order (`y` outer, `x` inner)
    ///
    /// The iterator is lazy; calling this again starts a fresh scan.
    ///
    /// # Errors
    ///
    /// Returns `NotFinalized` before finalization.
    pub fn get_all_positions(&self) -> Result<impl Iterator<Item = &T>> {
        Ok(self.cells()?.iter())
    }

    /// Lazily yield `(position, value)` for every cell matching `predicate`
    ///
    /// Cells are visited in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `NotFinalized` before finalization.
    pub fn search_grid<P>(&self, mut predicate: P) -> Result<impl Iterator<Item = (Point, &T)>>
    where
        P: FnMut(&T) -> bool,
    {
        let cells = self.cells()?;
        Ok(cells
            .indexed_iter()
            .filter(move |&(_, value)| predicate(value))
            .filter_map(|((row, col), value)| {
                let x = i32::try_from(col).ok()?;
                let y = i32::try_from(row).ok()?;
                Some((Point::new(x, y), value))
            }))
    }

    /// Values around `pos` keyed by their offset from `pos`
    ///
    /// Offsets are visited in [`Neighborhood::deltas`] order. Neighbors
    /// falling outside the grid are dropped rather than wrapped, so corner
    /// and edge cells report fewer entries.
    ///
    /// # Errors
    ///
    /// Returns `NotFinalized` before finalization.
    pub fn scan_surroundings(
        &self,
        pos: impl Into<Point>,
        neighborhood: Neighborhood,
    ) -> Result<IndexMap<Point, &T>> {
        let origin = pos.into();
        let cells = self.cells()?;

        let surroundings: IndexMap<Point, &T> = neighborhood
            .deltas()
            .filter_map(|delta| {
                let index = origin.offset(delta)?.to_index()?;
                cells.get(index).map(|value| (delta, value))
            })
            .collect();

        trace!(%origin, neighbors = surroundings.len(), "scanned surroundings");
        Ok(surroundings)
    }

    /// Offsets around `pos` whose neighbor value satisfies `predicate`
    ///
    /// # Errors
    ///
    /// Returns `NotFinalized` before finalization.
    pub fn search_surroundings<P>(
        &self,
        pos: impl Into<Point>,
        neighborhood: Neighborhood,
        mut predicate: P,
    ) -> Result<Vec<Point>>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self
            .scan_surroundings(pos, neighborhood)?
            .into_iter()
            .filter(|&(_, value)| predicate(value))
            .map(|(delta, _)| delta)
            .collect())
    }
}

impl<T: Clone> Grid<T> {
    fn cells_mut(&mut self) -> Result<&mut Array2<T>> {
        match &mut self.layout {
            Layout::Finalized(cells) => Ok(cells),
            Layout::Pending { .. } => Err(GridError::NotFinalized),
        }
    }

    /// Copy of the column at `column_index`, top to bottom
    ///
    /// # Errors
    ///
    /// Returns `ColumnOutOfRange` when `column_index >= width`.
    pub fn get_column(&self, column_index: usize) -> Result<Vec<T>> {
        let cells = self.cells()?;
        if column_index >= cells.ncols() {
            return Err(GridError::ColumnOutOfRange {
                width: cells.ncols(),
                requested: column_index,
            });
        }
        Ok(cells.column(column_index).to_vec())
    }

    /// Insert `new_values` as a row before `row_index`
    ///
    /// Rows at and after `row_index` shift down by one. `row_index == height`
    /// appends at the bottom.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if `new_values.len() != width` and
    /// `RowOutOfRange` if `row_index > height`. The grid is unchanged on
    /// error.
    pub fn add_row(&mut self, new_values: &[T], row_index: usize) -> Result<()>
    where
        T: fmt::Debug,
    {
        let cells = self.cells_mut()?;
        *cells = insert_row(cells, row_index, new_values)?;
        debug!(row_index, height = cells.nrows(), "row inserted");
        Ok(())
    }

    /// Insert `new_values` as a column before `column_index`
    ///
    /// `new_values` holds one cell per row, top to bottom. Cells at and after
    /// `column_index` shift right by one.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if `new_values.len() != height` and
    /// `ColumnOutOfRange` if `column_index > width`. The grid is unchanged on
    /// error.
    pub fn add_column(&mut self, new_values: &[T], column_index: usize) -> Result<()>
    where
        T: fmt::Debug,
    {
        let cells = self.cells_mut()?;
        *cells = insert_column(cells, column_index, new_values)?;
        debug!(column_index, width = cells.ncols(), "column inserted");
        Ok(())
    }
}

impl Grid<char> {
    /// Build and finalize a character grid, one trimmed line per row
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if there are no lines and `RaggedRow` if the
    /// trimmed lines differ in length.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grid = Self::new();
        for line in lines {
            grid.push_line(line.as_ref())?;
        }
        grid.finalize()?;
        Ok(grid)
    }

    /// Append a whitespace-trimmed line as a pending row
    ///
    /// # Errors
    ///
    /// Returns `AlreadyFinalized` once the dimensions are fixed.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.push_row(line.trim().chars())
    }

    /// Row at `row_index` collected back into a string
    ///
    /// # Errors
    ///
    /// Returns `RowOutOfRange` when `row_index >= height`.
    pub fn row_string(&self, row_index: usize) -> Result<String> {
        Ok(self.get_row(row_index)?.iter().collect())
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_lines(s.lines())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.layout {
            Layout::Pending { cells, row_lengths } => {
                let mut rest = cells.as_slice();
                for &len in row_lengths {
                    let (row, tail) = rest.split_at_checked(len).unwrap_or((rest, &[]));
                    for cell in row {
                        write!(f, "{cell}")?;
                    }
                    writeln!(f)?;
                    rest = tail;
                }
            }
            Layout::Finalized(cells) => {
                for row in cells.rows() {
                    for cell in row {
                        write!(f, "{cell}")?;
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}
