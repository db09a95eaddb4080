//! Row and column splicing for rectangular cell arrays
//!
//! `ndarray` arrays cannot grow in place along an inner position, so each
//! insertion rebuilds the array one row or column larger, copying existing
//! cells past the insertion point. Inputs are validated before anything is
//! copied; on error the source array is untouched.

use std::fmt::Debug;

use ndarray::Array2;

use crate::io::error::{Axis, GridError, Result};

/// Build a new array with `values` inserted as row `index`
///
/// `index` may equal the current row count to append at the bottom.
///
/// # Errors
///
/// Returns `LengthMismatch` if `values` is not exactly one row wide, or
/// `RowOutOfRange` if `index` is past the end.
pub fn insert_row<T: Clone + Debug>(
    array: &Array2<T>,
    index: usize,
    values: &[T],
) -> Result<Array2<T>> {
    let (rows, cols) = array.dim();

    if values.len() != cols {
        return Err(GridError::LengthMismatch {
            axis: Axis::Row,
            values: format!("{values:?}"),
            expected: cols,
            found: values.len(),
        });
    }
    if index > rows {
        return Err(GridError::RowOutOfRange {
            height: rows,
            requested: index,
        });
    }

    let mut data = Vec::with_capacity((rows + 1) * cols);
    for (row_index, row) in array.rows().into_iter().enumerate() {
        if row_index == index {
            data.extend_from_slice(values);
        }
        data.extend(row.iter().cloned());
    }
    if index == rows {
        data.extend_from_slice(values);
    }

    Array2::from_shape_vec((rows + 1, cols), data).map_err(|source| GridError::Shape {
        operation: "insert_row",
        source,
    })
}

/// Build a new array with `values` inserted as column `index`
///
/// `values` supplies one cell per existing row, top to bottom. `index` may
/// equal the current column count to append on the right.
///
/// # Errors
///
/// Returns `LengthMismatch` if `values` is not exactly one column tall, or
/// `ColumnOutOfRange` if `index` is past the end.
pub fn insert_column<T: Clone + Debug>(
    array: &Array2<T>,
    index: usize,
    values: &[T],
) -> Result<Array2<T>> {
    let (rows, cols) = array.dim();

    if values.len() != rows {
        return Err(GridError::LengthMismatch {
            axis: Axis::Column,
            values: format!("{values:?}"),
            expected: rows,
            found: values.len(),
        });
    }
    if index > cols {
        return Err(GridError::ColumnOutOfRange {
            width: cols,
            requested: index,
        });
    }

    let mut data = Vec::with_capacity(rows * (cols + 1));
    for (row, value) in array.rows().into_iter().zip(values) {
        for (col_index, cell) in row.iter().enumerate() {
            if col_index == index {
                data.push(value.clone());
            }
            data.push(cell.clone());
        }
        if index == cols {
            data.push(value.clone());
        }
    }

    Array2::from_shape_vec((rows, cols + 1), data).map_err(|source| GridError::Shape {
        operation: "insert_column",
        source,
    })
}
