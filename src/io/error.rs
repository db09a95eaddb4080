//! Error types for grid construction, queries and input handling

use std::fmt;
use std::path::PathBuf;

use crate::spatial::point::Point;

/// Grid axis named in dimension errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A horizontal run of cells (length compared against width)
    Row,
    /// A vertical run of cells (length compared against height)
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Query issued before the grid dimensions were fixed
    NotFinalized,

    /// Finalize or row accumulation attempted on an already finalized grid
    AlreadyFinalized,

    /// Finalize called with no accumulated rows
    EmptyInput,

    /// A pending row does not match the width of the first row
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Width taken from row 0
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Position lies outside `[0, width) x [0, height)`
    OutOfBounds {
        /// Requested position
        position: Point,
        /// Current grid dimensions (height, width)
        dimensions: (usize, usize),
    },

    /// Row index not below the current height
    RowOutOfRange {
        /// Current height
        height: usize,
        /// Requested row index
        requested: usize,
    },

    /// Column index not below the current width
    ColumnOutOfRange {
        /// Current width
        width: usize,
        /// Requested column index
        requested: usize,
    },

    /// Inserted values disagree with the orthogonal grid dimension
    LengthMismatch {
        /// Kind of run being inserted
        axis: Axis,
        /// Rendering of the rejected values
        values: String,
        /// Length required by the grid
        expected: usize,
        /// Length supplied by the caller
        found: usize,
    },

    /// Cell data could not be arranged into a rectangular array
    Shape {
        /// Operation that assembled the array
        operation: &'static str,
        /// Underlying ndarray shape error
        source: ndarray::ShapeError,
    },

    /// Caller-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// File system operation failure while reading puzzle input
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinalized => write!(f, "Grid has not been finalized"),
            Self::AlreadyFinalized => write!(f, "Grid is already finalized"),
            Self::EmptyInput => write!(f, "Cannot finalize a grid with no rows"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has length {found} but the grid width is {expected}"
                )
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position {position} is outside the grid (height {}, width {})",
                    dimensions.0, dimensions.1
                )
            }
            Self::RowOutOfRange { height, requested } => {
                write!(
                    f,
                    "Row Index out of Range. Max Index (Height): {height}. Requested Row: {requested}"
                )
            }
            Self::ColumnOutOfRange { width, requested } => {
                write!(
                    f,
                    "Column Index out of Range. Max Index (Width): {width}. Requested Column: {requested}"
                )
            }
            Self::LengthMismatch {
                axis,
                values,
                expected,
                found,
            } => {
                write!(
                    f,
                    "New {axis} values {values} have length {found} but the grid requires {expected}"
                )
            }
            Self::Shape { operation, source } => {
                write!(f, "Shape error in {operation}: {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Shape { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GridError {
    GridError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
