//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use ndarray::{ErrorKind, ShapeError};
    use puzzlegrid::GridError;
    use puzzlegrid::io::error::{Axis, file_system_error, invalid_parameter};
    use puzzlegrid::spatial::point::Point;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/input.txt", "read", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("/tmp/input.txt"));
        assert!(message.contains("read"));
        assert!(message.contains("file not found"));
    }

    // Tests range errors name both the limit and the requested index
    // Verified by omitting the requested index from the message
    #[test]
    fn test_range_error_messages() {
        let row = GridError::RowOutOfRange {
            height: 5,
            requested: 7,
        };
        assert_eq!(
            row.to_string(),
            "Row Index out of Range. Max Index (Height): 5. Requested Row: 7"
        );

        let column = GridError::ColumnOutOfRange {
            width: 2,
            requested: 2,
        };
        assert!(column.to_string().contains("Max Index (Width): 2"));
        assert!(column.source().is_none());
    }

    // Tests the mismatch message carries the axis, both lengths and the rejected values
    // Verified by omitting the values from the Display arm
    #[test]
    fn test_length_mismatch_message() {
        let error = GridError::LengthMismatch {
            axis: Axis::Column,
            values: "[1, 2, 3, 4, 5, 6]".to_owned(),
            expected: 4,
            found: 6,
        };

        assert_eq!(
            error.to_string(),
            "New column values [1, 2, 3, 4, 5, 6] have length 6 but the grid requires 4"
        );
    }

    // Tests shape failures name the operation and chain the ndarray error
    // Verified by converting shape errors without an operation name
    #[test]
    fn test_shape_error_names_operation() {
        let error = GridError::Shape {
            operation: "insert_row",
            source: ShapeError::from_kind(ErrorKind::IncompatibleShape),
        };

        assert!(error.to_string().starts_with("Shape error in insert_row: "));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_out_of_bounds_message() {
        let error = GridError::OutOfBounds {
            position: Point::new(-1, 3),
            dimensions: (3, 4),
        };

        let message = error.to_string();
        assert!(message.contains("(-1, 3)"));
        assert!(message.contains("height 3"));
        assert!(message.contains("width 4"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("runs", &0, &"must run at least once");

        let message = error.to_string();
        assert!(message.contains("runs"));
        assert!(message.contains('0'));
        assert!(message.contains("must run at least once"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::other("broken pipe");
        let error: GridError = io_error.into();
        assert!(matches!(error, GridError::FileSystem { .. }));
    }

    #[test]
    fn test_lifecycle_messages() {
        assert!(GridError::NotFinalized.to_string().contains("not been finalized"));
        assert!(GridError::EmptyInput.to_string().contains("no rows"));
        assert!(GridError::AlreadyFinalized.to_string().contains("already"));
    }
}
