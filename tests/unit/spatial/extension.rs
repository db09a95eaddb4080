//! Tests for row and column splicing of rectangular arrays

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use puzzlegrid::io::error::{Axis, GridError};
    use puzzlegrid::spatial::extension::{insert_column, insert_row};

    fn numbered() -> Array2<i32> {
        array![[1, 2, 3], [4, 5, 6]]
    }

    // Tests insertion between existing rows keeps the rows on both sides intact
    // Verified by dropping the row at the insertion index
    #[test]
    fn test_insert_row_in_middle() {
        let extended = insert_row(&numbered(), 1, &[7, 8, 9]).unwrap();
        assert_eq!(extended, array![[1, 2, 3], [7, 8, 9], [4, 5, 6]]);
    }

    #[test]
    fn test_insert_row_at_each_end() {
        let top = insert_row(&numbered(), 0, &[0, 0, 0]).unwrap();
        assert_eq!(top, array![[0, 0, 0], [1, 2, 3], [4, 5, 6]]);

        let bottom = insert_row(&numbered(), 2, &[0, 0, 0]).unwrap();
        assert_eq!(bottom, array![[1, 2, 3], [4, 5, 6], [0, 0, 0]]);
    }

    // Tests row validation order: length is checked before the index
    // Verified by swapping the two checks
    #[test]
    fn test_insert_row_rejects_bad_input() {
        let source = numbered();

        assert!(matches!(
            insert_row(&source, 9, &[1]),
            Err(GridError::LengthMismatch {
                axis: Axis::Row,
                expected: 3,
                found: 1,
                ..
            })
        ));
        assert!(matches!(
            insert_row(&source, 3, &[1, 2, 3]),
            Err(GridError::RowOutOfRange {
                height: 2,
                requested: 3
            })
        ));
        assert_eq!(source, numbered());
    }

    // Tests each value lands in its own row at the requested column
    // Verified by inserting every value into the first row
    #[test]
    fn test_insert_column_positions() {
        let front = insert_column(&numbered(), 0, &[10, 20]).unwrap();
        assert_eq!(front, array![[10, 1, 2, 3], [20, 4, 5, 6]]);

        let middle = insert_column(&numbered(), 2, &[10, 20]).unwrap();
        assert_eq!(middle, array![[1, 2, 10, 3], [4, 5, 20, 6]]);

        let back = insert_column(&numbered(), 3, &[10, 20]).unwrap();
        assert_eq!(back, array![[1, 2, 3, 10], [4, 5, 6, 20]]);
    }

    #[test]
    fn test_insert_column_rejects_bad_input() {
        let source = numbered();

        assert!(matches!(
            insert_column(&source, 0, &[1, 2, 3]),
            Err(GridError::LengthMismatch {
                axis: Axis::Column,
                expected: 2,
                found: 3,
                ..
            })
        ));
        assert!(matches!(
            insert_column(&source, 4, &[1, 2]),
            Err(GridError::ColumnOutOfRange {
                width: 3,
                requested: 4
            })
        ));
    }
}
