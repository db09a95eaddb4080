//! Tests for point construction, conversion and ordering

#[cfg(test)]
mod tests {
    use puzzlegrid::spatial::point::Point;

    #[test]
    fn test_conversions() {
        let from_tuple: Point = (3, -4).into();
        let from_array: Point = [3, -4].into();

        assert_eq!(from_tuple, Point::new(3, -4));
        assert_eq!(from_tuple, from_array);
        assert_eq!(from_tuple.to_string(), "(3, -4)");
    }

    // Tests offsets overflow to None instead of wrapping
    // Verified by replacing checked_add with wrapping_add
    #[test]
    fn test_offset() {
        assert_eq!(
            Point::new(2, 5).offset(Point::new(-1, 1)),
            Some(Point::new(1, 6))
        );
        assert_eq!(Point::new(i32::MAX, 0).offset(Point::new(1, 0)), None);
        assert_eq!(Point::new(0, i32::MIN).offset(Point::new(0, -1)), None);
    }

    // Tests negative components have no array index
    // Verified by casting negative values to usize
    #[test]
    fn test_to_index() {
        assert_eq!(Point::new(2, 1).to_index(), Some([1, 2]));
        assert_eq!(Point::new(-1, 0).to_index(), None);
        assert_eq!(Point::new(0, -1).to_index(), None);
    }

    // Tests ordering is row-major (y before x)
    // Verified by deriving Ord on the (x, y) field order
    #[test]
    fn test_row_major_ordering() {
        let mut points = vec![Point::new(0, 1), Point::new(2, 0), Point::new(1, 0)];
        points.sort();
        assert_eq!(
            points,
            vec![Point::new(1, 0), Point::new(2, 0), Point::new(0, 1)]
        );
    }
}
