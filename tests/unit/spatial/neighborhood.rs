//! Tests for neighborhood shapes and offset ordering

#[cfg(test)]
mod tests {
    use puzzlegrid::spatial::neighborhood::{CARDINAL_DELTAS, DIAGONAL_DELTAS, Neighborhood};
    use puzzlegrid::spatial::point::Point;

    // Tests the default neighborhood is 8-connected without the center
    // Verified by flipping the default diagonal flag
    #[test]
    fn test_default_is_moore_without_self() {
        let neighborhood = Neighborhood::default();
        assert!(neighborhood.diagonals);
        assert!(!neighborhood.include_self);
        assert_eq!(neighborhood, Neighborhood::MOORE);
        assert_eq!(neighborhood.len(), 8);
    }

    #[test]
    fn test_cardinal_deltas() {
        let deltas: Vec<Point> = Neighborhood::CARDINAL.deltas().collect();
        assert_eq!(deltas, CARDINAL_DELTAS.to_vec());
        assert_eq!(Neighborhood::CARDINAL.len(), 4);
        assert!(!Neighborhood::CARDINAL.is_empty());
    }

    // Tests ordering: cardinals, diagonals, then the zero offset last
    // Verified by pushing the center before the diagonals
    #[test]
    fn test_full_neighborhood_order() {
        let shape = Neighborhood::MOORE.with_self();
        let deltas: Vec<Point> = shape.deltas().collect();

        assert_eq!(deltas.len(), shape.len());
        assert_eq!(deltas.get(..4), Some(&CARDINAL_DELTAS[..]));
        assert_eq!(deltas.get(4..8), Some(&DIAGONAL_DELTAS[..]));
        assert_eq!(deltas.last(), Some(&Point::ORIGIN));
    }

    #[test]
    fn test_cardinal_with_self() {
        let deltas: Vec<Point> = Neighborhood::CARDINAL.with_self().deltas().collect();
        assert_eq!(deltas.len(), 5);
        assert!(deltas.contains(&Point::ORIGIN));
        assert!(!deltas.iter().any(|d| DIAGONAL_DELTAS.contains(d)));
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for delta in Neighborhood::MOORE.deltas() {
            assert!(delta.x.abs() <= 1 && delta.y.abs() <= 1);
            assert_ne!(delta, Point::ORIGIN);
        }
    }
}
