//! Tests for rectangle overlap, contact and clamping

#[cfg(test)]
mod tests {
    use vastuplan::spatial::geometry::Rect;

    // Tests that shared edges are not overlaps but interior intersections are
    // Verified by switching the overlap test to inclusive comparisons
    #[test]
    fn test_overlap_excludes_shared_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 5.0, 5.0);
        let below = Rect::new(0.0, 10.0, 5.0, 5.0);
        let inside = Rect::new(9.0, 9.0, 5.0, 5.0);

        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_intersection_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!((a.intersection_area(&Rect::new(6.0, 8.0, 10.0, 10.0)) - 8.0).abs() < 1e-9);
        assert!((a.intersection_area(&Rect::new(2.0, 2.0, 3.0, 3.0)) - 9.0).abs() < 1e-9);
        assert!(a.intersection_area(&Rect::new(10.0, 0.0, 5.0, 5.0)).abs() < 1e-9);
        assert!(a.intersection_area(&Rect::new(20.0, 20.0, 5.0, 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_contains_point_is_half_open() {
        let a = Rect::new(2.0, 2.0, 4.0, 4.0);

        assert!(a.contains_point(2.0, 2.0));
        assert!(a.contains_point(5.9, 3.0));
        assert!(!a.contains_point(6.0, 3.0));
        assert!(!a.contains_point(3.0, 6.0));
        assert!(!a.contains_point(1.9, 3.0));
    }

    #[test]
    fn test_touches_requires_positive_edge_span() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!(a.touches(&Rect::new(10.0, 2.0, 4.0, 4.0)));
        assert!(a.touches(&Rect::new(3.0, -4.0, 4.0, 4.0)));
        // Corner contact only
        assert!(!a.touches(&Rect::new(10.0, 10.0, 4.0, 4.0)));
        // Gap
        assert!(!a.touches(&Rect::new(11.0, 0.0, 4.0, 4.0)));
        // Overlap is not contact
        assert!(!a.touches(&Rect::new(5.0, 5.0, 4.0, 4.0)));
    }

    // Tests clamping into an area, including rectangles larger than the area
    // Verified by swapping the min/max order in clamped_within
    #[test]
    fn test_clamped_within() {
        let r = Rect::new(35.0, -3.0, 10.0, 10.0).clamped_within(40.0, 40.0);
        assert_eq!(r, Rect::new(30.0, 0.0, 10.0, 10.0));

        let oversized = Rect::new(5.0, 5.0, 50.0, 10.0).clamped_within(40.0, 40.0);
        assert_eq!((oversized.x, oversized.y), (0.0, 5.0));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_edges_and_area() {
        let r = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(r.right(), 6.0);
        assert_eq!(r.bottom(), 8.0);
        assert_eq!(r.area(), 20.0);
        assert!(r.fits_within(6.0, 8.0));
        assert!(!r.fits_within(5.9, 8.0));
        assert_eq!(r.at(0.0, 0.0), Rect::new(0.0, 0.0, 4.0, 5.0));
    }
}
