//! Tests for occupancy marking and row-major free-slot scanning

#[cfg(test)]
mod tests {
    use vastuplan::spatial::geometry::Rect;
    use vastuplan::spatial::grid::OccupancyGrid;
    use vastuplan::spatial::plot::Plot;

    #[test]
    fn test_grid_dimensions_round_up() {
        let grid = OccupancyGrid::new(Plot::new(10.5, 4.0), 1.0);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 11);
        assert_eq!(grid.owner(3, 10), None);

        let fallback = OccupancyGrid::new(Plot::new(3.0, 3.0), 0.0);
        assert!((fallback.resolution - 1.0).abs() < f64::EPSILON);
    }

    // Tests that huge plots coarsen the cells instead of growing the grid
    #[test]
    fn test_grid_cells_are_bounded() {
        let grid = OccupancyGrid::new(Plot::new(1e9, 1.0), 1.0);
        assert!(grid.cols() <= 2048);
        assert_eq!(grid.rows(), 1);
        assert!(grid.resolution > 1.0);
    }

    #[test]
    fn test_positions_stay_inside_plot() {
        let grid = OccupancyGrid::new(Plot::new(5.0, 4.0), 1.0);
        let positions: Vec<Rect> = grid.positions(3.0, 3.0).collect();

        // Three columns by two rows
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Rect::new(0.0, 0.0, 3.0, 3.0));
        assert_eq!(positions[1], Rect::new(1.0, 0.0, 3.0, 3.0));
        assert_eq!(positions[5], Rect::new(2.0, 1.0, 3.0, 3.0));
        assert!(positions.iter().all(|rect| rect.fits_within(5.0, 4.0)));

        assert_eq!(grid.positions(6.0, 1.0).count(), 0);
    }

    // Tests that the first room to claim a cell keeps it
    // Verified by overwriting owned cells in mark
    #[test]
    fn test_mark_keeps_first_owner() {
        let mut grid = OccupancyGrid::new(Plot::new(10.0, 10.0), 1.0);
        grid.mark(&Rect::new(0.0, 0.0, 4.0, 4.0), 0);
        grid.mark(&Rect::new(2.0, 2.0, 4.0, 4.0), 1);

        assert_eq!(grid.owner(1, 1), Some(0));
        assert_eq!(grid.owner(3, 3), Some(0));
        assert_eq!(grid.owner(5, 5), Some(1));
        assert_eq!(grid.owner(9, 9), None);
        assert_eq!(grid.owner(4, 4), Some(1));
        assert_eq!(grid.owner(2, 5), Some(1));
    }

    #[test]
    fn test_partial_cells_are_claimed() {
        let mut grid = OccupancyGrid::new(Plot::new(10.0, 10.0), 1.0);
        grid.mark(&Rect::new(0.5, 0.0, 1.0, 1.0), 0);

        assert_eq!(grid.owner(0, 0), Some(0));
        assert_eq!(grid.owner(0, 1), Some(0));
        assert!(!grid.is_free(&Rect::new(1.0, 0.0, 1.0, 1.0)));
        assert!(grid.is_free(&Rect::new(2.0, 0.0, 1.0, 1.0)));
    }

    // Tests that scanning skips claimed cells and honours the accept filter
    // Verified by scanning column-major
    #[test]
    fn test_first_free_position_row_major() {
        let mut grid = OccupancyGrid::new(Plot::new(10.0, 10.0), 1.0);
        grid.mark(&Rect::new(0.0, 0.0, 6.0, 3.0), 0);

        let first = grid.first_free_position(3.0, 3.0, |_| true);
        assert_eq!(first, Some(Rect::new(6.0, 0.0, 3.0, 3.0)));

        let vetoed = grid.first_free_position(3.0, 3.0, |rect| rect.y > 0.0);
        assert_eq!(vetoed, Some(Rect::new(6.0, 1.0, 3.0, 3.0)));
    }

    #[test]
    fn test_first_free_position_none_when_room_too_large() {
        let grid = OccupancyGrid::new(Plot::new(10.0, 10.0), 1.0);
        assert_eq!(grid.first_free_position(11.0, 2.0, |_| true), None);

        let mut full = OccupancyGrid::new(Plot::new(4.0, 4.0), 1.0);
        full.mark(&Rect::new(0.0, 0.0, 4.0, 4.0), 0);
        assert_eq!(full.first_free_position(1.0, 1.0, |_| true), None);
    }

    #[test]
    fn test_is_free_requires_containment() {
        let grid = OccupancyGrid::new(Plot::new(10.0, 10.0), 1.0);
        assert!(grid.is_free(&Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!grid.is_free(&Rect::new(8.0, 0.0, 3.0, 3.0)));
    }
}
