//! Tests for placement constants and their relationships

#[cfg(test)]
mod tests {
    use vastuplan::io::configuration::{
        ANCHOR_MARGIN, COMFORTABLE_UTILIZATION, DEFAULT_ASPECT_RATIO, DEFAULT_MAX_ROOMS_PER_ROW,
        DEFAULT_PIXELS_PER_FOOT, FAR_SIDE_FRACTION, FAVORABLE_POINTS, FEASIBLE_UTILIZATION,
        FULL_UTILIZATION, MAIN_ENTRANCE_DEPTH, MAIN_ENTRANCE_WIDTH, MAX_GRID_CELLS_PER_SIDE,
        MAX_LAYOUT_PASSES, MAX_NUDGE_ATTEMPTS, MAX_PIXELS_PER_FOOT, MAX_PLOT_SIDE,
        MAX_RASTER_SIDE, MAX_ROOM_PLOT_FRACTION, NEUTRAL_POINTS, NUDGE_FRACTION, SQUARE_FEET_PER_CENT, UNFAVORABLE_POINTS,
    };

    // Tests the placement heuristic values
    // Verified by changing the far-side fraction
    #[test]
    fn test_placement_constants() {
        assert!((ANCHOR_MARGIN - 1.0).abs() < f64::EPSILON);
        assert!((FAR_SIDE_FRACTION - 0.7).abs() < f64::EPSILON);
        assert!((NUDGE_FRACTION - 0.3).abs() < f64::EPSILON);
        assert_eq!(MAX_NUDGE_ATTEMPTS, 10);
        assert!(MAX_ROOM_PLOT_FRACTION > 0.0 && MAX_ROOM_PLOT_FRACTION < 1.0);
        assert!(DEFAULT_ASPECT_RATIO >= 1.0);
        assert_eq!(DEFAULT_MAX_ROOMS_PER_ROW, 3);
    }

    #[test]
    fn test_cent_conversion() {
        assert!((SQUARE_FEET_PER_CENT - 435.6).abs() < f64::EPSILON);
    }

    // Tests thresholds are ordered so every status is reachable
    #[test]
    fn test_threshold_ordering() {
        assert!(COMFORTABLE_UTILIZATION < FULL_UTILIZATION);
        assert!(FULL_UTILIZATION < FEASIBLE_UTILIZATION);
        assert!(UNFAVORABLE_POINTS < NEUTRAL_POINTS && NEUTRAL_POINTS < FAVORABLE_POINTS);
        assert_eq!(FAVORABLE_POINTS, 100);
    }

    #[test]
    fn test_scale_defaults_within_bounds() {
        assert!(DEFAULT_PIXELS_PER_FOOT >= 1);
        assert!(DEFAULT_PIXELS_PER_FOOT <= MAX_PIXELS_PER_FOOT);
    }

    // Tests the size caps keep the grid under one cell per foot
    #[test]
    fn test_size_caps() {
        assert!(MAX_PLOT_SIDE / MAX_GRID_CELLS_PER_SIDE <= 1.0);
        // A 100 ft plot renders at the finest scale
        assert!(100.0 * f64::from(MAX_PIXELS_PER_FOOT) <= f64::from(MAX_RASTER_SIDE));
        assert!(MAX_LAYOUT_PASSES >= 2);
        assert!(MAIN_ENTRANCE_WIDTH > MAIN_ENTRANCE_DEPTH);
    }
}
