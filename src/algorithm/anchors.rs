//! Candidate positions seeded from compass zones and placed neighbours

use crate::algorithm::executor::LayoutConfig;
use crate::spatial::compass::Direction;
use crate::spatial::geometry::Rect;
use crate::spatial::plot::Plot;

/// Top-left anchor points biased toward a compass zone
///
/// Cardinal directions yield two anchors (a third and a half along the edge),
/// intercardinal directions one corner anchor. Anchors are expressed in plot
/// fractions plus the configured edge margin and may still need clamping for
/// large rooms.
pub fn direction_anchors(direction: Direction, plot: Plot, config: &LayoutConfig) -> Vec<(f64, f64)> {
    let m = config.anchor_margin;
    let far = config.far_side_fraction;
    let (w, h) = (plot.width, plot.height);

    match direction {
        Direction::North => vec![(w / 3.0, m), (w / 2.0, m)],
        Direction::South => vec![(w / 3.0, h * far), (w / 2.0, h * far)],
        Direction::East => vec![(w * far, h / 3.0), (w * far, h / 2.0)],
        Direction::West => vec![(m, h / 3.0), (m, h / 2.0)],
        Direction::NorthEast => vec![(w * far, m)],
        Direction::NorthWest => vec![(m, m)],
        Direction::SouthEast => vec![(w * far, h * far)],
        Direction::SouthWest => vec![(m, h * far)],
    }
}

/// Edge-flush anchor for a main entrance of the given size
///
/// Entrances sit on the plot boundary itself: centred on the edge for cardinal
/// directions and in the corner for intercardinal ones.
pub const fn entrance_anchor(direction: Direction, plot: Plot, width: f64, height: f64) -> (f64, f64) {
    let (w, h) = (plot.width, plot.height);
    let centre_x = w / 2.0 - width / 2.0;
    let centre_y = h / 2.0 - height / 2.0;

    match direction {
        Direction::North => (centre_x, 0.0),
        Direction::South => (centre_x, h - height),
        Direction::East => (w - width, centre_y),
        Direction::West => (0.0, centre_y),
        Direction::NorthEast => (w - width, 0.0),
        Direction::NorthWest => (0.0, 0.0),
        Direction::SouthEast => (w - width, h - height),
        Direction::SouthWest => (0.0, h - height),
    }
}

/// Positions sharing an edge with `neighbor`: right, below, left, above
pub const fn flush_candidates(neighbor: &Rect, width: f64, height: f64) -> [Rect; 4] {
    [
        Rect::new(neighbor.right(), neighbor.y, width, height),
        Rect::new(neighbor.x, neighbor.bottom(), width, height),
        Rect::new(neighbor.x - width, neighbor.y, width, height),
        Rect::new(neighbor.x, neighbor.y - height, width, height),
    ]
}
