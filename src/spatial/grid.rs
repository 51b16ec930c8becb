//! Occupancy grid over the plot for scan-based placement
//!
//! The plot is divided into square cells of a fixed resolution. A room marks
//! every cell its rectangle touches, so a free run of cells guarantees that a
//! rectangle placed on it cannot overlap any marked room.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_CELLS_PER_SIDE;
use crate::spatial::geometry::Rect;
use crate::spatial::plot::Plot;

/// Cell value for unoccupied space
pub const FREE_CELL: u32 = 0;

/// Cell ownership map of a plot
///
/// Each cell stores `0` when free, otherwise `room_index + 1` of the room that
/// claimed it first.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    /// Owner of each cell (indexed by `row`, `col`)
    pub cells: Array2<u32>,

    /// Side length of a cell in feet
    pub resolution: f64,

    /// Plot the grid covers
    pub plot: Plot,
}

impl OccupancyGrid {
    /// Create an empty grid covering the plot
    ///
    /// Non-positive resolutions fall back to one foot, and cells grow so no
    /// side holds more than [`MAX_GRID_CELLS_PER_SIDE`] of them.
    pub fn new(plot: Plot, resolution: f64) -> Self {
        let resolution = (if resolution > 0.0 { resolution } else { 1.0 })
            .max(plot.width / MAX_GRID_CELLS_PER_SIDE)
            .max(plot.height / MAX_GRID_CELLS_PER_SIDE);
        let rows = (plot.height.max(0.0) / resolution).ceil() as usize;
        let cols = (plot.width.max(0.0) / resolution).ceil() as usize;

        Self {
            cells: Array2::from_elem((rows, cols), FREE_CELL),
            resolution,
            plot,
        }
    }

    /// Number of cell rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of cell columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell ranges covered by a rectangle, clipped to the grid
    fn cell_spans(&self, rect: &Rect) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let to_start = |v: f64| (v / self.resolution).floor().max(0.0) as usize;
        let to_end = |v: f64| (v / self.resolution).ceil().max(0.0) as usize;

        let row_start = to_start(rect.y).min(self.rows());
        let row_end = to_end(rect.bottom()).min(self.rows());
        let col_start = to_start(rect.x).min(self.cols());
        let col_end = to_end(rect.right()).min(self.cols());

        (row_start..row_end, col_start..col_end)
    }

    /// Claim every free cell covered by `rect` for room `room_index`
    pub fn mark(&mut self, rect: &Rect, room_index: usize) {
        let owner = room_index as u32 + 1;
        let (rows, cols) = self.cell_spans(rect);
        for row in rows {
            for col in cols.clone() {
                if let Some(cell) = self.cells.get_mut([row, col]) {
                    if *cell == FREE_CELL {
                        *cell = owner;
                    }
                }
            }
        }
    }

    /// Whether `rect` is inside the plot and touches no claimed cell
    pub fn is_free(&self, rect: &Rect) -> bool {
        if !self.plot.contains(rect) {
            return false;
        }

        let (mut rows, cols) = self.cell_spans(rect);
        rows.all(|row| {
            cols.clone().all(|col| {
                self.cells
                    .get([row, col])
                    .is_some_and(|&cell| cell == FREE_CELL)
            })
        })
    }

    /// Room index owning a cell, if any
    pub fn owner(&self, row: usize, col: usize) -> Option<usize> {
        self.cells
            .get([row, col])
            .copied()
            .filter(|&cell| cell != FREE_CELL)
            .map(|cell| (cell - 1) as usize)
    }

    /// Every in-plot position of a `width` x `height` rectangle on the grid,
    /// in row-major order from the north-west corner
    pub fn positions(&self, width: f64, height: f64) -> impl Iterator<Item = Rect> + '_ {
        let max_row = ((self.plot.height - height) / self.resolution).floor();
        let max_col = ((self.plot.width - width) / self.resolution).floor();
        let (rows, cols) = if max_row >= 0.0 && max_col >= 0.0 {
            (max_row as usize + 1, max_col as usize + 1)
        } else {
            (0, 0)
        };

        (0..rows).flat_map(move |row| {
            (0..cols).map(move |col| {
                Rect::new(
                    col as f64 * self.resolution,
                    row as f64 * self.resolution,
                    width,
                    height,
                )
            })
        })
    }

    /// First free position in row-major scan order
    ///
    /// `accept` can veto positions the grid considers free.
    pub fn first_free_position(
        &self,
        width: f64,
        height: f64,
        mut accept: impl FnMut(&Rect) -> bool,
    ) -> Option<Rect> {
        self.positions(width, height)
            .find(|candidate| self.is_free(candidate) && accept(candidate))
    }
}
