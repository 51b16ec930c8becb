//! Direction-biased greedy placement with adjacency overrides
//!
//! Rooms are placed one at a time in priority order. For each room the
//! placer builds a list of candidate rectangles:
//!
//! 1. Positions flush against an already placed preferred neighbour
//! 2. Anchors of the room's compass zone
//!
//! Candidates touching an avoided neighbour go to the back of the list, and
//! the first candidate that is inside the plot and free wins. If none is,
//! the first candidate is nudged across the plot for a bounded number of
//! attempts, then the occupancy grid and the positions flush with placed
//! rooms are scanned for any free slot. Rooms with neither a direction nor
//! a placed preferred neighbour start at the scan. A room that still has
//! nowhere to go takes the position overlapping the least and is tagged
//! [`Placement::Degraded`].
//!
//! Anchored rooms can split the free space so later rooms no longer fit.
//! When a pass degrades rooms, the next pass places those rooms first, up to
//! the configured number of passes. If every pass degrades and a shelf
//! packing of the same rooms is clean, the shelf packing is used instead.

use crate::algorithm::anchors::{direction_anchors, entrance_anchor, flush_candidates};
use crate::algorithm::executor::LayoutConfig;
use crate::algorithm::ordering::placement_order;
use crate::algorithm::rows::pack_shelves;
use crate::rooms::kind::RoomType;
use crate::rooms::layout::{Layout, PlacedRoom, Placement};
use crate::rooms::request::RoomRequest;
use crate::spatial::geometry::{GEOMETRY_EPSILON, Rect};
use crate::spatial::grid::OccupancyGrid;
use crate::spatial::plot::Plot;

/// Incremental state of one directional placement pass
#[derive(Debug, Clone)]
pub struct DirectionalPlacer<'a> {
    plot: Plot,
    config: &'a LayoutConfig,
    placed: Vec<PlacedRoom>,
    grid: OccupancyGrid,
}

impl<'a> DirectionalPlacer<'a> {
    /// Start an empty pass over a plot
    pub fn new(plot: Plot, config: &'a LayoutConfig) -> Self {
        Self {
            plot,
            config,
            placed: Vec::new(),
            grid: OccupancyGrid::new(plot, config.grid_resolution),
        }
    }

    /// Rooms placed so far, in placement order
    pub fn placed(&self) -> &[PlacedRoom] {
        &self.placed
    }

    /// Record a room whose position is already decided
    pub fn commit(&mut self, room: PlacedRoom) {
        self.grid.mark(&room.rect, self.placed.len());
        self.placed.push(room);
    }

    /// Requested size shrunk to the allowed share of the plot
    pub fn fit_to_plot(&self, request: &RoomRequest) -> (f64, f64) {
        let fraction = self.config.max_room_plot_fraction;
        (
            request.width.min(self.plot.width * fraction).max(0.0),
            request.height.min(self.plot.height * fraction).max(0.0),
        )
    }

    /// Inside the plot and overlapping no placed room
    fn is_free(&self, rect: &Rect) -> bool {
        self.plot.contains(rect) && !self.placed.iter().any(|room| room.rect.overlaps(rect))
    }

    /// Shares a wall with a room that either side wants to avoid
    fn touches_avoided(&self, request: &RoomRequest, rect: &Rect) -> bool {
        self.placed.iter().any(|room| {
            let avoided = request.adjacency.avoided.contains(&room.room_type())
                || room.request.adjacency.avoided.contains(&request.room_type);
            avoided && room.rect.touches(rect)
        })
    }

    fn first_placed(&self, room_type: RoomType) -> Option<&PlacedRoom> {
        self.placed.iter().find(|room| room.room_type() == room_type)
    }

    /// Candidate rectangles in preference order, before avoidance reordering
    fn candidates(&self, request: &RoomRequest, width: f64, height: f64) -> Vec<(Rect, Placement)> {
        let mut candidates = Vec::new();

        for &neighbor_type in &request.adjacency.preferred {
            if let Some(neighbor) = self.first_placed(neighbor_type) {
                candidates.extend(
                    flush_candidates(&neighbor.rect, width, height)
                        .into_iter()
                        .filter(|rect| self.plot.contains(rect))
                        .map(|rect| (rect, Placement::Adjacent)),
                );
            }
        }

        if let Some(direction) = request.direction {
            if request.room_type == RoomType::Entrance {
                let (x, y) = entrance_anchor(direction, self.plot, width, height);
                candidates.push((
                    self.plot.clamp(&Rect::new(x, y, width, height)),
                    Placement::Anchored,
                ));
            } else {
                candidates.extend(
                    direction_anchors(direction, self.plot, self.config)
                        .into_iter()
                        .map(|(x, y)| {
                            (
                                self.plot.clamp(&Rect::new(x, y, width, height)),
                                Placement::Anchored,
                            )
                        }),
                );
            }
        }

        candidates
    }

    /// Shift `seed` by a fraction of its own size, wrapping into rows
    fn nudge(&self, request: &RoomRequest, seed: &Rect) -> Option<Rect> {
        let step_x = self.config.nudge_fraction * seed.width;
        let step_y = self.config.nudge_fraction * seed.height;
        let (mut x, mut y) = (seed.x, seed.y);

        for attempt in 1..=self.config.max_nudge_attempts {
            x += step_x;
            if x + seed.width > self.plot.width {
                x = 0.0;
                y += step_y;
                if y + seed.height > self.plot.height {
                    y = 0.0;
                }
            }

            let candidate = self.plot.clamp(&seed.at(x, y));
            if self.is_free(&candidate) && !self.touches_avoided(request, &candidate) {
                tracing::trace!(room = %request.label(), attempt, "nudge found a free position");
                return Some(candidate);
            }
        }

        None
    }

    /// Positions flush with a plot edge or a placed room on both axes, in
    /// row-major order
    ///
    /// These catch free slots that do not start on a grid line.
    fn contact_positions(&self, width: f64, height: f64) -> Vec<Rect> {
        let mut xs = vec![0.0, self.plot.width - width];
        let mut ys = vec![0.0, self.plot.height - height];
        for room in &self.placed {
            xs.extend([room.rect.right(), room.rect.x - width]);
            ys.extend([room.rect.bottom(), room.rect.y - height]);
        }
        let xs = offsets_within(xs, self.plot.width - width);
        let ys = offsets_within(ys, self.plot.height - height);

        ys.iter()
            .flat_map(|&y| xs.iter().map(move |&x| Rect::new(x, y, width, height)))
            .collect()
    }

    /// Scan for a free slot, honouring avoided neighbours if possible
    fn scan(&self, request: &RoomRequest, width: f64, height: f64) -> Option<Rect> {
        let contacts = self.contact_positions(width, height);
        let free = |rect: &Rect| self.is_free(rect);
        let honoured = |rect: &Rect| self.is_free(rect) && !self.touches_avoided(request, rect);

        self.grid
            .first_free_position(width, height, honoured)
            .or_else(|| contacts.iter().copied().find(|rect| honoured(rect)))
            .or_else(|| self.grid.first_free_position(width, height, free))
            .or_else(|| contacts.iter().copied().find(|rect| free(rect)))
    }

    /// In-plot position with the smallest overlap with placed rooms, `seed`
    /// winning ties
    fn least_overlap(&self, seed: Option<Rect>, width: f64, height: f64) -> Rect {
        let overlap = |rect: &Rect| -> f64 {
            self.placed
                .iter()
                .map(|room| room.rect.intersection_area(rect))
                .sum()
        };

        let candidates = seed
            .map(|seed| self.plot.clamp(&seed))
            .into_iter()
            .chain(self.grid.positions(width, height))
            .chain(self.contact_positions(width, height));

        let mut best: Option<(Rect, f64)> = None;
        for rect in candidates {
            let area = overlap(&rect);
            if best.is_none_or(|(_, least)| area < least - GEOMETRY_EPSILON) {
                best = Some((rect, area));
            }
        }

        best.map_or_else(
            || self.plot.clamp(&Rect::new(0.0, 0.0, width, height)),
            |(rect, _)| rect,
        )
    }

    /// Choose a rectangle for `request`, record it and report how it was found
    pub fn place(&mut self, request: &RoomRequest) -> Placement {
        let (width, height) = self.fit_to_plot(request);
        let candidates = self.candidates(request, width, height);

        // Rooms without any candidate go straight to the grid scan
        let seed = candidates.first().map(|(rect, _)| *rect);

        // Stable partition: candidates next to avoided rooms are tried last
        let mut ordered = candidates;
        ordered.sort_by_key(|(rect, _)| self.touches_avoided(request, rect));

        let (rect, placement) = ordered
            .into_iter()
            .find(|(rect, _)| self.is_free(rect))
            .or_else(|| {
                seed.and_then(|seed| self.nudge(request, &seed))
                    .map(|rect| (rect, Placement::Nudged))
            })
            .or_else(|| {
                self.scan(request, width, height)
                    .map(|rect| (rect, Placement::Scanned))
            })
            .unwrap_or_else(|| (self.least_overlap(seed, width, height), Placement::Degraded));

        tracing::debug!(
            room = %request.label(),
            x = rect.x,
            y = rect.y,
            ?placement,
            "placed room"
        );

        self.commit(PlacedRoom {
            request: request.clone(),
            rect,
            placement,
        });
        placement
    }

    /// Finish the pass
    pub fn into_layout(self) -> Layout {
        Layout::new(self.plot, self.placed)
    }
}

/// Sorted, deduplicated offsets that keep a room inside `0..=limit`
fn offsets_within(mut values: Vec<f64>, limit: f64) -> Vec<f64> {
    values.retain(|value| (-GEOMETRY_EPSILON..=limit + GEOMETRY_EPSILON).contains(value));
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| (*a - *b).abs() <= GEOMETRY_EPSILON);
    values
}

/// One greedy pass over `requests` in the given order
fn directional_pass(
    requests: &[RoomRequest],
    order: &[usize],
    plot: Plot,
    fixed: &[PlacedRoom],
    config: &LayoutConfig,
) -> Layout {
    let mut placer = DirectionalPlacer::new(plot, config);
    for room in fixed {
        placer.commit(room.clone());
    }

    for &index in order {
        if let Some(request) = requests.get(index) {
            placer.place(request);
        }
    }

    placer.into_layout()
}

/// Request indices of the degraded rooms of a pass, in placement order
fn degraded_requests(layout: &Layout, order: &[usize], fixed: usize) -> Vec<usize> {
    order
        .iter()
        .zip(layout.rooms.iter().skip(fixed))
        .filter(|(_, room)| room.placement.is_degraded())
        .map(|(&index, _)| index)
        .collect()
}

/// Place `requests` around `fixed` rooms with the directional engine
///
/// Fixed rooms keep their rectangles, appear first in the layout and act as
/// placed neighbours for adjacency. The remaining rooms follow in the order
/// of the pass that was kept.
pub fn place_directional(
    requests: &[RoomRequest],
    plot: Plot,
    fixed: &[PlacedRoom],
    config: &LayoutConfig,
) -> Layout {
    let mut order = placement_order(requests);
    let mut best = directional_pass(requests, &order, plot, fixed, config);
    let mut stuck = degraded_requests(&best, &order, fixed.len());

    for pass in 2..=config.max_layout_passes {
        if stuck.is_empty() {
            break;
        }

        let retry: Vec<usize> = stuck
            .iter()
            .copied()
            .chain(order.iter().copied().filter(|index| !stuck.contains(index)))
            .collect();
        if retry == order {
            break;
        }

        tracing::debug!(pass, degraded = stuck.len(), "retrying with degraded rooms placed first");
        order = retry;
        let layout = directional_pass(requests, &order, plot, fixed, config);
        stuck = degraded_requests(&layout, &order, fixed.len());
        if layout.degraded_count() < best.degraded_count() {
            best = layout;
        }
    }

    if best.degraded_count() > 0 {
        let shelves = pack_shelves(requests, plot, fixed, config);
        if shelves.degraded_count() == 0 {
            tracing::info!(
                degraded = best.degraded_count(),
                "compass zones leave no room, using shelf packing"
            );
            return shelves;
        }
    }

    for room in best.rooms.iter().filter(|room| room.placement.is_degraded()) {
        tracing::warn!(
            room = %room.request.label(),
            x = room.x(),
            y = room.y(),
            "no free position, accepting an overlapping placement"
        );
    }

    best
}
