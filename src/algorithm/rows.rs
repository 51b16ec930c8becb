//! Row packing: the direction-agnostic alternate engine
//!
//! Rooms are sorted by area, largest first, and laid out left to right. When
//! the next room would overflow the plot width (or the row already holds the
//! configured number of rooms) a new row starts below the tallest room of
//! the current one.

use crate::algorithm::executor::LayoutConfig;
use crate::algorithm::ordering::{area_order, height_order};
use crate::rooms::layout::{Layout, PlacedRoom, Placement};
use crate::rooms::request::RoomRequest;
use crate::spatial::geometry::{GEOMETRY_EPSILON, Rect};
use crate::spatial::plot::Plot;

/// Cursor of the row currently being filled
#[derive(Debug, Clone, Copy, Default)]
struct RowCursor {
    x: f64,
    y: f64,
    height: f64,
    rooms: usize,
}

impl RowCursor {
    fn wrap(&mut self) {
        self.y += self.height;
        self.x = 0.0;
        self.height = 0.0;
        self.rooms = 0;
    }

    fn advance(&mut self, rect: &Rect) {
        self.x += rect.width;
        self.height = self.height.max(rect.height);
        self.rooms += 1;
    }
}

/// Pack `requests` into rows after the `fixed` rooms
///
/// Fixed rooms are copied into the layout unchanged; the packer does not
/// route around them, so packed rooms that end up on top of a fixed room,
/// or past the bottom of the plot, are tagged [`Placement::Degraded`].
pub fn pack_rows(
    requests: &[RoomRequest],
    plot: Plot,
    fixed: &[PlacedRoom],
    config: &LayoutConfig,
) -> Layout {
    let layout = pack(requests, &area_order(requests), plot, fixed, config);
    for room in layout.rooms.iter().filter(|room| room.placement.is_degraded()) {
        tracing::warn!(
            room = %room.request.label(),
            y = room.y(),
            "row packing overflowed the plot, clamping"
        );
    }
    layout
}

/// Shelf packing: rows filled tallest room first, without a per-row limit
///
/// Every row except the last is filled past `plot.width - s`, where `s` is
/// the widest room, and is no taller than the row above it. So without fixed
/// rooms, rooms whose sides are all at most `s` always fit when their total
/// area is at most `(plot.width - s) * (plot.height - s)`.
pub fn pack_shelves(
    requests: &[RoomRequest],
    plot: Plot,
    fixed: &[PlacedRoom],
    config: &LayoutConfig,
) -> Layout {
    let unlimited = LayoutConfig {
        max_rooms_per_row: None,
        ..config.clone()
    };
    pack(requests, &height_order(requests), plot, fixed, &unlimited)
}

fn pack(
    requests: &[RoomRequest],
    order: &[usize],
    plot: Plot,
    fixed: &[PlacedRoom],
    config: &LayoutConfig,
) -> Layout {
    let fraction = config.max_room_plot_fraction;
    let mut rooms: Vec<PlacedRoom> = fixed.to_vec();
    let mut cursor = RowCursor::default();

    for &index in order {
        let Some(request) = requests.get(index) else {
            continue;
        };

        let width = request.width.min(plot.width * fraction).max(0.0);
        let height = request.height.min(plot.height * fraction).max(0.0);

        let row_full = config
            .max_rooms_per_row
            .is_some_and(|limit| cursor.rooms >= limit);
        if cursor.rooms > 0 && (cursor.x + width > plot.width + GEOMETRY_EPSILON || row_full) {
            cursor.wrap();
        }

        let slot = Rect::new(cursor.x, cursor.y, width, height);
        cursor.advance(&slot);

        let blocked = fixed.iter().any(|room| room.rect.overlaps(&slot));
        let (rect, placement) = if plot.contains(&slot) && !blocked {
            (slot, Placement::Packed)
        } else {
            tracing::trace!(room = %request.label(), row_y = slot.y, "slot unavailable");
            (plot.clamp(&slot), Placement::Degraded)
        };

        rooms.push(PlacedRoom {
            request: request.clone(),
            rect,
            placement,
        });
    }

    Layout::new(plot, rooms)
}
