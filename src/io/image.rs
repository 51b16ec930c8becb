//! PNG export of floor layouts as occupancy rasters

use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::io::configuration::{MAX_PIXELS_PER_FOOT, MAX_RASTER_SIDE};
use crate::io::error::{PlannerError, Result, file_system_error, invalid_parameter};
use crate::rooms::layout::Layout;
use crate::spatial::geometry::Rect;

const EMPTY_PLOT: Rgba<u8> = Rgba([0xf3, 0xf4, 0xf6, 0xff]);
const DEGRADED_OUTLINE: Rgba<u8> = Rgba([0xdc, 0x26, 0x26, 0xff]);

/// Rasterise a layout at `pixels_per_foot`
///
/// Each pixel takes the colour of the room covering its centre; where rooms overlap
/// the room placed first wins. Degraded rooms get a red outline on top.
///
/// # Errors
///
/// Returns an error if the scale is zero or above the supported maximum, or
/// the raster would be larger than [`MAX_RASTER_SIDE`] pixels per side
pub fn render_layout(layout: &Layout, pixels_per_foot: u32) -> Result<RgbaImage> {
    if pixels_per_foot == 0 || pixels_per_foot > MAX_PIXELS_PER_FOOT {
        return Err(invalid_parameter(
            "pixels_per_foot",
            &pixels_per_foot,
            &format!("must be between 1 and {MAX_PIXELS_PER_FOOT}"),
        ));
    }

    let scale = f64::from(pixels_per_foot);
    let longest_side = layout.plot.width.max(layout.plot.height) * scale;
    if !longest_side.is_finite() || longest_side > f64::from(MAX_RASTER_SIDE) {
        return Err(invalid_parameter(
            "pixels_per_foot",
            &pixels_per_foot,
            &format!("raster would exceed {MAX_RASTER_SIDE} pixels per side"),
        ));
    }
    let width = (layout.plot.width * scale).round().max(0.0) as u32;
    let height = (layout.plot.height * scale).round().max(0.0) as u32;

    // Each pixel samples the plot at its centre
    let mut img = ImageBuffer::from_pixel(width, height, EMPTY_PLOT);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let feet_x = (f64::from(x) + 0.5) / scale;
        let feet_y = (f64::from(y) + 0.5) / scale;
        if let Some(room) = layout.room_at(feet_x, feet_y) {
            *pixel = Rgba(room.room_type().color());
        }
    }

    for room in layout.rooms.iter().filter(|room| room.placement.is_degraded()) {
        draw_outline(&mut img, &room.rect, scale, DEGRADED_OUTLINE);
    }

    Ok(img)
}

// One-pixel border along the rectangle edges, clipped to the image
fn draw_outline(img: &mut RgbaImage, rect: &Rect, scale: f64, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let to_px = |v: f64, limit: u32| ((v * scale).round().max(0.0) as u32).min(limit - 1);
    let left = to_px(rect.x, width);
    let right = to_px(rect.right(), width);
    let top = to_px(rect.y, height);
    let bottom = to_px(rect.bottom(), height);

    for x in left..=right {
        img.put_pixel(x, top, color);
        img.put_pixel(x, bottom, color);
    }
    for y in top..=bottom {
        img.put_pixel(left, y, color);
        img.put_pixel(right, y, color);
    }
}

/// Render a layout and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The scale is out of range
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(
    layout: &Layout,
    pixels_per_foot: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_layout(layout, pixels_per_foot)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| PlannerError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), "saved layout raster");
    Ok(())
}
