//! Pixel-level drawing primitives.
//!
//! - [`to_screen`]: NDC to integer pixel coordinates, the only place floats
//!   are rounded to pixels
//! - [`draw_line`]: gap-free line between two pixels
//! - [`fill_triangle`]: bounding box iteration with barycentric inside tests
//!
//! Every primitive returns how many pixels it actually wrote, which the
//! engine aggregates into its render statistics.

mod barycentric;
mod line;

pub use barycentric::{barycentric, fill_triangle, DEGENERATE_AREA_EPSILON};
pub use line::draw_line;

use crate::math::{Vec2i, Vec3f};

/// Map a normalized-device-coordinate point into pixel space.
///
/// Each axis uses `round((ndc + 1) * dimension / 2)`; the result is then
/// clamped into `[0, dimension - 1]` so that the NDC edge `1.0`, which the
/// formula alone would place one pixel past the buffer, lands on the last
/// row or column. The z component is ignored.
pub fn to_screen(ndc: Vec3f, width: u32, height: u32) -> Vec2i {
    Vec2i::new(map_axis(ndc.x, width), map_axis(ndc.y, height))
}

#[inline]
fn map_axis(ndc: f32, dimension: u32) -> i32 {
    let pixel = ((ndc + 1.0) * dimension as f32 / 2.0).round() as i32;
    pixel.min(dimension as i32 - 1).max(0)
}
