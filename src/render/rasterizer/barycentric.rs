//! Barycentric triangle rasterization.
//!
//! The fill walks every pixel in the triangle's bounding box and keeps the
//! ones whose barycentric weights are all non-negative.
//!
//! # Barycentric weights
//!
//! For triangle `ABC` and point `P`, the weights `(w_a, w_b, w_c)` satisfy
//! `P = w_a*A + w_b*B + w_c*C` with `w_a + w_b + w_c = 1`. Writing
//! `P = A + u*AB + v*AC` gives the 2x2 system
//!
//! ```text
//! u*AB.x + v*AC.x + PA.x = 0
//! u*AB.y + v*AC.y + PA.y = 0
//! ```
//!
//! so `(v, u, 1)` is orthogonal to both `(AC.x, AB.x, PA.x)` and
//! `(AC.y, AB.y, PA.y)`, i.e. parallel to their cross product. Dividing the
//! cross product by its z component yields `u` and `v`, and the weights are
//! `(1 - u - v, u, v)`.
//!
//! The z component is twice the signed area of the triangle. It does not
//! depend on `P`, so a degenerate triangle is detected once and skipped.
//!
//! Coordinates are widened to `f64` before the cross product: two `i32`
//! spans multiplied together overflow `i32`, and `f64` stays exact for
//! spans up to 2^26 pixels.

use crate::colors::Color;
use crate::math::{Vec2i, Vec3, Vec3f};
use crate::render::framebuffer::FrameBuffer;

/// Twice-area below which a triangle counts as degenerate.
///
/// With integer vertices twice the area is itself an integer, so anything
/// below 1 is exactly zero.
pub const DEGENERATE_AREA_EPSILON: f32 = 1.0;

/// Barycentric weights of `p` with respect to triangle `(a, b, c)`.
///
/// Returns `None` for a degenerate (zero-area) triangle. The weights sum
/// to 1 and are all `>= 0` exactly when `p` is inside the triangle or on
/// its boundary.
pub fn barycentric(a: Vec2i, b: Vec2i, c: Vec2i, p: Vec2i) -> Option<Vec3f> {
    weights(a, b, c, p).map(|w| Vec3f::new(w.x as f32, w.y as f32, w.z as f32))
}

fn weights(a: Vec2i, b: Vec2i, c: Vec2i, p: Vec2i) -> Option<Vec3<f64>> {
    let [a, b, c, p] = [a, b, c, p].map(|v| v.to_f64());
    let u = Vec3::new(c.x - a.x, b.x - a.x, a.x - p.x)
        .cross(Vec3::new(c.y - a.y, b.y - a.y, a.y - p.y));
    if u.z.abs() < f64::from(DEGENERATE_AREA_EPSILON) {
        return None;
    }
    Some(Vec3::new(1.0 - (u.x + u.y) / u.z, u.y / u.z, u.x / u.z))
}

/// Fill a triangle with a single color.
///
/// The bounding box is clamped to the buffer before iterating, so no pixel
/// outside the buffer is ever visited. Boundary pixels are included. A
/// degenerate triangle writes nothing.
///
/// Returns the number of pixels written.
pub fn fill_triangle(points: [Vec2i; 3], buffer: &mut FrameBuffer, color: Color) -> usize {
    let [a, b, c] = points;

    // ─────────────────────────────────────────────────────────────────────
    // Step 1: Reject zero-area triangles
    // ─────────────────────────────────────────────────────────────────────
    if weights(a, b, c, a).is_none() {
        log::trace!("skipping degenerate triangle {a:?} {b:?} {c:?}");
        return 0;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Step 2: Compute bounding box, clipped to buffer bounds
    // ─────────────────────────────────────────────────────────────────────
    let min_x = a.x.min(b.x).min(c.x).max(0);
    let min_y = a.y.min(b.y).min(c.y).max(0);
    let max_x = a.x.max(b.x).max(c.x).min(buffer.width() as i32 - 1);
    let max_y = a.y.max(b.y).max(c.y).min(buffer.height() as i32 - 1);

    // ─────────────────────────────────────────────────────────────────────
    // Step 3: Test every pixel in the box
    // ─────────────────────────────────────────────────────────────────────
    let mut written = 0;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let inside = weights(a, b, c, Vec2i::new(x, y))
                .is_some_and(|w| w.x >= 0.0 && w.y >= 0.0 && w.z >= 0.0);
            if inside && buffer.set(x, y, color) {
                written += 1;
            }
        }
    }
    written
}
