//! Procedural test image, rendered when no model is supplied.

use crate::colors::Color;
use crate::render::FrameBuffer;

/// Side length of the patterned square.
pub const PATTERN_BLOCK: i32 = 700;

/// A square of [`PATTERN_BLOCK`] pixels centred in the buffer, pixel
/// `(x, y)` colored `(x % 256, y % 256, (x * y) % 256)`.
///
/// On a buffer smaller than the block the overhanging writes are rejected
/// by the buffer; they are reported once as a warning.
pub fn test_pattern(width: u32, height: u32) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(width, height);
    let center_x = width as i32 / 2;
    let center_y = height as i32 / 2;
    let half = PATTERN_BLOCK / 2;

    let mut rejected = 0usize;
    for x in center_x - half..=center_x + half {
        for y in center_y - half..=center_y + half {
            let color = Color::rgb(
                x.rem_euclid(256) as u8,
                y.rem_euclid(256) as u8,
                (x as i64 * y as i64).rem_euclid(256) as u8,
            );
            if !buffer.set(x, y, color) {
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        log::warn!(
            "test pattern does not fit a {width}x{height} image, {rejected} pixels dropped"
        );
    }
    buffer
}
