use crate::colors::Color;
use crate::math::Vec2i;
use crate::render::framebuffer::FrameBuffer;

/// Draw a straight line from `p0` to `p1`, both endpoints included.
///
/// The walk always advances one pixel per step along the dominant axis, so
/// there are no gaps. A steep line (`|dy| > |dx|`) is walked with the axes
/// transposed. Endpoints are ordered by the dominant axis before walking,
/// which makes the output independent of argument order. The minor axis is
/// linearly interpolated and rounded to the nearest pixel.
///
/// Only the steps whose dominant coordinate lies inside the buffer are
/// walked. Arithmetic is done in `i64`/`f64`, so any pair of `i32` points
/// is accepted.
///
/// Returns the number of pixels written; points that fall outside the
/// buffer are rejected by [`FrameBuffer::set`] and not counted.
pub fn draw_line(p0: Vec2i, p1: Vec2i, buffer: &mut FrameBuffer, color: Color) -> usize {
    let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
    let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();
    let steep = dy > dx;
    let (mut start, mut end) = if steep {
        (p0.transpose(), p1.transpose())
    } else {
        (p0, p1)
    };
    if start.x > end.x {
        std::mem::swap(&mut start, &mut end);
    }

    let limit = if steep { buffer.height() } else { buffer.width() };
    let first = start.x.max(0);
    let last = end.x.min(limit as i32 - 1);

    let span = i64::from(end.x) - i64::from(start.x);
    let mut written = 0;
    for x in first..=last {
        // span == 0 only for a single-point line
        let y = if span == 0 {
            start.y
        } else {
            let t = (i64::from(x) - i64::from(start.x)) as f64 / span as f64;
            (f64::from(start.y) * (1.0 - t) + f64::from(end.y) * t).round() as i32
        };

        let plotted = if steep {
            buffer.set(y, x, color)
        } else {
            buffer.set(x, y, color)
        };
        if plotted {
            written += 1;
        }
    }
    written
}
