//! Owned pixel grid that the rasterizer draws into.
//!
//! Coordinates are top-left origin while drawing: `(0, 0)` is the first
//! pixel of the first row. [`FrameBuffer::flip_vertically`] converts to the
//! bottom-left origin convention before the image is encoded.

use std::path::Path;

use crate::colors::{self, Color};
use crate::error::Result;

/// A fixed-size, row-major grid of RGBA pixels.
///
/// The size is set at construction and never changes. All access is
/// bounds-checked: writes outside the grid are rejected rather than
/// wrapping into a neighbouring row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a buffer filled with [`colors::BACKGROUND`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![colors::BACKGROUND; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set the pixel at (x, y).
    ///
    /// Returns `false` and leaves the buffer untouched when the coordinates
    /// fall outside it. Interior writes may ignore the result; writes from
    /// untrusted coordinates should check it.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.pixels[idx] = color;
                true
            }
            None => false,
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Reverse the row order in place.
    pub fn flip_vertically(&mut self) {
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        let rows = self.height as usize;
        for top in 0..rows / 2 {
            let bottom = rows - 1 - top;
            let (upper, lower) = self.pixels.split_at_mut(bottom * width);
            upper[top * width..(top + 1) * width].swap_with_slice(&mut lower[..width]);
        }
    }

    /// Count pixels equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Row-major 24-bit RGB bytes, alpha dropped.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgb()).collect()
    }

    /// Encode the buffer as a 24-bit RGB image.
    ///
    /// The format is picked from the file extension (`.tga`, `.png`,
    /// `.bmp`, ...). The buffer is written as-is; flip it first if the
    /// file should have a bottom-left origin.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.to_rgb_bytes(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )?;
        log::debug!(
            "wrote {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn new_buffer_is_background() {
        let fb = FrameBuffer::new(7, 5);
        assert_eq!((fb.width(), fb.height()), (7, 5));
        assert_eq!(fb.count(colors::BACKGROUND), 35);
        assert_eq!(fb.to_rgb_bytes().len(), 7 * 5 * 3);
    }

    #[test]
    fn set_and_get_in_bounds() {
        let mut fb = FrameBuffer::new(4, 3);
        assert!(fb.set(3, 2, Color::RED));
        assert_eq!(fb.get(3, 2), Some(Color::RED));
        assert_eq!(fb.get(0, 0), Some(colors::BACKGROUND));
    }

    #[test]
    fn out_of_bounds_writes_are_rejected() {
        let mut fb = FrameBuffer::new(4, 3);
        let before = fb.clone();
        assert!(!fb.set(4, 0, Color::RED));
        assert!(!fb.set(0, 3, Color::RED));
        assert!(!fb.set(-1, 1, Color::RED));
        assert!(!fb.set(1, -1, Color::RED));
        assert_eq!(fb, before);
        assert_eq!(fb.get(-1, 0), None);
        assert_eq!(fb.get(4, 0), None);
    }

    #[test]
    fn row_overflow_does_not_wrap() {
        // x == width must not land on the first pixel of the next row
        let mut fb = FrameBuffer::new(2, 2);
        assert!(!fb.set(2, 0, Color::WHITE));
        assert_eq!(fb.get(0, 1), Some(colors::BACKGROUND));
    }

    #[test]
    fn flip_reverses_rows() {
        let mut fb = FrameBuffer::new(2, 3);
        fb.set(0, 0, Color::RED);
        fb.set(1, 1, Color::WHITE);
        fb.flip_vertically();
        assert_eq!(fb.get(0, 2), Some(Color::RED));
        assert_eq!(fb.get(0, 0), Some(colors::BACKGROUND));
        // the middle row of an odd-height buffer stays put
        assert_eq!(fb.get(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn flip_twice_is_identity() {
        let mut fb = FrameBuffer::new(5, 4);
        for i in 0..5 {
            fb.set(i, i % 4, Color::rgb(i as u8 * 40, 0, 0));
        }
        let original = fb.clone();
        fb.flip_vertically();
        assert_ne!(fb, original);
        fb.flip_vertically();
        assert_eq!(fb, original);
    }

    #[test]
    fn clear_and_count() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.set(1, 1, Color::RED);
        assert_eq!(fb.count(Color::RED), 1);
        fb.clear(Color::WHITE);
        assert_eq!(fb.count(Color::WHITE), 9);
    }

    #[test]
    fn rgb_bytes_are_row_major() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set(1, 0, Color::rgb(1, 2, 3));
        assert_eq!(fb.to_rgb_bytes(), vec![0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn write_file_round_trips() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(2, 1, Color::rgb(10, 20, 30));
        let path = std::env::temp_dir().join("softraster_framebuffer_round_trip.png");
        fb.write_file(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1).0, [10, 20, 30]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let fb = FrameBuffer::new(1, 1);
        let path = std::env::temp_dir()
            .join("softraster_no_such_dir")
            .join("out.tga");
        let err = fb.write_file(path).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }
}
