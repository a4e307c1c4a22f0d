//! RGBA color values and the named colors used by the renderer.

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque gray whose channels are `intensity * 255`.
    ///
    /// Intensity is clamped to `[0, 1]` first, so callers may pass a raw
    /// light dot product.
    pub fn from_intensity(intensity: f32) -> Self {
        let level = (intensity.clamp(0.0, 1.0) * 255.0) as u8;
        Self::rgb(level, level, level)
    }

    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Background every render pass starts from.
pub const BACKGROUND: Color = Color::BLACK;
/// Edge color in wireframe mode.
pub const WIREFRAME: Color = Color::WHITE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_intensity_is_white() {
        assert_eq!(Color::from_intensity(1.0), Color::WHITE);
    }

    #[test]
    fn intensity_scales_each_channel() {
        assert_eq!(Color::from_intensity(0.5), Color::rgb(127, 127, 127));
    }

    #[test]
    fn intensity_out_of_range_is_clamped() {
        assert_eq!(Color::from_intensity(-0.3), Color::BLACK);
        assert_eq!(Color::from_intensity(4.0), Color::WHITE);
    }

    #[test]
    fn rgb_drops_alpha() {
        assert_eq!(Color::new(1, 2, 3, 4).to_rgb(), [1, 2, 3]);
    }
}
