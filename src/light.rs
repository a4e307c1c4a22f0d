//! Lighting types for the renderer.

use crate::math::Vec3f;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// `direction` is the way the light travels, so the vector from a surface
/// toward the light source is `-direction`. A light with direction
/// `(0, 0, -1)` shines down the -z axis and fully lights faces whose normal
/// is `(0, 0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is pointing (not where it comes from).
    pub direction: Vec3f,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3f) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    /// Diffuse intensity for a face with the given unit normal.
    ///
    /// The raw cosine is returned unclamped: a value `<= 0` means the face
    /// looks away from the light, and the renderer culls it.
    pub fn intensity(&self, normal: Vec3f) -> f32 {
        (-self.direction).dot(normal)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3f::BACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_illumination() {
        // Light pointing toward -Z, normal facing +Z (toward the light)
        let light = DirectionalLight::new(Vec3f::new(0.0, 0.0, -1.0));
        let normal = Vec3f::new(0.0, 0.0, 1.0);
        assert_relative_eq!(light.intensity(normal), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_back_facing_is_negative() {
        // Light pointing toward -Z, normal facing -Z (away from light)
        let light = DirectionalLight::new(Vec3f::new(0.0, 0.0, -1.0));
        let normal = Vec3f::new(0.0, 0.0, -1.0);
        assert_relative_eq!(light.intensity(normal), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_angled_illumination() {
        // Light pointing straight down (-Y), normal at 45 degrees
        let light = DirectionalLight::new(Vec3f::new(0.0, -1.0, 0.0));
        let normal = Vec3f::new(0.0, 1.0, 1.0).normalize();
        // cos(45) ≈ 0.707
        assert_relative_eq!(light.intensity(normal), 0.707, epsilon = 0.01);
    }

    #[test]
    fn direction_is_normalized() {
        let light = DirectionalLight::new(Vec3f::new(0.0, 0.0, -5.0));
        assert_eq!(light.direction, Vec3f::BACK);
    }

    #[test]
    fn default_shines_down_negative_z() {
        assert_eq!(DirectionalLight::default().direction, Vec3f::BACK);
    }
}
