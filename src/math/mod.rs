//! Small fixed-size vector types used throughout the pipeline.
//!
//! Both [`Vec2`] and [`Vec3`] are generic over their component type so the
//! same code serves integer screen coordinates and floating-point model
//! coordinates. Rounding from float to integer happens in exactly one place,
//! [`crate::render::to_screen`].

pub mod vec2;
pub mod vec3;

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub use vec2::{Vec2, Vec2f, Vec2i};
pub use vec3::{Vec3, Vec3f, Vec3i};

/// Numeric component type of a vector.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;

    /// Widen to `f64`, exact for every `i32` and `f32`.
    fn to_f64(self) -> f64;
}

impl Scalar for i32 {
    const ZERO: Self = 0;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}
