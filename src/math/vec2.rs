use std::ops::{Add, Index, IndexMut, Mul, Sub};

use super::Scalar;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub type Vec2i = Vec2<i32>;
pub type Vec2f = Vec2<f32>;

impl<T: Scalar> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Swap the two components. Used by the line walker to treat a steep
    /// line as a shallow one.
    pub fn transpose(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// Widen to `f64` so products of coordinates cannot overflow.
    pub fn to_f64(&self) -> Vec2<f64> {
        Vec2::new(self.x.to_f64(), self.y.to_f64())
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Component access by axis: 0 = x, 1 = y.
impl<T> Index<usize> for Vec2<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 axis out of range: {axis}"),
        }
    }
}

impl<T> IndexMut<usize> for Vec2<T> {
    fn index_mut(&mut self, axis: usize) -> &mut T {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 axis out of range: {axis}"),
        }
    }
}
