use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A planar point or offset in polygon-local space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0 };
    pub const DOWN: Self = Self { x: 0.0, y: -1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of `self` and `other`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    pub fn cross(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.dot(*self)
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    pub fn distance_squared(&self, other: Self) -> f32 {
        (other - *self).magnitude_squared()
    }

    /// Unsigned angle between two directions, in degrees within `[0, 180]`.
    ///
    /// Returns 0 when either vector has zero length.
    pub fn angle_to(&self, other: Self) -> f32 {
        if self.magnitude_squared() == 0.0 || other.magnitude_squared() == 0.0 {
            return 0.0;
        }
        self.cross(other).abs().atan2(self.dot(other)).to_degrees()
    }

    /// True when both vectors point in exactly the same direction.
    pub fn same_direction(&self, other: Self) -> bool {
        self.cross(other) == 0.0 && self.dot(other) > 0.0
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// Component-wise product, used for per-axis scaling.
impl Mul<Vec2> for Vec2 {
    type Output = Self;

    fn mul(self, other: Vec2) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic_operators() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, -2.0);

        assert_eq!(a + b, Vec2::new(4.0, 2.0));
        assert_eq!(a - b, Vec2::new(2.0, 6.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(a * b, Vec2::new(3.0, -8.0));
        assert_eq!(-a, Vec2::new(-3.0, -4.0));
        assert_relative_eq!(a.magnitude(), 5.0);
        assert_relative_eq!(a.dot(b), -5.0);
    }

    #[test]
    fn angle_is_unsigned_degrees() {
        assert_relative_eq!(Vec2::UP.angle_to(Vec2::RIGHT), 90.0, epsilon = 1e-4);
        assert_relative_eq!(Vec2::UP.angle_to(Vec2::LEFT), 90.0, epsilon = 1e-4);
        assert_relative_eq!(Vec2::UP.angle_to(Vec2::DOWN), 180.0, epsilon = 1e-4);
        assert_relative_eq!(Vec2::UP.angle_to(Vec2::new(1.0, 1.0)), 45.0, epsilon = 1e-4);
        assert_eq!(Vec2::UP.angle_to(Vec2::new(0.0, 7.0)), 0.0);
        assert_eq!(Vec2::ZERO.angle_to(Vec2::UP), 0.0);
    }

    #[test]
    fn same_direction_requires_collinear_and_forward() {
        let d = Vec2::new(2.0, 1.0);
        assert!(d.same_direction(Vec2::new(4.0, 2.0)));
        assert!(!d.same_direction(Vec2::new(-4.0, -2.0)));
        assert!(!d.same_direction(Vec2::new(4.0, 2.5)));
    }
}
