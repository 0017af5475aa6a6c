//! Planar vector helpers on top of `glam::DVec2`.
//!
//! A vector is also read as the complex number `x + iy`, which gives
//! reflections and rotations without building matrices.

use crate::Vector2;

/// Operations the curve editor needs that `DVec2` does not provide directly.
pub trait Vec2Ext {
    /// 2D cross product (determinant `self.x * rhs.y - self.y * rhs.x`).
    fn cross(self, rhs: Vector2) -> f64;

    /// Complex multiplication.
    fn complex_mul(self, rhs: Vector2) -> Vector2;

    /// Complex division. Dividing by the zero vector yields non-finite components.
    fn complex_div(self, rhs: Vector2) -> Vector2;

    /// Rotate counter-clockwise by `angle` radians.
    fn rotated(self, angle: f64) -> Vector2;

    /// Angle of the vector from the positive x axis, in `(-PI, PI]`.
    fn arg(self) -> f64;

    /// Unit vector in direction `angle`.
    fn from_arg(angle: f64) -> Vector2;
}

impl Vec2Ext for Vector2 {
    fn cross(self, rhs: Vector2) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    fn complex_mul(self, rhs: Vector2) -> Vector2 {
        Vector2::new(
            self.x * rhs.x - self.y * rhs.y,
            self.x * rhs.y + self.y * rhs.x,
        )
    }

    fn complex_div(self, rhs: Vector2) -> Vector2 {
        let d = rhs.length_squared();
        Vector2::new(
            (self.x * rhs.x + self.y * rhs.y) / d,
            (self.y * rhs.x - self.x * rhs.y) / d,
        )
    }

    fn rotated(self, angle: f64) -> Vector2 {
        self.complex_mul(Vector2::from_arg(angle))
    }

    fn arg(self) -> f64 {
        self.y.atan2(self.x)
    }

    fn from_arg(angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(cos, sin)
    }
}
