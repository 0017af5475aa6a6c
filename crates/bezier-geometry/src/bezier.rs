//! Bernstein-form evaluation of quadratic and cubic Bezier curves.

use bezier_math::{Point2, Vec2Ext, Vector2};

pub fn quadratic_point(p: &[Point2; 3], t: f64) -> Point2 {
    let mt = 1.0 - t;
    p[0] * (mt * mt) + p[1] * (2.0 * mt * t) + p[2] * (t * t)
}

/// First and second derivatives of a quadratic Bezier at `t`.
pub fn quadratic_derivatives(p: &[Point2; 3], t: f64) -> (Vector2, Vector2) {
    let d1 = (p[2] - p[1]) * (2.0 * t) + (p[1] - p[0]) * (2.0 * (1.0 - t));
    let d2 = (p[2] - p[1] * 2.0 + p[0]) * 2.0;
    (d1, d2)
}

pub fn cubic_point(p: &[Point2; 4], t: f64) -> Point2 {
    let mt = 1.0 - t;
    p[0] * (mt * mt * mt) + p[1] * (3.0 * mt * mt * t) + p[2] * (3.0 * mt * t * t) + p[3] * (t * t * t)
}

/// First and second derivatives of a cubic Bezier at `t`.
pub fn cubic_derivatives(p: &[Point2; 4], t: f64) -> (Vector2, Vector2) {
    let mt = 1.0 - t;
    let d1 = (p[3] - p[2]) * (3.0 * t * t)
        + (p[2] - p[1]) * (6.0 * t * mt)
        + (p[1] - p[0]) * (3.0 * mt * mt);
    let d2 = (p[3] - p[2] * 2.0 + p[1]) * (6.0 * t) + (p[2] - p[1] * 2.0 + p[0]) * (6.0 * mt);
    (d1, d2)
}

/// Signed curvature from the first two derivatives, positive when turning counter-clockwise.
pub fn signed_curvature(d1: Vector2, d2: Vector2) -> f64 {
    let speed = d1.length();
    d1.cross(d2) / (speed * speed * speed)
}
