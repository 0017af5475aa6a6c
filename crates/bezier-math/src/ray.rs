use crate::{Point2, Vec2Ext, Vector2};
use serde::{Deserialize, Serialize};

/// A ray in the plane defined by origin and direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ray2 {
    pub origin: Point2,
    pub direction: Vector2,
}

impl Ray2 {
    pub fn new(origin: Point2, direction: Vector2) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at parameter t.
    pub fn at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }

    /// Parameter `t` at which `self.at(t)` lies on the line carrying `other`.
    ///
    /// Parallel directions divide by zero and yield `±inf` or `NaN`; callers
    /// decide how to treat that.
    pub fn intersection_param(&self, other: &Ray2) -> f64 {
        let p = self.origin - other.origin;
        -p.cross(other.direction) / self.direction.cross(other.direction)
    }

    /// Intersection point of the two carrying lines.
    pub fn intersect(&self, other: &Ray2) -> Point2 {
        self.at(self.intersection_param(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn test_at() {
        let ray = Ray2::new(dvec2(0.0, 0.0), dvec2(2.0, 0.0));
        let p = ray.at(5.0);
        assert!((p - dvec2(5.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_intersect() {
        let a = Ray2::new(dvec2(0.0, 0.0), dvec2(1.0, 0.0));
        let b = Ray2::new(dvec2(4.0, 3.0), dvec2(0.0, 1.0));
        let p = b.intersect(&a);
        assert!((p - dvec2(4.0, 0.0)).length() < 1e-10);
        // Behind the origin counts too: lines, not half-lines.
        assert!((b.intersection_param(&a) + 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_parallel_intersection_is_not_finite() {
        let a = Ray2::new(dvec2(0.0, 0.0), dvec2(1.0, 0.0));
        let b = Ray2::new(dvec2(0.0, 1.0), dvec2(1.0, 0.0));
        assert!(!b.intersection_param(&a).is_finite());
    }
}
