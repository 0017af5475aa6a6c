//! Quadratic segment whose interior point sits where the anchor tangents meet.

use bezier_math::{Point2, Ray2, Vector2};
use serde::{Deserialize, Serialize};

use super::SegmentCurve;
use crate::anchor::Anchor;
use crate::bezier::{quadratic_derivatives, quadratic_point, signed_curvature};

/// A quadratic Bezier constrained by the tangents of both anchors.
///
/// Parallel tangents have no intersection; the control point then comes out
/// non-finite and so does everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticSegment {
    pub start: Anchor,
    pub end: Anchor,
}

impl QuadraticSegment {
    pub fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    /// Intersection of the start and end tangent lines.
    pub fn control_point(&self) -> Point2 {
        let start_ray = Ray2 {
            origin: self.start.position,
            direction: self.start.tangent,
        };
        let end_ray = Ray2 {
            origin: self.end.position,
            direction: self.end.tangent,
        };
        end_ray.intersect(&start_ray)
    }

    fn points(&self) -> [Point2; 3] {
        [self.start.position, self.control_point(), self.end.position]
    }
}

impl SegmentCurve for QuadraticSegment {
    fn start(&self) -> &Anchor {
        &self.start
    }

    fn end(&self) -> &Anchor {
        &self.end
    }

    fn anchors_mut(&mut self) -> (&mut Anchor, &mut Anchor) {
        (&mut self.start, &mut self.end)
    }

    fn control_points(&self) -> Option<Vec<Point2>> {
        Some(self.points().to_vec())
    }

    fn point_at(&self, t: f64) -> Point2 {
        quadratic_point(&self.points(), t)
    }

    fn direction(&self, t: f64) -> Vector2 {
        quadratic_derivatives(&self.points(), t).0.normalize()
    }

    fn curvature(&self, t: f64) -> f64 {
        let (d1, d2) = quadratic_derivatives(&self.points(), t);
        signed_curvature(d1, d2)
    }

    fn drawing_command(&self) -> String {
        let q = self.control_point();
        format!(
            "Q {} {} {} {}",
            q.x, q.y, self.end.position.x, self.end.position.y
        )
    }
}
