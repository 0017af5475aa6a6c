//! Straight segment.

use bezier_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::SegmentCurve;
use crate::anchor::Anchor;

/// A straight segment: constant direction, zero curvature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSegment {
    pub start: Anchor,
    pub end: Anchor,
}

impl LinearSegment {
    pub fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }
}

impl SegmentCurve for LinearSegment {
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
        Some(vec![self.start.position, self.end.position])
    }

    fn point_at(&self, t: f64) -> Point2 {
        self.start.position.lerp(self.end.position, t)
    }

    fn direction(&self, _t: f64) -> Vector2 {
        (self.end.position - self.start.position).normalize()
    }

    fn curvature(&self, _t: f64) -> f64 {
        0.0
    }

    fn drawing_command(&self) -> String {
        format!("L {} {}", self.end.position.x, self.end.position.y)
    }
}
