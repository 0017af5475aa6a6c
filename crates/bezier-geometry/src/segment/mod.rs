//! Segment variants and their shared contract.
//!
//! A segment never owns its anchors in a sketch. It works on copies, and
//! [`SegmentCurve::update`] writes the derived tangent and curvature back
//! into those copies for the caller to store.

mod cubic;
mod linear;
mod quadratic;

use bezier_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;

pub use cubic::{solve_handles, CubicSegment};
pub use linear::LinearSegment;
pub use quadratic::QuadraticSegment;

/// Which Bezier degree a segment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    Linear,
    Quadratic,
    Cubic,
}

/// Whether an update found control points satisfying the anchor constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feasibility {
    Feasible,
    Infeasible,
}

impl Feasibility {
    pub fn is_feasible(self) -> bool {
        self == Feasibility::Feasible
    }
}

/// Contract shared by every segment variant.
pub trait SegmentCurve {
    fn start(&self) -> &Anchor;

    fn end(&self) -> &Anchor;

    fn anchors_mut(&mut self) -> (&mut Anchor, &mut Anchor);

    /// Bezier control points implied by the two anchors, or `None` when no
    /// configuration satisfies them.
    fn control_points(&self) -> Option<Vec<Point2>>;

    /// Evaluate the curve at `t` in `[0, 1]`.
    fn point_at(&self, t: f64) -> Point2;

    /// Unit tangent at `t`.
    fn direction(&self, t: f64) -> Vector2;

    /// Signed curvature at `t`.
    fn curvature(&self, t: f64) -> f64;

    /// Drawing command continuing from the current point, e.g. `"L 10 20"`.
    fn drawing_command(&self) -> String;

    /// Write the segment's end tangents and curvatures into its anchors.
    fn update(&mut self) -> Feasibility {
        let (d0, k0) = (self.direction(0.0), self.curvature(0.0));
        let (d1, k1) = (self.direction(1.0), self.curvature(1.0));
        let (start, end) = self.anchors_mut();
        start.constrain(d0, k0);
        end.constrain(d1, k1);
        Feasibility::Feasible
    }
}

/// A segment of any degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    Linear(LinearSegment),
    Quadratic(QuadraticSegment),
    Cubic(CubicSegment),
}

impl Segment {
    pub fn new(kind: SegmentKind, start: Anchor, end: Anchor) -> Self {
        match kind {
            SegmentKind::Linear => Segment::Linear(LinearSegment::new(start, end)),
            SegmentKind::Quadratic => Segment::Quadratic(QuadraticSegment::new(start, end)),
            SegmentKind::Cubic => Segment::Cubic(CubicSegment::new(start, end)),
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Linear(_) => SegmentKind::Linear,
            Segment::Quadratic(_) => SegmentKind::Quadratic,
            Segment::Cubic(_) => SegmentKind::Cubic,
        }
    }

    fn curve(&self) -> &dyn SegmentCurve {
        match self {
            Segment::Linear(s) => s,
            Segment::Quadratic(s) => s,
            Segment::Cubic(s) => s,
        }
    }

    fn curve_mut(&mut self) -> &mut dyn SegmentCurve {
        match self {
            Segment::Linear(s) => s,
            Segment::Quadratic(s) => s,
            Segment::Cubic(s) => s,
        }
    }

    /// Control points as drawn: the cubic cache when present, otherwise
    /// derived from the anchors. `None` for a cubic left infeasible by its last update.
    pub fn drawn_control_points(&self) -> Option<Vec<Point2>> {
        match self {
            Segment::Cubic(s) => s.cached_control_points().map(|p| p.to_vec()),
            other => other.control_points(),
        }
    }
}

impl SegmentCurve for Segment {
    fn start(&self) -> &Anchor {
        self.curve().start()
    }

    fn end(&self) -> &Anchor {
        self.curve().end()
    }

    fn anchors_mut(&mut self) -> (&mut Anchor, &mut Anchor) {
        self.curve_mut().anchors_mut()
    }

    fn control_points(&self) -> Option<Vec<Point2>> {
        self.curve().control_points()
    }

    fn point_at(&self, t: f64) -> Point2 {
        self.curve().point_at(t)
    }

    fn direction(&self, t: f64) -> Vector2 {
        self.curve().direction(t)
    }

    fn curvature(&self, t: f64) -> f64 {
        self.curve().curvature(t)
    }

    fn drawing_command(&self) -> String {
        self.curve().drawing_command()
    }

    fn update(&mut self) -> Feasibility {
        self.curve_mut().update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezier_math::dvec2;

    #[test]
    fn test_new_matches_kind() {
        let a = Anchor::new(dvec2(0.0, 0.0));
        let b = Anchor::new(dvec2(10.0, 5.0));
        for kind in [SegmentKind::Linear, SegmentKind::Quadratic, SegmentKind::Cubic] {
            let s = Segment::new(kind, a, b);
            assert_eq!(s.kind(), kind);
            assert_eq!(s.start().position, a.position);
            assert_eq!(s.end().position, b.position);
        }
    }

    #[test]
    fn test_dispatch_update_linear() {
        let a = Anchor::new(dvec2(0.0, 0.0));
        let b = Anchor::new(dvec2(0.0, 5.0));
        let mut s = Segment::new(SegmentKind::Linear, a, b);
        assert!(s.update().is_feasible());
        assert_eq!(s.start().tangent, dvec2(0.0, 1.0));
        assert_eq!(s.end().curvature(), 0.0);
        assert_eq!(s.drawing_command(), "L 0 5");
    }

    #[test]
    fn test_drawn_control_points_of_fresh_cubic_is_none() {
        let a = Anchor::new(dvec2(0.0, 0.0));
        let b = Anchor::new(dvec2(10.0, 0.0));
        let s = Segment::new(SegmentKind::Cubic, a, b);
        assert!(s.drawn_control_points().is_none());
        let l = Segment::new(SegmentKind::Linear, a, b);
        assert_eq!(l.drawn_control_points().unwrap().len(), 2);
    }
}
