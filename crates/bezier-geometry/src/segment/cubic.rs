//! Cubic segment matching position, tangent and curvature at both anchors.
//!
//! The interior points are `p1 = start + start_tangent * x` and
//! `p2 = end - end_tangent * y`. With `p = end - start`, `r` and `s` the
//! start and end curvatures, `a = t0 × p`, `b = -(t0 × t1)`, `c = -(t1 × p)`,
//! matching the curvature at each end gives
//!
//! ```text
//! 3 r x^2 = 2 (a + b y)        3 s y^2 = 2 (c + b x)
//! ```
//!
//! Eliminating `x` leaves a quartic in `y`.

use bezier_math::{Point2, Polynomial, Vec2Ext, Vector2};
use serde::{Deserialize, Serialize};

use super::{Feasibility, SegmentCurve};
use crate::anchor::Anchor;
use crate::bezier::{cubic_derivatives, cubic_point, signed_curvature};

/// Handle lengths `(x, y)` along the start and end tangents, both positive,
/// or `None` if the anchors admit no such cubic.
pub fn solve_handles(start: &Anchor, end: &Anchor) -> Option<(f64, f64)> {
    let p = end.position - start.position;
    let (t0, t1) = (start.tangent, end.tangent);
    let r = start.curvature();
    let s = end.curvature();
    let a = t0.cross(p);
    let b = -t0.cross(t1);
    let c = -t1.cross(p);

    let feasible =
        |x: f64, y: f64| (x > 0.0 && y > 0.0 && x.is_finite() && y.is_finite()).then_some((x, y));

    if b == 0.0 {
        let third = p.length() / 3.0;
        if a == 0.0 && c == 0.0 {
            // Collinear: the straight cubic, provided both tangents follow the chord.
            let aligned = t0.dot(p) > 0.0 && t1.dot(p) > 0.0;
            return if aligned { feasible(third, third) } else { None };
        }
        // Parallel but offset, each curvature fixes its own handle: 3 r x^2 = 2 a.
        let handle = |cross: f64, k: f64| {
            if cross == 0.0 && k == 0.0 {
                third
            } else {
                (2.0 * cross / (3.0 * k)).sqrt()
            }
        };
        return feasible(handle(a, r), handle(c, s));
    }

    if r == 0.0 {
        let y = -a / b;
        let x = (3.0 * s * y * y - 2.0 * c) / (2.0 * b);
        return feasible(x, y);
    }
    if s == 0.0 {
        let x = -c / b;
        let y = (3.0 * r * x * x - 2.0 * a) / (2.0 * b);
        return feasible(x, y);
    }

    let quartic = Polynomial::new([
        27.0 * r * s * s,
        0.0,
        -36.0 * s * r * c,
        -8.0 * b * b * b,
        12.0 * r * c * c - 8.0 * b * b * a,
    ]);
    let mut candidates: Vec<f64> = quartic.solve().into_iter().filter(|&y| y > 0.0).collect();
    // Preferred branch first: the largest root when the end bends counter-clockwise.
    if s > 0.0 {
        candidates.sort_by(|a, b| b.total_cmp(a));
    } else {
        candidates.sort_by(f64::total_cmp);
    }
    log::debug!("cubic handle candidates y = {:?}", candidates);

    candidates
        .into_iter()
        .find_map(|y| feasible((3.0 * s * y * y - 2.0 * c) / (2.0 * b), y))
}

/// A cubic Bezier constrained by both anchors' tangent and curvature.
///
/// Control points are cached by [`SegmentCurve::update`]; the cache is what
/// gets drawn and differentiated, and is `None` while the anchors are infeasible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub start: Anchor,
    pub end: Anchor,
    cached: Option<[Point2; 4]>,
}

impl CubicSegment {
    pub fn new(start: Anchor, end: Anchor) -> Self {
        Self {
            start,
            end,
            cached: None,
        }
    }

    /// Rebuild with a cache carried over from an earlier update.
    pub fn with_cache(start: Anchor, end: Anchor, cached: Option<[Point2; 4]>) -> Self {
        Self { start, end, cached }
    }

    pub fn cached_control_points(&self) -> Option<[Point2; 4]> {
        self.cached
    }

    fn derive(&self) -> Option<[Point2; 4]> {
        let (x, y) = solve_handles(&self.start, &self.end)?;
        Some([
            self.start.position,
            self.start.position + self.start.tangent * x,
            self.end.position - self.end.tangent * y,
            self.end.position,
        ])
    }

    /// Points used for evaluation: the cache, or the straight chord when infeasible.
    fn points(&self) -> [Point2; 4] {
        self.cached.unwrap_or_else(|| {
            let (p0, p3) = (self.start.position, self.end.position);
            [p0, p0.lerp(p3, 1.0 / 3.0), p0.lerp(p3, 2.0 / 3.0), p3]
        })
    }
}

impl SegmentCurve for CubicSegment {
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
        self.derive().map(|p| p.to_vec())
    }

    fn point_at(&self, t: f64) -> Point2 {
        cubic_point(&self.points(), t)
    }

    fn direction(&self, t: f64) -> Vector2 {
        cubic_derivatives(&self.points(), t).0.normalize()
    }

    fn curvature(&self, t: f64) -> f64 {
        let (d1, d2) = cubic_derivatives(&self.points(), t);
        signed_curvature(d1, d2)
    }

    fn drawing_command(&self) -> String {
        match self.cached {
            Some(p) => format!(
                "C {} {} {} {} {} {}",
                p[1].x, p[1].y, p[2].x, p[2].y, p[3].x, p[3].y
            ),
            None => format!("L {} {}", self.end.position.x, self.end.position.y),
        }
    }

    /// Recompute the cached control points, then write tangents and
    /// curvatures back. An infeasible configuration leaves the anchors as they are.
    fn update(&mut self) -> Feasibility {
        self.cached = self.derive();
        if self.cached.is_none() {
            log::warn!(
                "no cubic satisfies anchors at ({}, {}) and ({}, {})",
                self.start.position.x,
                self.start.position.y,
                self.end.position.x,
                self.end.position.y
            );
            return Feasibility::Infeasible;
        }
        let (d0, k0) = (self.direction(0.0), self.curvature(0.0));
        let (d1, k1) = (self.direction(1.0), self.curvature(1.0));
        self.start.constrain(d0, k0);
        self.end.constrain(d1, k1);
        Feasibility::Feasible
    }
}
