//! Junction points of a composite curve.

use bezier_core::{CurveError, Result, Tolerance};
use bezier_math::{Point2, Vec2Ext, Vector2};
use serde::{Deserialize, Serialize};

/// A junction carrying position, unit tangent and signed curvature radius.
///
/// The tangent may be `NaN` when nothing constrains it (for example after a
/// zero-length line segment). A radius at or beyond
/// [`Tolerance::STRAIGHT_RADIUS`] in magnitude means zero curvature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Point2,
    pub tangent: Vector2,
    pub radius: f64,
}

impl Anchor {
    /// A fresh anchor heading along +x with the default radius.
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            tangent: Vector2::X,
            radius: Tolerance::DEFAULT_RADIUS,
        }
    }

    pub fn with_tangent(mut self, tangent: Vector2) -> Self {
        self.tangent = tangent.normalize();
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Signed curvature, the reciprocal of the radius; zero for straight radii.
    pub fn curvature(&self) -> f64 {
        if Tolerance::is_straight_radius(self.radius) {
            0.0
        } else {
            1.0 / self.radius
        }
    }

    /// Whether the tangent carries a usable direction.
    pub fn has_tangent(&self) -> bool {
        self.tangent.is_finite()
    }

    /// Tangent angle from +x, in radians.
    pub fn angle(&self) -> f64 {
        self.tangent.arg()
    }

    /// Point the tangent along `angle`.
    pub fn set_angle(&mut self, angle: f64) {
        self.tangent = Vector2::from_arg(angle);
    }

    /// Set the curvature radius. Zero is rejected since curvature is its reciprocal.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        if radius == 0.0 {
            return Err(CurveError::InvalidOperation(
                "curvature radius must be non-zero".into(),
            ));
        }
        self.radius = radius;
        Ok(())
    }

    /// Overwrite tangent and curvature with values read off a segment.
    pub fn constrain(&mut self, direction: Vector2, curvature: f64) {
        self.tangent = direction;
        self.radius = radius_from_curvature(curvature);
    }
}

/// Radius for a signed curvature; zero curvature maps to the straight sentinel
/// with the sign of `curvature`.
pub fn radius_from_curvature(curvature: f64) -> f64 {
    let radius = 1.0 / curvature;
    if Tolerance::is_straight_radius(radius) {
        Tolerance::STRAIGHT_RADIUS.copysign(radius)
    } else {
        radius
    }
}
