/// Numeric tolerances and sentinels shared by the solver and the segment geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance;

impl Tolerance {
    /// 2^-24, the relative width at which a bracketed root is accepted.
    pub const BISECTION: f64 = 1.0 / (1u32 << 24) as f64;
    /// Reference equality tolerance used when checking derived geometry.
    pub const ROOT_CHECK: f64 = 1e-3;
    /// Radius magnitude standing in for an infinite curvature radius.
    pub const STRAIGHT_RADIUS: f64 = 1e12;
    /// Largest radius magnitude an interactive edit may set before it snaps to straight.
    pub const MAX_EDIT_RADIUS: f64 = 4096.0;
    /// Radius given to a freshly created anchor.
    pub const DEFAULT_RADIUS: f64 = 1000.0;

    /// Whether `radius` encodes a straight (zero curvature) junction.
    pub fn is_straight_radius(radius: f64) -> bool {
        radius.abs() >= Self::STRAIGHT_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bisection_constant() {
        assert_eq!(Tolerance::BISECTION, 2f64.powi(-24));
    }

    #[test]
    fn test_straight_radius() {
        assert!(Tolerance::is_straight_radius(f64::INFINITY));
        assert!(Tolerance::is_straight_radius(-Tolerance::STRAIGHT_RADIUS));
        assert!(!Tolerance::is_straight_radius(Tolerance::MAX_EDIT_RADIUS));
        assert!(!Tolerance::is_straight_radius(f64::NAN));
    }
}
