//! Bezier editor geometry: anchors and constrained segments.

pub mod anchor;
pub mod bezier;
pub mod segment;

pub use anchor::{radius_from_curvature, Anchor};
pub use segment::{
    CubicSegment, Feasibility, LinearSegment, QuadraticSegment, Segment, SegmentCurve,
    SegmentKind,
};
