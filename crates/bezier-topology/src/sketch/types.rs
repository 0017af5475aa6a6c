use bezier_core::EntityId;
use bezier_geometry::{Anchor, Feasibility, SegmentKind};
use bezier_math::Point2;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

// --- SlotMap key types ---

new_key_type! {
    pub struct AnchorId;
    pub struct SegmentId;
    pub struct PathId;
}

// --- Entity structs ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorNode {
    pub anchor: Anchor,
    pub path: PathId,
    /// Segments touching this anchor, in the order they were attached.
    pub segments: Vec<SegmentId>,
    pub label: EntityId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentNode {
    pub kind: SegmentKind,
    pub start: AnchorId,
    pub end: AnchorId,
    /// Cubic control points from the last update.
    pub cached: Option<[Point2; 4]>,
    pub feasibility: Feasibility,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathNode {
    /// First anchor; the only one while the path has no segments.
    pub origin: AnchorId,
    pub segments: Vec<SegmentId>,
    pub label: EntityId,
}
