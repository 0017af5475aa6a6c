//! Bezier editor sketch: anchors shared between segments, chained into paths.

pub mod sketch;

pub use sketch::{
    AnchorId, AnchorNode, PathAnchorIter, PathId, PathNode, Propagation, SegmentId, SegmentNode,
    Sketch, SketchConfig, UpdateReport,
};
