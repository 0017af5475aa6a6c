use std::slice;

use super::document::Sketch;
use super::types::*;

/// Iterator over the anchors of a path: the origin, then each segment's end.
pub struct PathAnchorIter<'a> {
    sketch: &'a Sketch,
    origin: Option<AnchorId>,
    segments: slice::Iter<'a, SegmentId>,
}

impl<'a> PathAnchorIter<'a> {
    pub fn new(sketch: &'a Sketch, path: &'a PathNode) -> Self {
        Self {
            sketch,
            origin: Some(path.origin),
            segments: path.segments.iter(),
        }
    }
}

impl<'a> Iterator for PathAnchorIter<'a> {
    type Item = AnchorId;

    fn next(&mut self) -> Option<AnchorId> {
        if let Some(origin) = self.origin.take() {
            return Some(origin);
        }
        let segment = self.segments.next()?;
        self.sketch.segments.get(*segment).map(|s| s.end)
    }
}

// --- Sketch iterator methods ---

impl Sketch {
    /// Iterate over the anchors of a path, in order.
    pub fn path_anchors(&self, path: PathId) -> Option<PathAnchorIter<'_>> {
        let node = self.paths.get(path)?;
        Some(PathAnchorIter::new(self, node))
    }

    /// Iterate over the segments of a path, in order.
    pub fn path_segments(&self, path: PathId) -> Option<impl Iterator<Item = SegmentId> + '_> {
        let node = self.paths.get(path)?;
        Some(node.segments.iter().copied())
    }

    /// Segments touching an anchor.
    pub fn anchor_segments(&self, anchor: AnchorId) -> Option<&[SegmentId]> {
        self.anchors.get(anchor).map(|node| node.segments.as_slice())
    }
}
