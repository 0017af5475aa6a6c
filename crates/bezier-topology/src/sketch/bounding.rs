use bezier_core::traits::BoundingBox;
use bezier_math::{Aabb2, Point2};

use super::document::Sketch;
use super::types::PathId;

impl Sketch {
    /// Box around a path's anchors and drawn control points, which contains
    /// the drawn curve. Infeasible cubics contribute only their anchors.
    pub fn path_bounds(&self, path: PathId) -> Option<Aabb2> {
        let mut points: Vec<Point2> = self
            .path_anchors(path)?
            .filter_map(|id| self.anchors.get(id))
            .map(|node| node.anchor.position)
            .collect();
        for segment in self.path_segments(path)? {
            if let Some(control) = self.segment(segment).ok().and_then(|s| s.drawn_control_points()) {
                points.extend(control);
            }
        }
        Aabb2::from_points(&points)
    }
}

impl BoundingBox for Sketch {
    type Point = Point2;

    fn bounding_box(&self) -> (Point2, Point2) {
        self.paths
            .keys()
            .filter_map(|path| self.path_bounds(path))
            .reduce(|a, b| a.merge(&b))
            .map_or((Point2::ZERO, Point2::ZERO), |aabb| (aabb.min, aabb.max))
    }
}
