use bezier_core::error::{CurveError, Result};
use bezier_core::traits::Validate;

use super::document::Sketch;

impl Validate for Sketch {
    fn validate(&self) -> Result<()> {
        // 1. Paths form unbroken chains starting at their origin
        for (path_id, path) in &self.paths {
            let origin = self.anchors.get(path.origin).ok_or_else(|| {
                CurveError::Topology(format!(
                    "Path {:?} has origin {:?} that does not exist",
                    path_id, path.origin
                ))
            })?;
            if origin.path != path_id {
                return Err(CurveError::Topology(format!(
                    "Path {:?} origin {:?} belongs to path {:?}",
                    path_id, path.origin, origin.path
                )));
            }

            let mut current = path.origin;
            for &seg_id in &path.segments {
                let segment = self.segments.get(seg_id).ok_or_else(|| {
                    CurveError::Topology(format!(
                        "Segment {:?} in path {:?} does not exist",
                        seg_id, path_id
                    ))
                })?;
                if segment.start != current {
                    return Err(CurveError::Topology(format!(
                        "Chain broken in path {:?}: segment {:?} starts at {:?}, expected {:?}",
                        path_id, seg_id, segment.start, current
                    )));
                }
                current = segment.end;
            }
        }

        // 2. Segments join two distinct anchors of one path that list them
        for (seg_id, segment) in &self.segments {
            if segment.start == segment.end {
                return Err(CurveError::Topology(format!(
                    "Segment {:?} starts and ends at anchor {:?}",
                    seg_id, segment.start
                )));
            }
            let mut owner = None;
            for anchor_id in [segment.start, segment.end] {
                let anchor = self.anchors.get(anchor_id).ok_or_else(|| {
                    CurveError::Topology(format!(
                        "Segment {:?} references non-existent anchor {:?}",
                        seg_id, anchor_id
                    ))
                })?;
                if !anchor.segments.contains(&seg_id) {
                    return Err(CurveError::Topology(format!(
                        "Anchor {:?} does not list incident segment {:?}",
                        anchor_id, seg_id
                    )));
                }
                if owner.is_some_and(|path| path != anchor.path) {
                    return Err(CurveError::Topology(format!(
                        "Segment {:?} joins anchors of different paths",
                        seg_id
                    )));
                }
                owner = Some(anchor.path);
            }
        }

        // 3. Anchors belong to a live path, list real segments, and have a usable radius
        for (anchor_id, anchor) in &self.anchors {
            if !self.paths.contains_key(anchor.path) {
                return Err(CurveError::Topology(format!(
                    "Anchor {:?} belongs to non-existent path {:?}",
                    anchor_id, anchor.path
                )));
            }
            for &seg_id in &anchor.segments {
                let touches = self
                    .segments
                    .get(seg_id)
                    .is_some_and(|s| s.start == anchor_id || s.end == anchor_id);
                if !touches {
                    return Err(CurveError::Topology(format!(
                        "Anchor {:?} lists segment {:?} that does not touch it",
                        anchor_id, seg_id
                    )));
                }
            }
            if anchor.anchor.radius == 0.0 {
                return Err(CurveError::Geometry(format!(
                    "Anchor {:?} has a zero curvature radius",
                    anchor_id
                )));
            }
        }

        Ok(())
    }
}
