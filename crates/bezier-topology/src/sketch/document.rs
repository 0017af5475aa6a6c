use std::collections::HashSet;

use bezier_core::error::{CurveError, Result};
use bezier_core::{EntityId, Tolerance};
use bezier_geometry::{Anchor, CubicSegment, Feasibility, Segment, SegmentCurve, SegmentKind};
use bezier_math::{Point2, Vec2Ext, Vector2};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use super::config::SketchConfig;
use super::propagate::UpdateReport;
use super::types::*;

/// Arena of anchors, segments and paths.
///
/// Segments refer to their anchors by key, so two neighbouring segments
/// share the anchor between them. Geometry is computed on copies taken out
/// of the arena and written back afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sketch {
    pub anchors: SlotMap<AnchorId, AnchorNode>,
    pub segments: SlotMap<SegmentId, SegmentNode>,
    pub paths: SlotMap<PathId, PathNode>,
    config: SketchConfig,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch {
    pub fn new() -> Self {
        Self::with_config(SketchConfig::default())
    }

    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            anchors: SlotMap::with_key(),
            segments: SlotMap::with_key(),
            paths: SlotMap::with_key(),
            config,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SketchConfig) {
        self.config = config;
    }

    // --- Lookup ---

    pub fn anchor(&self, id: AnchorId) -> Result<&Anchor> {
        self.anchors
            .get(id)
            .map(|node| &node.anchor)
            .ok_or_else(|| CurveError::NotFound("Anchor not found".into()))
    }

    fn anchor_node_mut(&mut self, id: AnchorId) -> Result<&mut AnchorNode> {
        self.anchors
            .get_mut(id)
            .ok_or_else(|| CurveError::NotFound("Anchor not found".into()))
    }

    fn path_node(&self, id: PathId) -> Result<&PathNode> {
        self.paths
            .get(id)
            .ok_or_else(|| CurveError::NotFound("Path not found".into()))
    }

    /// Geometry of a segment, built from the current anchor values.
    pub fn segment(&self, id: SegmentId) -> Result<Segment> {
        let node = self
            .segments
            .get(id)
            .ok_or_else(|| CurveError::NotFound("Segment not found".into()))?;
        let start = *self.anchor(node.start)?;
        let end = *self.anchor(node.end)?;
        Ok(match node.kind {
            SegmentKind::Cubic => Segment::Cubic(CubicSegment::with_cache(start, end, node.cached)),
            kind => Segment::new(kind, start, end),
        })
    }

    /// First anchor of a path.
    pub fn start_point(&self, path: PathId) -> Result<AnchorId> {
        Ok(self.path_node(path)?.origin)
    }

    /// Last anchor of a path; the origin while the path has no segments.
    pub fn end_point(&self, path: PathId) -> Result<AnchorId> {
        let node = self.path_node(path)?;
        match node.segments.last() {
            Some(&last) => self
                .segments
                .get(last)
                .map(|s| s.end)
                .ok_or_else(|| CurveError::NotFound("Segment not found".into())),
            None => Ok(node.origin),
        }
    }

    /// Segments whose last update found no valid control points.
    pub fn infeasible_segments(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.segments
            .iter()
            .filter(|(_, s)| !s.feasibility.is_feasible())
            .map(|(id, _)| id)
    }

    /// Whether any segment touching the anchor is infeasible.
    pub fn is_flagged(&self, anchor: AnchorId) -> bool {
        self.anchors.get(anchor).is_some_and(|node| {
            node.segments.iter().any(|&s| {
                self.segments
                    .get(s)
                    .is_some_and(|seg| !seg.feasibility.is_feasible())
            })
        })
    }

    // --- Construction ---

    fn fresh_anchor(&self, position: Point2) -> Anchor {
        Anchor::new(position).with_radius(self.config.default_radius)
    }

    /// Start a path holding a single free anchor.
    pub fn start_path(&mut self, position: Point2) -> PathId {
        let anchor = self.fresh_anchor(position);
        let path = self.paths.insert(PathNode {
            origin: AnchorId::default(),
            segments: Vec::new(),
            label: EntityId::new(),
        });
        let origin = self.anchors.insert(AnchorNode {
            anchor,
            path,
            segments: Vec::new(),
            label: EntityId::new(),
        });
        self.paths[path].origin = origin;
        path
    }

    /// Append a segment from the path's end anchor to a new anchor at `position`.
    ///
    /// Quadratic and cubic segments seed the new anchor's tangent with the
    /// start tangent reflected across the chord; the segment is then updated
    /// and the edit propagated.
    pub fn extend_path(
        &mut self,
        path: PathId,
        kind: SegmentKind,
        position: Point2,
    ) -> Result<(SegmentId, UpdateReport)> {
        let start = self.end_point(path)?;
        let start_anchor = *self.anchor(start)?;

        let mut anchor = self.fresh_anchor(position);
        if kind != SegmentKind::Linear {
            let chord = position - start_anchor.position;
            anchor.tangent = chord.complex_mul(chord.complex_div(start_anchor.tangent)).normalize();
        }
        let end = self.anchors.insert(AnchorNode {
            anchor,
            path,
            segments: Vec::new(),
            label: EntityId::new(),
        });

        let segment = self.segments.insert(SegmentNode {
            kind,
            start,
            end,
            cached: None,
            feasibility: Feasibility::Feasible,
        });
        self.anchors[start].segments.push(segment);
        self.anchors[end].segments.push(segment);
        if let Some(node) = self.paths.get_mut(path) {
            node.segments.push(segment);
        }

        log::debug!(
            "extended {} with {:?} segment to ({}, {})",
            self.paths[path].label.label("path"),
            kind,
            position.x,
            position.y
        );
        let report = self.propagate_segments(vec![segment]);
        Ok((segment, report))
    }

    /// Remove a path with all of its segments and anchors.
    pub fn remove_path(&mut self, path: PathId) -> Result<()> {
        let node = self
            .paths
            .remove(path)
            .ok_or_else(|| CurveError::NotFound("Path not found".into()))?;
        for segment in node.segments {
            self.segments.remove(segment);
        }
        self.anchors.retain(|_, anchor| anchor.path != path);
        Ok(())
    }

    // --- Segment updates ---

    /// Update one segment and store the derived tangents, curvatures and
    /// control points back into the arena.
    pub fn update_segment(&mut self, id: SegmentId) -> Result<Feasibility> {
        let mut segment = self.segment(id)?;
        let feasibility = segment.update();

        let cached = match &segment {
            Segment::Cubic(cubic) => cubic.cached_control_points(),
            _ => None,
        };
        let (start, end) = (*segment.start(), *segment.end());
        let node = &mut self.segments[id];
        node.cached = cached;
        node.feasibility = feasibility;
        let (start_id, end_id) = (node.start, node.end);
        self.anchors[start_id].anchor = start;
        self.anchors[end_id].anchor = end;
        Ok(feasibility)
    }

    // --- Anchor edits ---

    pub fn move_anchor(&mut self, id: AnchorId, position: Point2) -> Result<UpdateReport> {
        self.anchor_node_mut(id)?.anchor.position = position;
        Ok(self.propagate(&[id]))
    }

    /// Move several anchors by the same offset; repeated ids move once.
    pub fn translate_anchors(&mut self, ids: &[AnchorId], delta: Vector2) -> Result<UpdateReport> {
        if let Some(missing) = ids.iter().find(|&&id| !self.anchors.contains_key(id)) {
            return Err(CurveError::NotFound(format!("Anchor {:?} not found", missing)));
        }
        let mut seen = HashSet::new();
        let unique: Vec<AnchorId> = ids.iter().copied().filter(|&id| seen.insert(id)).collect();
        for &id in &unique {
            self.anchors[id].anchor.position += delta;
        }
        Ok(self.propagate(&unique))
    }

    /// Point the anchor's tangent along `tangent`, which must have a direction.
    pub fn set_tangent(&mut self, id: AnchorId, tangent: Vector2) -> Result<UpdateReport> {
        let unit = tangent.try_normalize().ok_or_else(|| {
            CurveError::InvalidOperation("tangent must be a non-zero finite vector".into())
        })?;
        self.anchor_node_mut(id)?.anchor.tangent = unit;
        Ok(self.propagate(&[id]))
    }

    pub fn rotate_tangent_to(&mut self, id: AnchorId, angle: f64) -> Result<UpdateReport> {
        self.anchor_node_mut(id)?.anchor.set_angle(angle);
        Ok(self.propagate(&[id]))
    }

    pub fn set_radius(&mut self, id: AnchorId, radius: f64) -> Result<UpdateReport> {
        self.anchor_node_mut(id)?.anchor.set_radius(radius)?;
        Ok(self.propagate(&[id]))
    }

    /// Like [`Sketch::set_radius`], but magnitudes above the configured
    /// `max_edit_radius` snap to a straight junction.
    pub fn set_radius_clamped(&mut self, id: AnchorId, radius: f64) -> Result<UpdateReport> {
        if radius.abs() > self.config.max_edit_radius {
            return self.set_radius(id, Tolerance::STRAIGHT_RADIUS.copysign(radius));
        }
        self.set_radius(id, radius)
    }

    // --- Output ---

    pub fn point_at(&self, id: SegmentId, t: f64) -> Result<Point2> {
        Ok(self.segment(id)?.point_at(t))
    }

    /// Drawing commands for a whole path, e.g. `"M 0 0 L 10 0 C ..."`.
    pub fn path_data(&self, path: PathId) -> Result<String> {
        let node = self.path_node(path)?;
        let origin = self.anchor(node.origin)?.position;
        let mut data = format!("M {} {}", origin.x, origin.y);
        for &segment in &node.segments {
            data.push(' ');
            data.push_str(&self.segment(segment)?.drawing_command());
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bezier_math::dvec2;

    #[test]
    fn test_start_path_has_single_point() {
        let mut sketch = Sketch::new();
        let path = sketch.start_path(dvec2(3.0, 4.0));
        let start = sketch.start_point(path).unwrap();
        assert_eq!(sketch.end_point(path).unwrap(), start);
        let anchor = sketch.anchor(start).unwrap();
        assert_eq!(anchor.position, dvec2(3.0, 4.0));
        assert_eq!(anchor.tangent, dvec2(1.0, 0.0));
        assert_eq!(anchor.radius, 1000.0);
        assert_eq!(sketch.anchors[start].path, path);
    }

    #[test]
    fn test_extend_linear_updates_tangents() {
        let mut sketch = Sketch::new();
        let path = sketch.start_path(dvec2(0.0, 0.0));
        let (segment, report) = sketch
            .extend_path(path, SegmentKind::Linear, dvec2(0.0, 5.0))
            .unwrap();
        assert_eq!(report.updated, vec![segment]);
        assert!(report.is_feasible());
        let end = sketch.end_point(path).unwrap();
        assert_eq!(sketch.anchor(end).unwrap().tangent, dvec2(0.0, 1.0));
        assert_eq!(sketch.anchor(end).unwrap().radius, Tolerance::STRAIGHT_RADIUS);
    }

    #[test]
    fn test_extend_quadratic_seeds_reflected_tangent() {
        let mut sketch = Sketch::new();
        let path = sketch.start_path(dvec2(0.0, 0.0));
        let start = sketch.start_point(path).unwrap();
        sketch.set_tangent(start, dvec2(1.0, 1.0)).unwrap();
        let (segment, _) = sketch
            .extend_path(path, SegmentKind::Quadratic, dvec2(10.0, 0.0))
            .unwrap();
        // Reflected across the chord, the tangent heads down and to the right.
        let end = sketch.end_point(path).unwrap();
        let tangent = sketch.anchor(end).unwrap().tangent;
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(tangent.x, half, epsilon = 1e-12);
        assert_relative_eq!(tangent.y, -half, epsilon = 1e-12);
        let points = sketch.segment(segment).unwrap().control_points().unwrap();
        assert_relative_eq!(points[1].x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(points[1].y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_set_radius_rejects_zero() {
        let mut sketch = Sketch::new();
        let path = sketch.start_path(dvec2(0.0, 0.0));
        let start = sketch.start_point(path).unwrap();
        assert!(matches!(
            sketch.set_radius(start, 0.0),
            Err(CurveError::InvalidOperation(_))
        ));
        assert_eq!(sketch.anchor(start).unwrap().radius, 1000.0);
    }

    #[test]
    fn test_set_radius_clamped_snaps_to_straight() {
        let mut sketch = Sketch::new();
        let path = sketch.start_path(dvec2(0.0, 0.0));
        let start = sketch.start_point(path).unwrap();
        sketch.set_radius_clamped(start, -5000.0).unwrap();
        assert_eq!(sketch.anchor(start).unwrap().radius, -Tolerance::STRAIGHT_RADIUS);
        sketch.set_radius_clamped(start, 200.0).unwrap();
        assert_eq!(sketch.anchor(start).unwrap().radius, 200.0);
    }

    #[test]
    fn test_set_tangent_rejects_zero_vector() {
        let mut sketch = Sketch::new();
        let path = sketch.start_path(dvec2(0.0, 0.0));
        let start = sketch.start_point(path).unwrap();
        assert!(sketch.set_tangent(start, Vector2::ZERO).is_err());
        sketch.set_tangent(start, dvec2(0.0, 3.0)).unwrap();
        assert_eq!(sketch.anchor(start).unwrap().tangent, dvec2(0.0, 1.0));
    }

    #[test]
    fn test_stale_keys_are_not_found() {
        let mut sketch = Sketch::new();
        let path = sketch.start_path(dvec2(0.0, 0.0));
        let start = sketch.start_point(path).unwrap();
        sketch.remove_path(path).unwrap();
        assert!(matches!(sketch.anchor(start), Err(CurveError::NotFound(_))));
        assert!(matches!(sketch.path_data(path), Err(CurveError::NotFound(_))));
        assert!(sketch.remove_path(path).is_err());
    }
}
