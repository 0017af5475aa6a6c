//! Worklist propagation of anchor edits.
//!
//! An edit seeds the queue with the segments touching the edited anchors.
//! Each queued segment is updated once. Under [`Propagation::Cascade`] an
//! update that changes an endpoint's tangent or curvature queues that
//! anchor's other segments as well; the visited set bounds the walk to one
//! update per segment per edit.

use std::collections::{HashSet, VecDeque};

use super::config::Propagation;
use super::document::Sketch;
use super::types::{AnchorId, SegmentId};

/// Segments touched by one edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Every segment updated, in update order.
    pub updated: Vec<SegmentId>,
    /// Updated segments for which no valid control points exist.
    pub infeasible: Vec<SegmentId>,
}

impl UpdateReport {
    pub fn is_feasible(&self) -> bool {
        self.infeasible.is_empty()
    }
}

struct Worklist {
    queue: VecDeque<SegmentId>,
    visited: HashSet<SegmentId>,
}

impl Worklist {
    fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
        }
    }

    fn push(&mut self, segment: SegmentId) {
        if self.visited.insert(segment) {
            self.queue.push_back(segment);
        }
    }
}

impl Sketch {
    /// Update the segments reached from the edited anchors.
    pub fn propagate(&mut self, edited: &[AnchorId]) -> UpdateReport {
        let mut work = Worklist::new();
        for &anchor in edited {
            self.enqueue_incident(anchor, &mut work);
        }
        self.drain(work)
    }

    pub(crate) fn propagate_segments(&mut self, seeds: Vec<SegmentId>) -> UpdateReport {
        let mut work = Worklist::new();
        for segment in seeds {
            work.push(segment);
        }
        self.drain(work)
    }

    fn enqueue_incident(&self, anchor: AnchorId, work: &mut Worklist) {
        if let Some(node) = self.anchors.get(anchor) {
            for &segment in &node.segments {
                work.push(segment);
            }
        }
    }

    /// Display labels of the given anchors, e.g. `point4`.
    pub(crate) fn junction_labels(&self, anchors: [AnchorId; 2]) -> Vec<String> {
        anchors
            .iter()
            .filter_map(|&id| self.anchors.get(id))
            .map(|node| node.label.label("point"))
            .collect()
    }

    fn drain(&mut self, mut work: Worklist) -> UpdateReport {
        let cascade = self.config().propagation == Propagation::Cascade;
        let mut report = UpdateReport::default();

        while let Some(segment) = work.queue.pop_front() {
            let Some(node) = self.segments.get(segment) else {
                continue;
            };
            let endpoints = [node.start, node.end];
            let before = endpoints.map(|id| self.anchors.get(id).map(|n| n.anchor));

            let feasibility = match self.update_segment(segment) {
                Ok(feasibility) => feasibility,
                Err(err) => {
                    log::warn!("skipping segment {:?}: {}", segment, err);
                    continue;
                }
            };
            log::trace!("updated segment {:?}: {:?}", segment, feasibility);
            report.updated.push(segment);
            if !feasibility.is_feasible() {
                report.infeasible.push(segment);
                log::debug!("flagged {}", self.junction_labels(endpoints).join(" and "));
            }

            if cascade {
                for (anchor, prior) in endpoints.into_iter().zip(before) {
                    let current = self.anchors.get(anchor).map(|n| n.anchor);
                    if current != prior {
                        self.enqueue_incident(anchor, &mut work);
                    }
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezier_geometry::SegmentKind;
    use bezier_math::dvec2;

    use crate::sketch::config::SketchConfig;

    /// Three linear segments along a zig-zag.
    fn zigzag(propagation: Propagation) -> (Sketch, Vec<SegmentId>) {
        let mut sketch = Sketch::with_config(SketchConfig {
            propagation,
            ..SketchConfig::default()
        });
        let path = sketch.start_path(dvec2(0.0, 0.0));
        let mut segments = Vec::new();
        for p in [dvec2(10.0, 0.0), dvec2(20.0, 10.0), dvec2(30.0, 0.0)] {
            segments.push(sketch.extend_path(path, SegmentKind::Linear, p).unwrap().0);
        }
        (sketch, segments)
    }

    #[test]
    fn test_incident_updates_only_touching_segments() {
        let (mut sketch, segments) = zigzag(Propagation::Incident);
        let moved = sketch.segments[segments[1]].start;
        let report = sketch.move_anchor(moved, dvec2(10.0, 5.0)).unwrap();
        assert_eq!(report.updated, vec![segments[0], segments[1]]);
        assert!(report.is_feasible());
    }

    #[test]
    fn test_cascade_visits_each_segment_once() {
        let (mut sketch, segments) = zigzag(Propagation::Cascade);
        let moved = sketch.segments[segments[1]].start;
        let report = sketch.move_anchor(moved, dvec2(10.0, 5.0)).unwrap();
        assert!(report.updated.contains(&segments[0]));
        assert!(report.updated.contains(&segments[1]));
        // The segment after the far anchor is reached because that anchor's tangent changed.
        assert!(report.updated.contains(&segments[2]));
        let unique: HashSet<_> = report.updated.iter().collect();
        assert_eq!(unique.len(), report.updated.len());
    }

    #[test]
    fn test_junction_labels_name_both_anchors() {
        let (sketch, segments) = zigzag(Propagation::Incident);
        let node = &sketch.segments[segments[0]];
        let labels = sketch.junction_labels([node.start, node.end]);
        assert_eq!(labels.len(), 2);
        assert!(labels.iter().all(|l| l.starts_with("point")));
        assert_ne!(labels[0], labels[1]);
    }

    #[test]
    fn test_edit_on_free_anchor_updates_nothing() {
        let mut sketch = Sketch::new();
        let path = sketch.start_path(dvec2(0.0, 0.0));
        let start = sketch.start_point(path).unwrap();
        let report = sketch.move_anchor(start, dvec2(1.0, 1.0)).unwrap();
        assert_eq!(report, UpdateReport::default());
    }
}
