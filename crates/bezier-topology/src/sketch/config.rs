use bezier_core::Tolerance;
use serde::{Deserialize, Serialize};

/// How far an anchor edit travels along its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Propagation {
    /// Update only the segments touching the edited anchors.
    #[default]
    Incident,
    /// Keep going through every anchor whose tangent or curvature changed,
    /// updating each segment at most once per edit.
    Cascade,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub propagation: Propagation,
    /// Radius given to anchors created by the sketch.
    pub default_radius: f64,
    /// Radius magnitude above which a clamped edit snaps to straight.
    pub max_edit_radius: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            propagation: Propagation::Incident,
            default_radius: Tolerance::DEFAULT_RADIUS,
            max_edit_radius: Tolerance::MAX_EDIT_RADIUS,
        }
    }
}
