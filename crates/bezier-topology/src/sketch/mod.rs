mod bounding;
pub mod config;
mod document;
mod iter;
mod propagate;
pub mod types;
mod validate;

pub use config::{Propagation, SketchConfig};
pub use document::Sketch;
pub use iter::PathAnchorIter;
pub use propagate::UpdateReport;
pub use types::*;
