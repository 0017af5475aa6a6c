//! Shared vocabulary of the bezier editor crates: the error type, display
//! ids, numeric tolerances, and the traits implemented by the sketch.

pub mod error;
pub mod id;
pub mod tolerance;
pub mod traits;

pub use error::{CurveError, Result};
pub use id::EntityId;
pub use tolerance::Tolerance;
