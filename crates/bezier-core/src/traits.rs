use crate::error::Result;

/// Structural checks for arenas whose entities refer to each other by key.
pub trait Validate {
    /// First broken invariant found, if any.
    fn validate(&self) -> Result<()>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Axis-aligned bounds of everything drawn, as `(min, max)` corners.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> (Self::Point, Self::Point);
}
