//! Bezier editor math: 2D vectors, rays, and polynomials with a real-root finder.

pub mod aabb;
pub mod polynomial;
pub mod ray;
mod roots;
pub mod vector;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use polynomial::Polynomial;
pub use ray::Ray2;
pub use vector::Vec2Ext;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
