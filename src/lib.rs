pub mod geometry;

pub use geometry::{Aabb, Axis, IntersectionResult, InvalidAabbError, Ray, intersect};
