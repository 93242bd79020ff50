use thiserror::Error;

use super::{Axis, IntersectionResult, Ray, WorldPoint, WorldVector, intersect};

/// Axis aligned box. Expected to satisfy `min <= max` componentwise,
/// nothing in this type checks that unless [`Aabb::try_new`] is used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: WorldPoint,
    pub max: WorldPoint,
}

#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[error("box bounds on {axis:?} axis are not ordered: min {min} > max {max}")]
pub struct InvalidAabbError {
    pub axis: Axis,
    pub min: f32,
    pub max: f32,
}

impl Aabb {
    pub fn new(min: WorldPoint, max: WorldPoint) -> Aabb {
        Aabb { min, max }
    }

    /// Like [`Aabb::new`], but rejects boxes with inverted or NaN bounds.
    pub fn try_new(min: WorldPoint, max: WorldPoint) -> Result<Aabb, InvalidAabbError> {
        for axis in Axis::ALL {
            let (lo, hi) = (min[axis.index()], max[axis.index()]);
            // Written so that NaN fails too
            if !(lo <= hi) {
                return Err(InvalidAabbError {
                    axis,
                    min: lo,
                    max: hi,
                });
            }
        }
        Ok(Aabb { min, max })
    }

    /// Checks if the point lies inside the box or on its boundary.
    pub fn contains(&self, point: &WorldPoint) -> bool {
        Axis::ALL.iter().all(|axis| {
            let i = axis.index();
            self.min[i] <= point[i] && point[i] <= self.max[i]
        })
    }

    pub fn size(&self) -> WorldVector {
        self.max - self.min
    }

    pub fn center(&self) -> WorldPoint {
        nalgebra::center(&self.min, &self.max)
    }

    /// Calculates the full intersection record of the ray with this box.
    pub fn intersect(&self, ray: &Ray) -> IntersectionResult {
        intersect(ray, self)
    }
}

/// Flat layout `[min_x, min_y, min_z, max_x, max_y, max_z]`
impl From<[f32; 6]> for Aabb {
    fn from(value: [f32; 6]) -> Self {
        let [x0, y0, z0, x1, y1, z1] = value;
        Aabb::new(WorldPoint::new(x0, y0, z0), WorldPoint::new(x1, y1, z1))
    }
}

impl From<[WorldPoint; 2]> for Aabb {
    fn from(value: [WorldPoint; 2]) -> Self {
        let [min, max] = value;
        Aabb { min, max }
    }
}

impl From<(WorldPoint, WorldPoint)> for Aabb {
    fn from(value: (WorldPoint, WorldPoint)) -> Self {
        let (min, max) = value;
        Aabb { min, max }
    }
}
