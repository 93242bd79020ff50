mod aabb;
mod axis;
mod ray_box_intersection;

pub use aabb::{Aabb, InvalidAabbError};
pub use axis::{Axis, AxisIndexError};
pub use ray_box_intersection::{IntersectionResult, intersect};

pub type WorldPoint = nalgebra::Point3<f32>;
pub type WorldVector = nalgebra::Vector3<f32>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: WorldPoint,
    /// Direction of the ray, not normalized.
    /// Any component may be exactly zero, making the ray parallel to that axis' slab.
    pub direction: WorldVector,
}

impl Ray {
    pub fn new(origin: WorldPoint, direction: WorldVector) -> Ray {
        Ray { origin, direction }
    }

    /// Point at parameter `t`, in units of the direction vector length.
    pub fn point_at(&self, t: f32) -> WorldPoint {
        self.origin + self.direction * t
    }
}

/// Flat layout `[origin_x, origin_y, origin_z, direction_x, direction_y, direction_z]`
impl From<[f32; 6]> for Ray {
    fn from(value: [f32; 6]) -> Self {
        let [ox, oy, oz, dx, dy, dz] = value;
        Ray::new(WorldPoint::new(ox, oy, oz), WorldVector::new(dx, dy, dz))
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use assert2::assert;
    use proptest::prelude::*;

    /// Newtype wrapper implementing `Deref` and `Arbitrary`, so that test functions can take
    /// foreign types as generated arguments.
    macro_rules! arbitrary_wrapper {
        ( $wrapper_name:ident ( $type:ty ) -> $block:block ) => {
            #[derive(Copy, Clone, Debug)]
            pub struct $wrapper_name(pub $type);

            impl std::ops::Deref for $wrapper_name {
                type Target = $type;
                fn deref(&self) -> &$type {
                    &self.0
                }
            }

            impl Arbitrary for $wrapper_name {
                type Parameters = ();
                type Strategy = proptest::strategy::BoxedStrategy<Self>;
                fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
                    $block.prop_map(|x| $wrapper_name(x)).boxed()
                }
            }
        };
    }

    fn simple_float() -> BoxedStrategy<f32> {
        any::<i32>().prop_map(|n| n as f32 * 1e-6).boxed()
    }

    fn simple_positive_float() -> BoxedStrategy<f32> {
        any::<u32>().prop_map(|n| n as f32 * 1e-6).boxed()
    }

    /// Nonzero magnitudes from 1e-30 down into subnormals, where slab crossing times overflow
    fn tiny_float() -> BoxedStrategy<f32> {
        (any::<bool>(), 1i32..1000, 30i32..45)
            .prop_map(|(negative, mantissa, exponent)| {
                let x = (mantissa as f64 * 10f64.powi(-exponent - 3)) as f32;
                if x == 0.0 {
                    f32::from_bits(1)
                } else if negative {
                    -x
                } else {
                    x
                }
            })
            .boxed()
    }

    /// Float that is exactly zero or tiny a good part of the time,
    /// to hit the parallel and nearly parallel slab cases
    fn often_zero_float() -> BoxedStrategy<f32> {
        prop_oneof![Just(0.0f32), tiny_float(), simple_float()].boxed()
    }

    arbitrary_wrapper! {
        WorldPointWrapper(WorldPoint) -> {
            (simple_float(), simple_float(), simple_float())
                .prop_map(|coords| WorldPoint::new(coords.0, coords.1, coords.2))
        }
    }

    arbitrary_wrapper! {
        NonzeroWorldVectorWrapper(WorldVector) -> {
            (often_zero_float(), often_zero_float(), often_zero_float())
                .prop_filter_map(
                    "vector is zero",
                    |coords| {
                        let vector = WorldVector::new(coords.0, coords.1, coords.2);
                        if vector.norm() < 1e-6 {
                            None
                        } else {
                            Some(vector)
                        }
                    })
        }
    }

    arbitrary_wrapper! {
        TinyWorldVectorWrapper(WorldVector) -> {
            (tiny_float(), prop_oneof![Just(0.0f32), tiny_float()], tiny_float())
                .prop_map(|coords| WorldVector::new(coords.0, coords.1, coords.2))
        }
    }

    arbitrary_wrapper! {
        AabbWrapper(Aabb) -> {
            (
                simple_float(), simple_float(), simple_float(),
                simple_positive_float(), simple_positive_float(), simple_positive_float(),
            )
                .prop_map(|(x, y, z, w, h, d)| {
                    let min = WorldPoint::new(x, y, z);
                    Aabb::new(min, min + WorldVector::new(w, h, d))
                })
        }
    }

    #[test]
    fn point_at_does_not_normalize() {
        let r = Ray::new(WorldPoint::new(1.0, 2.0, 3.0), WorldVector::new(0.0, 2.0, 0.0));
        assert!(r.point_at(1.5) == WorldPoint::new(1.0, 5.0, 3.0));
        assert!(r.point_at(0.0) == r.origin);
    }

    #[test]
    fn ray_from_flat() {
        let r = Ray::from([-5.0, 0.5, 1.0, 1.0, 0.0, -0.25]);
        assert!(r.origin == WorldPoint::new(-5.0, 0.5, 1.0));
        assert!(r.direction == WorldVector::new(1.0, 0.0, -0.25));
    }
}
