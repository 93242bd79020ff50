use std::fmt::Display;

use super::{Aabb, Axis, Ray, WorldPoint, WorldVector};

/// Complete record of a ray passing through a box.
/// Values are only meaningful if `hit()` is true.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectionResult {
    hit: bool,
    started_inside: bool,
    entry_time: f32,
    exit_time: f32,
    entry_point: WorldPoint,
    exit_point: WorldPoint,
    entry_normal: WorldVector,
    exit_normal: WorldVector,
}

impl IntersectionResult {
    /// Empty interval, zero points and normals.
    fn miss() -> Self {
        IntersectionResult {
            hit: false,
            started_inside: false,
            entry_time: f32::INFINITY,
            exit_time: f32::NEG_INFINITY,
            entry_point: WorldPoint::origin(),
            exit_point: WorldPoint::origin(),
            entry_normal: WorldVector::zeros(),
            exit_normal: WorldVector::zeros(),
        }
    }

    /// Ray origin is inside the box, there is no entry face.
    /// `exit_axis` is None only for a zero direction, the ray then never leaves.
    fn from_inside(ray: &Ray, exit_time: f32, exit_axis: Option<Axis>) -> Self {
        let (exit_point, exit_normal) = match exit_axis {
            Some(axis) => (
                ray.point_at(exit_time),
                axis.unit(ray.direction[axis.index()]),
            ),
            None => (ray.origin, WorldVector::zeros()),
        };

        IntersectionResult {
            hit: true,
            started_inside: true,
            entry_time: 0.0,
            exit_time,
            entry_point: ray.origin,
            exit_point,
            entry_normal: WorldVector::zeros(),
            exit_normal,
        }
    }

    fn passing_through(
        ray: &Ray,
        entry_time: f32,
        entry_axis: Axis,
        exit_time: f32,
        exit_axis: Axis,
    ) -> Self {
        IntersectionResult {
            hit: true,
            started_inside: false,
            entry_time,
            exit_time,
            entry_point: ray.point_at(entry_time),
            exit_point: ray.point_at(exit_time),
            // Facing back against the ray
            entry_normal: axis_normal(entry_axis, -ray.direction[entry_axis.index()]),
            exit_normal: axis_normal(exit_axis, ray.direction[exit_axis.index()]),
        }
    }

    pub fn hit(&self) -> bool {
        self.hit
    }

    /// True if the ray origin was already inside the box (or on the face it leaves through).
    pub fn started_inside(&self) -> bool {
        self.started_inside
    }

    /// Ray parameter of the entry, clamped to zero when the ray starts inside.
    pub fn entry_time(&self) -> f32 {
        self.entry_time
    }

    pub fn exit_time(&self) -> f32 {
        self.exit_time
    }

    pub fn entry_point(&self) -> WorldPoint {
        self.entry_point
    }

    pub fn exit_point(&self) -> WorldPoint {
        self.exit_point
    }

    /// Outward normal of the face the ray enters through, zero vector if the ray started inside.
    pub fn entry_normal(&self) -> WorldVector {
        self.entry_normal
    }

    /// Outward normal of the face the ray leaves through.
    pub fn exit_normal(&self) -> WorldVector {
        self.exit_normal
    }

    /// Entry and exit time, if there is a hit.
    pub fn hit_interval(&self) -> Option<(f32, f32)> {
        self.hit.then_some((self.entry_time, self.exit_time))
    }
}

fn axis_normal(axis: Axis, sign: f32) -> WorldVector {
    debug_assert!(sign != 0.0, "{axis:?} was selected as a boundary of a parallel slab");
    axis.unit(sign)
}

/// Intersects the ray with the box using the slab method.
///
/// Axes are processed in X, Y, Z order with strict comparisons, so when several
/// slabs share the same entry or exit time the first one of them provides the normal.
pub fn intersect(ray: &Ray, aabb: &Aabb) -> IntersectionResult {
    let mut entry_time = f32::NEG_INFINITY;
    let mut exit_time = f32::INFINITY;
    let mut entry_axis = None;
    let mut exit_axis = None;

    for axis in Axis::ALL {
        let i = axis.index();
        let origin = ray.origin[i];
        let direction = ray.direction[i];

        if direction == 0.0 {
            if origin < aabb.min[i] || origin > aabb.max[i] {
                return IntersectionResult::miss();
            }
            // Unbounded slab, (-inf, inf) never wins the strict comparisons below
            continue;
        }

        let mut t_near = (aabb.min[i] - origin) / direction;
        let mut t_far = (aabb.max[i] - origin) / direction;
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
        }

        if t_near > entry_time {
            entry_time = t_near;
            entry_axis = Some(axis);
        }
        if t_far < exit_time {
            exit_time = t_far;
            exit_axis = Some(axis);
        }
    }

    if entry_time > exit_time || exit_time < 0.0 {
        return IntersectionResult::miss();
    }

    // A slab crossing time overflowed f32, a direction component this small
    // doesn't reach the boundary in representable time.
    // Infinite exit is only legitimate for a zero direction that never leaves the box.
    let moving = ray.direction != WorldVector::zeros();
    if entry_time == f32::INFINITY || (moving && exit_time == f32::INFINITY) {
        return IntersectionResult::miss();
    }

    if entry_time < 0.0 {
        return IntersectionResult::from_inside(ray, exit_time, exit_axis);
    }

    // Non-negative finite entry time means at least one slab bounded the ray
    // from both sides, so both axes were recorded.
    let (Some(entry_axis), Some(exit_axis)) = (entry_axis, exit_axis) else {
        unreachable!(
            "finite interval [{entry_time}, {exit_time}] without boundary axes ({entry_axis:?}, {exit_axis:?})"
        );
    };

    IntersectionResult::passing_through(ray, entry_time, entry_axis, exit_time, exit_axis)
}

struct Coords<'a>(&'a [f32]);

impl Display for Coords<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

impl Display for IntersectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.hit {
            return write!(f, "miss");
        }

        if self.started_inside {
            write!(f, "hit, starting inside")?;
        } else {
            write!(
                f,
                "hit, entering at t = {} {} normal {}",
                self.entry_time,
                Coords(self.entry_point.coords.as_slice()),
                Coords(self.entry_normal.as_slice()),
            )?;
        }

        write!(
            f,
            ", exiting at t = {} {} normal {}",
            self.exit_time,
            Coords(self.exit_point.coords.as_slice()),
            Coords(self.exit_normal.as_slice()),
        )
    }
}
