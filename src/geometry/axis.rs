use thiserror::Error;

use super::WorldVector;

/// One of the three world axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("axis index {0} out of range, expected 0, 1 or 2")]
pub struct AxisIndexError(pub usize);

impl Axis {
    /// All axes in the order used for slab iteration and tie breaking.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis, pointing in the direction of the sign of `sign`.
    /// Zero (of either sign) counts as positive.
    pub fn unit(self, sign: f32) -> WorldVector {
        let s = if sign < 0.0 { -1.0 } else { 1.0 };
        match self {
            Axis::X => WorldVector::new(s, 0.0, 0.0),
            Axis::Y => WorldVector::new(0.0, s, 0.0),
            Axis::Z => WorldVector::new(0.0, 0.0, s),
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = AxisIndexError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(AxisIndexError(value)),
        }
    }
}
