//! 3D point type for grids laid out on a plane in 3D space.

use super::Point2;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D point with x, y, and z coordinates.
///
/// The kernel works in the XY plane; `z` carries the plane offset of the
/// grid for hosts that lay the lattice out in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Lifts a planar point onto the plane `z = offset`.
    #[inline]
    pub fn from_planar(p: Point2<F>, offset: F) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: offset,
        }
    }

    /// Drops the `z` coordinate.
    #[inline]
    pub fn planar(self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

impl<F: Float> From<Point2<F>> for Point3<F> {
    fn from(p: Point2<F>) -> Self {
        Self::from_planar(p, F::zero())
    }
}
