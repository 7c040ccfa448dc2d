//! Circle distance field.

use super::{sdf_circle, Sdf2};
use crate::primitives::{Point2, Vec2};
use crate::revision::cast;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest radius a [`Circle`] will evaluate with.
pub const MIN_RADIUS: f64 = 0.0001;

/// A circle for SDF computation: `d = |p - center| - radius`.
///
/// The radius is clamped to [`MIN_RADIUS`] on every read, so a circle built
/// or deserialized with a degenerate radius still evaluates as a tiny disc.
///
/// # Example
///
/// ```
/// use isoline::distance::{Circle, Sdf2};
/// use isoline::primitives::Point2;
///
/// let circle: Circle<f64> = Circle::new(Point2::new(2.0, 2.0), 1.5);
/// assert_eq!(circle.signed_distance(Point2::new(2.0, 2.0)), -1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle<F> {
    center: Point2<F>,
    radius: F,
}

impl<F: Float> Circle<F> {
    /// Creates a circle, clamping `radius` to [`MIN_RADIUS`].
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self {
            center,
            radius: clamp_radius(radius),
        }
    }

    /// Center of the circle.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.center
    }

    /// Radius of the circle, never below [`MIN_RADIUS`].
    #[inline]
    pub fn radius(&self) -> F {
        clamp_radius(self.radius)
    }

    /// Moves the circle.
    pub fn set_center(&mut self, center: Point2<F>) {
        self.center = center;
    }

    /// Sets the radius, clamping to [`MIN_RADIUS`].
    pub fn set_radius(&mut self, radius: F) {
        self.radius = clamp_radius(radius);
    }
}

impl<F: Float> Default for Circle<F> {
    fn default() -> Self {
        Self::new(Point2::origin(), F::one() + F::one())
    }
}

#[inline]
fn clamp_radius<F: Float>(radius: F) -> F {
    radius.max(cast(MIN_RADIUS))
}

impl<F: Float> Sdf2<F> for Circle<F> {
    fn signed_distance(&self, p: Point2<F>) -> F {
        sdf_circle(p, self.center, self.radius())
    }

    /// Points along the radial direction: toward the center from outside,
    /// away from it from inside.
    ///
    /// At the exact center the direction is undefined and the zero vector is
    /// returned. This is the only discontinuity of the estimate.
    fn vector_to_surface(&self, p: Point2<F>, distance: F) -> Option<Vec2<F>> {
        let offset = self.center - p;
        if offset.is_zero() {
            return Some(Vec2::zero());
        }
        // hypot avoids underflow for offsets far below machine epsilon
        let length = offset.x.hypot(offset.y);
        Some(offset * (distance / length))
    }
}
