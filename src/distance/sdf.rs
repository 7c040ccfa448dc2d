//! Signed distance field contract.
//!
//! Signed distance fields (SDFs) represent shapes as scalar fields where each point
//! stores the signed distance to the nearest surface. Positive values are outside,
//! negative values are inside.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Trait for shapes that can compute signed distance.
///
/// Implementations must be pure and total: every finite point yields a value.
pub trait Sdf2<F: Float> {
    /// Returns the signed distance from point `p` to this shape.
    ///
    /// - Positive: outside the shape
    /// - Zero: on the boundary
    /// - Negative: inside the shape
    fn signed_distance(&self, p: Point2<F>) -> F;

    /// Returns the unsigned distance from point `p` to this shape.
    fn distance(&self, p: Point2<F>) -> F {
        self.signed_distance(p).abs()
    }

    /// Returns true if the point is inside the shape (negative distance).
    fn contains(&self, p: Point2<F>) -> bool {
        self.signed_distance(p) < F::zero()
    }

    /// Returns the vector from `p` to the nearest surface point.
    ///
    /// `distance` is a signed distance previously computed at `p`; the
    /// result has magnitude `|distance|`. Shapes without a closed-form
    /// gradient return `None`.
    fn vector_to_surface(&self, _p: Point2<F>, _distance: F) -> Option<Vec2<F>> {
        None
    }
}

/// Signed distance to a circle.
///
/// Negative inside, positive outside.
#[inline]
pub fn sdf_circle<F: Float>(p: Point2<F>, center: Point2<F>, radius: F) -> F {
    p.distance(center) - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    struct HalfPlane;

    // Everything with y < 0 is inside.
    impl Sdf2<f64> for HalfPlane {
        fn signed_distance(&self, p: Point2<f64>) -> f64 {
            p.y
        }
    }

    #[test]
    fn test_sdf_circle() {
        let center = Point2::new(0.0, 0.0);
        let radius = 5.0;

        // Outside
        let p1 = Point2::new(8.0, 0.0);
        assert!((sdf_circle(p1, center, radius) - 3.0).abs() < 1e-10);

        // Inside
        let p2 = Point2::new(2.0, 0.0);
        assert!((sdf_circle(p2, center, radius) - (-3.0)).abs() < 1e-10);

        // On boundary
        let p3 = Point2::new(5.0, 0.0);
        assert!(sdf_circle(p3, center, radius).abs() < 1e-10);
    }

    #[test]
    fn test_provided_methods() {
        let shape = HalfPlane;
        assert_eq!(shape.distance(Point2::new(0.0, -2.0)), 2.0);
        assert!(shape.contains(Point2::new(3.0, -0.1)));
        assert!(!shape.contains(Point2::new(3.0, 0.0)));
    }

    #[test]
    fn test_vector_to_surface_defaults_to_none() {
        let shape = HalfPlane;
        assert!(shape
            .vector_to_surface(Point2::new(0.0, 1.0), 1.0)
            .is_none());
    }
}
