//! Closed set of shape variants the sampler can evaluate.

use super::{Circle, Sdf2};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    Circle,
}

/// A distance field variant.
///
/// Adding a shape means adding a variant here and an [`Sdf2`] impl for it;
/// the sampler and the crossing search only see the trait.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape<F> {
    Circle(Circle<F>),
}

impl<F: Float> Shape<F> {
    /// Discriminant of this variant.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// The circle, if this is a circle.
    pub fn as_circle(&self) -> Option<&Circle<F>> {
        match self {
            Shape::Circle(circle) => Some(circle),
        }
    }

    /// Mutable access to the circle, if this is a circle.
    pub fn as_circle_mut(&mut self) -> Option<&mut Circle<F>> {
        match self {
            Shape::Circle(circle) => Some(circle),
        }
    }
}

impl<F: Float> From<Circle<F>> for Shape<F> {
    fn from(circle: Circle<F>) -> Self {
        Shape::Circle(circle)
    }
}

impl<F: Float> Sdf2<F> for Shape<F> {
    fn signed_distance(&self, p: Point2<F>) -> F {
        match self {
            Shape::Circle(circle) => circle.signed_distance(p),
        }
    }

    fn vector_to_surface(&self, p: Point2<F>, distance: F) -> Option<Vec2<F>> {
        match self {
            Shape::Circle(circle) => circle.vector_to_surface(p, distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_variant() {
        let circle: Circle<f64> = Circle::new(Point2::new(2.0, 2.0), 1.5);
        let shape = Shape::from(circle);
        let p = Point2::new(0.0, 0.0);

        assert_eq!(shape.kind(), ShapeKind::Circle);
        assert_eq!(shape.signed_distance(p), circle.signed_distance(p));
        assert_eq!(
            shape.vector_to_surface(p, 1.0),
            circle.vector_to_surface(p, 1.0)
        );
    }

    #[test]
    fn test_as_circle_mut_edits_in_place() {
        let mut shape: Shape<f32> = Circle::default().into();
        if let Some(circle) = shape.as_circle_mut() {
            circle.set_radius(0.5);
        }
        assert_eq!(shape.as_circle().map(Circle::radius), Some(0.5));
    }
}
