//! Floating-point geometric primitives.

mod point2;
mod point3;
mod vec2;

pub use point2::Point2;
pub use point3::Point3;
pub use vec2::Vec2;
