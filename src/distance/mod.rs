//! Signed distance fields.

mod circle;
mod sdf;
mod shape;

pub use circle::{Circle, MIN_RADIUS};
pub use sdf::{sdf_circle, Sdf2};
pub use shape::{Shape, ShapeKind};
