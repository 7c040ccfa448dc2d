//! isoline - Signed distance sampling and zero-crossing extraction on 2D grids
//!
//! A scalar field defined by a signed distance function is sampled on a regular
//! lattice. Grid edges whose endpoints change sign are located and linearly
//! interpolated to approximate where the field crosses zero. This is the
//! numerical core of Surface Nets and Marching Squares style contouring.
//!
//! ```
//! use isoline::contour::{find_crossings, DEFAULT_SIGN_EPSILON};
//! use isoline::distance::Circle;
//! use isoline::field::FieldSampler;
//! use isoline::grid::{Grid, GridConfig};
//! use isoline::primitives::Point2;
//!
//! let grid: Grid<f64> = Grid::new(GridConfig::default().with_size(4, 4));
//! let mut sampler = FieldSampler::with_shape(Circle::new(Point2::new(2.0, 2.0), 1.5));
//! sampler.ensure_current(&grid);
//!
//! let crossings = find_crossings(&grid, &sampler, DEFAULT_SIGN_EPSILON);
//! assert_eq!(crossings.len(), 12);
//! ```

pub mod contour;
pub mod distance;
pub mod error;
pub mod field;
pub mod grid;
pub mod primitives;
pub mod revision;

pub use contour::{classify, has_crossing, interpolate, Edge, EdgeCrossing, SignCategory};
pub use distance::{Circle, Sdf2, Shape};
pub use error::{IsolineError, Result};
pub use field::{FieldSampler, SurfaceVector};
pub use grid::{Grid, GridConfig};
pub use primitives::{Point2, Point3, Vec2};
pub use revision::Revision;
