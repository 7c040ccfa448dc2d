//! Sign classification and zero-crossing search on sampled fields.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used, apart from the floating-point resolution
//! guard in [`interpolate`].

mod classify;
mod crossing;
mod edge;

pub use classify::{classify, SignCategory, DEFAULT_SIGN_EPSILON};
pub use crossing::{find_crossings, has_crossing, interpolate, resolve_edge, EdgeCrossing};
pub use edge::{Axis, Edge};
