//! Regular sampling lattices and grid-to-world mapping.

mod config;
mod lattice;

pub use config::{GridConfig, MIN_CELL_SIZE};
pub use lattice::Grid;
