//! Error types for isoline operations.
//!
//! The sampling and crossing kernel is total and never fails. Errors are only
//! reported by the strict construction paths: grid validation and edge
//! construction.

use thiserror::Error;

/// Errors reported when building kernel inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IsolineError {
    /// Grid must have at least one cell along each axis.
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions {
        /// Requested cell count along x.
        width: usize,
        /// Requested cell count along y.
        height: usize,
    },

    /// Cell size is below the supported floor.
    #[error("cell size {size} is below the minimum of {min}")]
    InvalidCellSize {
        /// Requested cell size.
        size: f64,
        /// Smallest accepted cell size.
        min: f64,
    },

    /// A configuration value is NaN or infinite.
    #[error("grid parameter `{name}` is not finite")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// Edge endpoints are not axis-aligned unit neighbours.
    #[error("vertices {start:?} and {end:?} are not grid-adjacent")]
    NonAdjacentEdge {
        /// First endpoint.
        start: (usize, usize),
        /// Second endpoint.
        end: (usize, usize),
    },
}

/// Result type for isoline operations.
pub type Result<T> = std::result::Result<T, IsolineError>;
