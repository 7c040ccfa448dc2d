//! Grid configuration.

use crate::error::{IsolineError, Result};
use crate::primitives::Point2;
use crate::revision::cast;
use num_traits::Float;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest accepted cell size.
pub const MIN_CELL_SIZE: f64 = 0.01;

/// Parameters describing a regular sampling lattice.
///
/// `width` and `height` count cells; the lattice has `width + 1` by
/// `height + 1` vertices.
///
/// # Example
///
/// ```
/// use isoline::grid::GridConfig;
/// use isoline::primitives::Point2;
///
/// let config: GridConfig<f64> = GridConfig::default()
///     .with_size(4, 4)
///     .with_origin(Point2::new(-2.0, -2.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig<F> {
    /// Number of cells along x. Default: 8
    pub width: usize,

    /// Number of cells along y. Default: 8
    pub height: usize,

    /// Edge length of a cell in world units. Default: 1.0
    pub cell_size: F,

    /// World position of vertex (0, 0). Default: (0, 0)
    pub origin: Point2<F>,

    /// Depth of the grid plane for 3D layouts. Not used by distance
    /// evaluation. Default: 0.0
    pub plane_offset: F,
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            cell_size: F::one(),
            origin: Point2::origin(),
            plane_offset: F::zero(),
        }
    }
}

impl<F: Float> GridConfig<F> {
    /// Set the cell counts along x and y.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the cell size.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: F) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the world position of vertex (0, 0).
    #[must_use]
    pub fn with_origin(mut self, origin: Point2<F>) -> Self {
        self.origin = origin;
        self
    }

    /// Set the plane offset.
    #[must_use]
    pub fn with_plane_offset(mut self, plane_offset: F) -> Self {
        self.plane_offset = plane_offset;
        self
    }

    /// Clamps the configuration into its valid range.
    ///
    /// Cell counts are raised to at least 1 and the cell size to at least
    /// [`MIN_CELL_SIZE`]. A NaN cell size becomes the minimum.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let min_cell: F = cast(MIN_CELL_SIZE);
        self.width = self.width.max(1);
        self.height = self.height.max(1);
        // `max` returns the non-NaN operand
        self.cell_size = self.cell_size.max(min_cell);
        self
    }

    /// Checks the configuration without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`IsolineError::InvalidDimensions`] for a zero cell count,
    /// [`IsolineError::NonFiniteParameter`] for NaN or infinite values, and
    /// [`IsolineError::InvalidCellSize`] when the cell size is below
    /// [`MIN_CELL_SIZE`].
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            debug!(%err, "grid configuration rejected");
        }
        result
    }

    fn check(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(IsolineError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.cell_size.is_finite() {
            return Err(IsolineError::NonFiniteParameter { name: "cell_size" });
        }
        if !self.origin.is_finite() {
            return Err(IsolineError::NonFiniteParameter { name: "origin" });
        }
        if !self.plane_offset.is_finite() {
            return Err(IsolineError::NonFiniteParameter {
                name: "plane_offset",
            });
        }
        if self.cell_size < cast::<F, _>(MIN_CELL_SIZE) {
            return Err(IsolineError::InvalidCellSize {
                size: self.cell_size.to_f64().unwrap_or(f64::NAN),
                min: MIN_CELL_SIZE,
            });
        }
        Ok(())
    }
}
