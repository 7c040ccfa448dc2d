//! The sampling lattice.

use super::GridConfig;
use crate::error::Result;
use crate::primitives::{Point2, Point3};
use crate::revision::{cast, Revision};
use num_traits::Float;
use tracing::debug;

/// A regular 2D lattice of sample vertices.
///
/// Vertex `(x, y)` with `x ∈ [0, width]` and `y ∈ [0, height]` sits at
/// `origin + (x * cell_size, y * cell_size)`. The grid is immutable apart
/// from [`Grid::reconfigure`], which stamps a fresh [`Revision`] so that
/// sampled data taken from the previous layout can be recognised as stale.
///
/// # Example
///
/// ```
/// use isoline::grid::{Grid, GridConfig};
/// use isoline::primitives::Point2;
///
/// let grid: Grid<f64> = Grid::new(GridConfig::default().with_cell_size(0.5));
/// assert_eq!(grid.vertex_counts(), (9, 9));
/// assert_eq!(grid.position_of(2, 4), Point2::new(1.0, 2.0));
/// ```
#[derive(Debug, Clone)]
pub struct Grid<F> {
    config: GridConfig<F>,
    revision: Revision,
}

impl<F: Float> Grid<F> {
    /// Creates a grid, clamping out-of-range parameters.
    ///
    /// See [`GridConfig::sanitized`].
    pub fn new(config: GridConfig<F>) -> Self {
        Self {
            config: config.sanitized(),
            revision: Revision::next(),
        }
    }

    /// Creates a grid, rejecting out-of-range parameters.
    ///
    /// # Errors
    ///
    /// Returns the error from [`GridConfig::validate`].
    pub fn try_new(config: GridConfig<F>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            revision: Revision::next(),
        })
    }

    /// Replaces the layout. Any previously sampled field becomes stale.
    pub fn reconfigure(&mut self, config: GridConfig<F>) {
        self.config = config.sanitized();
        self.revision = Revision::next();
        debug!(
            width = self.config.width,
            height = self.config.height,
            revision = self.revision.get(),
            "grid reconfigured"
        );
    }

    /// Like [`Grid::reconfigure`] but leaves the grid untouched on invalid input.
    ///
    /// # Errors
    ///
    /// Returns the error from [`GridConfig::validate`].
    pub fn try_reconfigure(&mut self, config: GridConfig<F>) -> Result<()> {
        config.validate()?;
        self.reconfigure(config);
        Ok(())
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &GridConfig<F> {
        &self.config
    }

    /// Revision stamped at construction or the last reconfiguration.
    #[inline]
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Number of cells along x.
    #[inline]
    pub fn width(&self) -> usize {
        self.config.width
    }

    /// Number of cells along y.
    #[inline]
    pub fn height(&self) -> usize {
        self.config.height
    }

    /// Edge length of a cell in world units.
    #[inline]
    pub fn cell_size(&self) -> F {
        self.config.cell_size
    }

    /// World position of vertex (0, 0).
    #[inline]
    pub fn origin(&self) -> Point2<F> {
        self.config.origin
    }

    /// Depth of the grid plane for 3D layouts.
    #[inline]
    pub fn plane_offset(&self) -> F {
        self.config.plane_offset
    }

    /// Vertex counts along x and y: `(width + 1, height + 1)`.
    #[inline]
    pub fn vertex_counts(&self) -> (usize, usize) {
        (self.config.width + 1, self.config.height + 1)
    }

    /// Total number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        let (columns, rows) = self.vertex_counts();
        columns * rows
    }

    /// Returns true if `(x, y)` is a vertex of this grid.
    #[inline]
    pub fn contains_vertex(&self, x: usize, y: usize) -> bool {
        x <= self.config.width && y <= self.config.height
    }

    /// World position of vertex `(x, y)`.
    ///
    /// Indices outside the lattice are not checked; they extrapolate along
    /// the same spacing. Use [`Grid::contains_vertex`] first when the
    /// indices come from an untrusted source.
    #[inline]
    pub fn position_of(&self, x: usize, y: usize) -> Point2<F> {
        let size = self.config.cell_size;
        Point2::new(
            self.config.origin.x + cast::<F, _>(x) * size,
            self.config.origin.y + cast::<F, _>(y) * size,
        )
    }

    /// World position of vertex `(x, y)` on the grid plane, with the plane
    /// offset as `z`.
    #[inline]
    pub fn position_of_3d(&self, x: usize, y: usize) -> Point3<F> {
        Point3::from_planar(self.position_of(x, y), self.config.plane_offset)
    }

    /// World-space bounds of the lattice as (min, max) corners.
    pub fn extent(&self) -> (Point2<F>, Point2<F>) {
        (
            self.config.origin,
            self.position_of(self.config.width, self.config.height),
        )
    }

    /// Iterates over all vertex indices in row-major order (x fastest).
    pub fn vertices(&self) -> impl Iterator<Item = (usize, usize)> {
        let (columns, rows) = self.vertex_counts();
        (0..rows).flat_map(move |y| (0..columns).map(move |x| (x, y)))
    }
}

impl<F: Float> Default for Grid<F> {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IsolineError;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_of_matches_formula() {
        let config = GridConfig::default()
            .with_size(10, 6)
            .with_cell_size(0.25)
            .with_origin(Point2::new(-1.5, 3.0));
        let grid: Grid<f64> = Grid::new(config);

        for (x, y) in grid.vertices() {
            let p = grid.position_of(x, y);
            assert_eq!(p.x, -1.5 + x as f64 * 0.25);
            assert_eq!(p.y, 3.0 + y as f64 * 0.25);
        }
    }

    #[test]
    fn test_position_of_3d_carries_plane_offset() {
        let grid: Grid<f32> = Grid::new(GridConfig::default().with_plane_offset(-0.5));
        let p = grid.position_of_3d(3, 1);
        assert_eq!(p, Point3::new(3.0, 1.0, -0.5));
        assert_eq!(p.planar(), grid.position_of(3, 1));
    }

    #[test]
    fn test_vertex_counts() {
        let grid: Grid<f64> = Grid::new(GridConfig::default().with_size(4, 2));
        assert_eq!(grid.vertex_counts(), (5, 3));
        assert_eq!(grid.vertex_count(), 15);
        assert_eq!(grid.vertices().count(), 15);
        assert_eq!(grid.vertices().next(), Some((0, 0)));
        assert_eq!(grid.vertices().nth(5), Some((0, 1)));
    }

    #[test]
    fn test_contains_vertex_is_inclusive() {
        let grid: Grid<f64> = Grid::new(GridConfig::default().with_size(4, 2));
        assert!(grid.contains_vertex(0, 0));
        assert!(grid.contains_vertex(4, 2));
        assert!(!grid.contains_vertex(5, 0));
        assert!(!grid.contains_vertex(0, 3));
    }

    #[test]
    fn test_new_sanitizes() {
        let grid: Grid<f64> = Grid::new(GridConfig::default().with_size(0, 3).with_cell_size(0.0));
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 3);
        assert_relative_eq!(grid.cell_size(), 0.01);
    }

    #[test]
    fn test_try_new_rejects() {
        let result = Grid::<f64>::try_new(GridConfig::default().with_size(2, 0));
        assert!(matches!(
            result,
            Err(IsolineError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_reconfigure_bumps_revision() {
        let mut grid: Grid<f64> = Grid::default();
        let before = grid.revision();

        // Same dimensions, different origin still invalidates.
        grid.reconfigure(GridConfig::default().with_origin(Point2::new(1.0, 1.0)));
        assert!(grid.revision() > before);
        assert_eq!(grid.origin(), Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_try_reconfigure_keeps_old_layout_on_error() {
        let mut grid: Grid<f64> = Grid::default();
        let before = grid.revision();
        let result = grid.try_reconfigure(GridConfig::default().with_cell_size(f64::NAN));
        assert!(result.is_err());
        assert_eq!(grid.revision(), before);
        assert_eq!(grid.cell_size(), 1.0);
    }

    #[test]
    fn test_extent() {
        let grid: Grid<f64> = Grid::new(
            GridConfig::default()
                .with_size(4, 2)
                .with_cell_size(2.0)
                .with_origin(Point2::new(1.0, -1.0)),
        );
        let (min, max) = grid.extent();
        assert_eq!(min, Point2::new(1.0, -1.0));
        assert_eq!(max, Point2::new(9.0, 3.0));
    }
}
