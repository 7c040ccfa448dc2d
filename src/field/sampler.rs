//! Dense sampling of a distance field over grid vertices.

use crate::distance::{Sdf2, Shape};
use crate::grid::Grid;
use crate::primitives::{Point2, Vec2};
use crate::revision::Revision;
use num_traits::Float;
use tracing::{debug, trace};

/// Lifecycle of the sampled array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerState {
    /// Nothing has been sampled yet.
    Empty,
    /// Values are present for the recorded grid and shape revisions.
    Populated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SampleStamp {
    grid: Revision,
    shape: Revision,
}

/// Samples the active shape at every vertex of a [`Grid`] and caches the result.
///
/// Values are stored row-major (x fastest) with exactly `(width + 1) * (height + 1)`
/// entries. The array is only written by [`FieldSampler::recompute`]; readers go
/// through [`FieldSampler::get`] or the read-only [`FieldSampler::values`].
///
/// The sampler records the grid and shape revisions it last sampled. Edits made
/// through [`FieldSampler::set_shape`] or [`FieldSampler::shape_mut`] and grid
/// reconfiguration both show up in [`FieldSampler::is_stale`]. Nothing is
/// recomputed implicitly: callers decide when to call
/// [`FieldSampler::recompute`] or [`FieldSampler::ensure_current`].
///
/// # Example
///
/// ```
/// use isoline::distance::Circle;
/// use isoline::field::FieldSampler;
/// use isoline::grid::{Grid, GridConfig};
/// use isoline::primitives::Point2;
///
/// let grid: Grid<f64> = Grid::new(GridConfig::default().with_size(4, 4));
/// let mut sampler = FieldSampler::with_shape(Circle::new(Point2::new(2.0, 2.0), 1.5));
///
/// assert_eq!(sampler.get(2, 2), 0.0); // nothing sampled yet
/// sampler.recompute(&grid);
/// assert_eq!(sampler.get(2, 2), -1.5);
/// ```
#[derive(Debug, Clone)]
pub struct FieldSampler<F> {
    shape: Option<Shape<F>>,
    shape_revision: Revision,
    values: Vec<F>,
    columns: usize,
    rows: usize,
    stamp: Option<SampleStamp>,
}

impl<F: Float> FieldSampler<F> {
    /// Creates a sampler with no shape. Every sample will be zero.
    pub fn new() -> Self {
        Self {
            shape: None,
            shape_revision: Revision::next(),
            values: Vec::new(),
            columns: 0,
            rows: 0,
            stamp: None,
        }
    }

    /// Creates a sampler evaluating `shape`.
    pub fn with_shape(shape: impl Into<Shape<F>>) -> Self {
        let mut sampler = Self::new();
        sampler.shape = Some(shape.into());
        sampler
    }

    /// The active shape, if any.
    pub fn shape(&self) -> Option<&Shape<F>> {
        self.shape.as_ref()
    }

    /// Mutable access to the active shape.
    ///
    /// Taking the handle marks the shape as edited, so the cached samples
    /// report stale until the next recompute.
    pub fn shape_mut(&mut self) -> Option<&mut Shape<F>> {
        self.shape_revision = Revision::next();
        self.shape.as_mut()
    }

    /// Replaces the active shape.
    pub fn set_shape(&mut self, shape: impl Into<Shape<F>>) {
        self.shape = Some(shape.into());
        self.shape_revision = Revision::next();
    }

    /// Removes the active shape. Subsequent samples are zero.
    pub fn clear_shape(&mut self) {
        self.shape = None;
        self.shape_revision = Revision::next();
    }

    /// Evaluates the active shape at `p`, or zero without a shape.
    #[inline]
    pub fn evaluate(&self, p: Point2<F>) -> F {
        self.shape
            .as_ref()
            .map_or_else(F::zero, |shape| shape.signed_distance(p))
    }

    /// Vector from `p` toward the nearest surface point.
    ///
    /// `distance` is the signed distance previously sampled at `p`. Falls back
    /// to the zero vector when there is no shape or the shape has no
    /// closed-form gradient.
    pub fn vector_to_surface(&self, p: Point2<F>, distance: F) -> Vec2<F> {
        self.shape
            .as_ref()
            .and_then(|shape| shape.vector_to_surface(p, distance))
            .unwrap_or_else(Vec2::zero)
    }

    /// Samples the active shape at every vertex of `grid`.
    ///
    /// The backing array is reallocated only when the vertex counts changed;
    /// otherwise it is overwritten in place.
    pub fn recompute(&mut self, grid: &Grid<F>) {
        let (columns, rows) = grid.vertex_counts();
        if columns != self.columns || rows != self.rows {
            debug!(
                old_columns = self.columns,
                old_rows = self.rows,
                columns,
                rows,
                "reallocating sampled field"
            );
            self.values = vec![F::zero(); columns * rows];
            self.columns = columns;
            self.rows = rows;
        }

        let shape = self.shape.as_ref();
        for (y, row) in self.values.chunks_exact_mut(columns).enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                let p = grid.position_of(x, y);
                *value = shape.map_or_else(F::zero, |shape| shape.signed_distance(p));
            }
        }

        self.stamp = Some(SampleStamp {
            grid: grid.revision(),
            shape: self.shape_revision,
        });
        trace!(columns, rows, "sampled field recomputed");
    }

    /// Returns true if the cached samples do not describe `grid` and the
    /// current shape.
    pub fn is_stale(&self, grid: &Grid<F>) -> bool {
        let Some(stamp) = self.stamp else {
            return true;
        };
        let stale = grid.vertex_counts() != (self.columns, self.rows)
            || stamp.grid != grid.revision()
            || stamp.shape != self.shape_revision;
        trace!(stale, "checked sampled field against grid");
        stale
    }

    /// Recomputes if [`FieldSampler::is_stale`]. Returns whether it did.
    pub fn ensure_current(&mut self, grid: &Grid<F>) -> bool {
        if self.is_stale(grid) {
            self.recompute(grid);
            true
        } else {
            false
        }
    }

    /// Sampled value at vertex `(x, y)`.
    ///
    /// Returns zero when nothing has been sampled or `(x, y)` lies outside the
    /// sampled array. The bounds are those of the last recompute, not of any
    /// grid that changed since.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> F {
        if self.stamp.is_none() || x >= self.columns || y >= self.rows {
            return F::zero();
        }
        self.values[y * self.columns + x]
    }

    /// Vertex counts of the sampled array, or `None` before the first recompute.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.stamp.map(|_| (self.columns, self.rows))
    }

    /// Whether the sampler holds data.
    pub fn state(&self) -> SamplerState {
        match self.stamp {
            Some(_) => SamplerState::Populated,
            None => SamplerState::Empty,
        }
    }

    /// Returns true once [`FieldSampler::recompute`] has run.
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.stamp.is_some()
    }

    /// Read-only view of the samples, row-major with x fastest.
    pub fn values(&self) -> &[F] {
        if self.stamp.is_some() {
            &self.values
        } else {
            &[]
        }
    }
}

impl<F: Float> Default for FieldSampler<F> {
    fn default() -> Self {
        Self::new()
    }
}
