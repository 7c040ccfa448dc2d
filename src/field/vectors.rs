//! Per-vertex vectors pointing at the implicit surface.

use super::FieldSampler;
use crate::grid::Grid;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Which side of the surface a sample lies on, by the sign of its distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Outside,
    Inside,
    OnSurface,
}

impl Side {
    /// Classifies a signed distance with no tolerance band.
    pub fn of<F: Float>(distance: F) -> Self {
        if distance > F::zero() {
            Side::Outside
        } else if distance < F::zero() {
            Side::Inside
        } else {
            Side::OnSurface
        }
    }
}

/// The estimated offset from a grid vertex to the nearest surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceVector<F> {
    /// Grid vertex the vector starts at.
    pub vertex: (usize, usize),
    /// World position of the vertex.
    pub origin: Point2<F>,
    /// Offset toward the surface; magnitude equals `|distance|`.
    pub vector: Vec2<F>,
    /// Signed distance sampled at the vertex.
    pub distance: F,
}

impl<F: Float> SurfaceVector<F> {
    /// Estimated surface point: `origin + vector`.
    #[inline]
    pub fn target(&self) -> Point2<F> {
        self.origin + self.vector
    }

    /// Side of the surface the vertex lies on.
    #[inline]
    pub fn side(&self) -> Side {
        Side::of(self.distance)
    }
}

/// Surface vector at a single vertex, using the cached sample as distance.
///
/// Returns `None` if `(x, y)` is not a vertex of `grid`. The sampler should be
/// current for `grid`; see [`FieldSampler::ensure_current`].
pub fn surface_vector_at<F: Float>(
    grid: &Grid<F>,
    sampler: &FieldSampler<F>,
    x: usize,
    y: usize,
) -> Option<SurfaceVector<F>> {
    if !grid.contains_vertex(x, y) {
        return None;
    }
    let origin = grid.position_of(x, y);
    let distance = sampler.get(x, y);
    Some(SurfaceVector {
        vertex: (x, y),
        origin,
        vector: sampler.vector_to_surface(origin, distance),
        distance,
    })
}

/// Surface vectors for a selection of vertices.
///
/// An empty `selection` means every vertex of `grid` in row-major order.
/// Selected vertices outside the grid are skipped, as are vertices whose
/// vector is exactly zero (on the surface, at a degenerate feature, or for
/// shapes without a gradient). Short but nonzero vectors are kept.
pub fn surface_vectors<F: Float>(
    grid: &Grid<F>,
    sampler: &FieldSampler<F>,
    selection: &[(usize, usize)],
) -> Vec<SurfaceVector<F>> {
    let keep = |sv: &SurfaceVector<F>| !sv.vector.is_zero();

    if selection.is_empty() {
        grid.vertices()
            .filter_map(|(x, y)| surface_vector_at(grid, sampler, x, y))
            .filter(keep)
            .collect()
    } else {
        selection
            .iter()
            .filter_map(|&(x, y)| surface_vector_at(grid, sampler, x, y))
            .filter(keep)
            .collect()
    }
}
