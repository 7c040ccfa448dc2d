//! Zero-crossing detection and interpolation along grid edges.

use super::{classify, Edge};
use crate::field::FieldSampler;
use crate::grid::Grid;
use crate::primitives::{Point2, Point3};
use num_traits::Float;
use tracing::debug;

/// A located zero-crossing on a grid edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCrossing<F> {
    /// The edge, oriented from the `d1` sample to the `d2` sample.
    pub edge: Edge,
    /// Position of the zero along the edge, in `[0, 1]`.
    pub t: F,
    /// World position of the zero.
    pub position: Point2<F>,
    /// Sample at the edge start.
    pub d1: F,
    /// Sample at the edge end.
    pub d2: F,
}

impl<F: Float> EdgeCrossing<F> {
    /// World position of the zero lifted onto the grid plane.
    pub fn position_3d(&self, grid: &Grid<F>) -> Point3<F> {
        Point3::from_planar(self.position, grid.plane_offset())
    }
}

/// Returns true if the surface passes between samples `d1` and `d2`.
///
/// The two samples must fall in different [`SignCategory`](super::SignCategory)
/// buckets. Two samples inside the boundary band never count as a crossing,
/// even when their raw values have opposite signs, so very flat regions near
/// the band can under-report crossings.
#[inline]
pub fn has_crossing<F: Float>(d1: F, d2: F, eps: F) -> bool {
    let a = classify(d1, eps);
    let b = classify(d2, eps);
    if a.is_boundary() && b.is_boundary() {
        return false;
    }
    a != b
}

/// Parameter `t = d1 / (d1 - d2)` where the linear interpolant of the two
/// samples is zero, clamped to `[0, 1]`.
///
/// Returns `None` when `d1` and `d2` are equal up to floating-point
/// resolution, where the division is ill-conditioned. The tolerance is
/// relative to the larger magnitude, so tiny samples of opposite sign still
/// interpolate. Clamping does not mean the edge actually crosses; gate on
/// [`has_crossing`] first.
#[inline]
pub fn interpolate<F: Float>(d1: F, d2: F) -> Option<F> {
    let denom = d1 - d2;
    let scale = d1.abs().max(d2.abs());
    let tolerance = (F::epsilon() * scale).max(F::min_positive_value());
    if denom.abs() <= tolerance {
        return None;
    }
    let t = d1 / denom;
    Some(t.max(F::zero()).min(F::one()))
}

/// Locates the zero-crossing on `edge`, if any.
///
/// Returns `None` if either endpoint is outside `grid`, the samples do not
/// change sign, or they are too close to interpolate. Reads cached samples
/// only; bring the sampler up to date with
/// [`FieldSampler::ensure_current`] beforehand.
pub fn resolve_edge<F: Float>(
    grid: &Grid<F>,
    sampler: &FieldSampler<F>,
    edge: Edge,
    eps: F,
) -> Option<EdgeCrossing<F>> {
    let (x1, y1) = edge.start();
    let (x2, y2) = edge.end();
    if !grid.contains_vertex(x1, y1) || !grid.contains_vertex(x2, y2) {
        return None;
    }

    let d1 = sampler.get(x1, y1);
    let d2 = sampler.get(x2, y2);
    if !has_crossing(d1, d2, eps) {
        return None;
    }
    let t = interpolate(d1, d2)?;

    let position = grid.position_of(x1, y1).lerp(grid.position_of(x2, y2), t);
    Some(EdgeCrossing {
        edge,
        t,
        position,
        d1,
        d2,
    })
}

/// Finds every crossing on the unit edges of `grid`.
///
/// All horizontal edges come first (row by row), then all vertical edges.
pub fn find_crossings<F: Float>(
    grid: &Grid<F>,
    sampler: &FieldSampler<F>,
    eps: F,
) -> Vec<EdgeCrossing<F>> {
    let (width, height) = (grid.width(), grid.height());

    let horizontal = (0..=height).flat_map(|y| (0..width).map(move |x| Edge::horizontal(x, y)));
    let vertical = (0..height).flat_map(|y| (0..=width).map(move |x| Edge::vertical(x, y)));

    let crossings: Vec<_> = horizontal
        .chain(vertical)
        .filter_map(|edge| resolve_edge(grid, sampler, edge, eps))
        .collect();

    debug!(count = crossings.len(), width, height, "found edge crossings");
    crossings
}
