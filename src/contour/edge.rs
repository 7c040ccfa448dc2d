//! Unit edges between neighbouring grid vertices.

use crate::error::{IsolineError, Result};

/// Direction of an [`Edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// An ordered pair of grid vertices one step apart along x or y.
///
/// The crossing parameter `t` of an edge runs from `start` (0) to `end` (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    start: (usize, usize),
    end: (usize, usize),
}

impl Edge {
    /// Creates an edge from `start` to `end`.
    ///
    /// Either direction is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`IsolineError::NonAdjacentEdge`] unless the vertices differ by
    /// exactly one step along a single axis.
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Result<Self> {
        let dx = start.0.abs_diff(end.0);
        let dy = start.1.abs_diff(end.1);
        if dx + dy != 1 {
            return Err(IsolineError::NonAdjacentEdge { start, end });
        }
        Ok(Self { start, end })
    }

    /// Edge from `(x, y)` to `(x + 1, y)`.
    ///
    /// At `x == usize::MAX` the end saturates, giving an edge no grid
    /// contains.
    #[inline]
    pub fn horizontal(x: usize, y: usize) -> Self {
        Self {
            start: (x, y),
            end: (x.saturating_add(1), y),
        }
    }

    /// Edge from `(x, y)` to `(x, y + 1)`.
    ///
    /// Saturates like [`Edge::horizontal`].
    #[inline]
    pub fn vertical(x: usize, y: usize) -> Self {
        Self {
            start: (x, y),
            end: (x, y.saturating_add(1)),
        }
    }

    /// Vertex at `t = 0`.
    #[inline]
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Vertex at `t = 1`.
    #[inline]
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// Direction the edge runs along.
    pub fn axis(&self) -> Axis {
        if self.start.1 == self.end.1 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// The same edge traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_neighbours() {
        let e = Edge::new((1, 2), (2, 2)).unwrap();
        assert_eq!(e, Edge::horizontal(1, 2));
        assert_eq!(e.axis(), Axis::Horizontal);

        let e = Edge::new((3, 4), (3, 3)).unwrap();
        assert_eq!(e.axis(), Axis::Vertical);
        assert_eq!(e.reversed(), Edge::vertical(3, 3));
    }

    #[test]
    fn test_new_rejects_non_neighbours() {
        for (a, b) in [((1, 2), (3, 2)), ((0, 0), (1, 1)), ((2, 2), (2, 2))] {
            assert_eq!(
                Edge::new(a, b),
                Err(IsolineError::NonAdjacentEdge { start: a, end: b })
            );
        }
    }

    #[test]
    fn test_constructors_saturate_at_index_limit() {
        let h = Edge::horizontal(usize::MAX, 3);
        assert_eq!(h.end(), (usize::MAX, 3));

        let v = Edge::vertical(0, usize::MAX);
        assert_eq!(v.end(), (0, usize::MAX));
    }
}
