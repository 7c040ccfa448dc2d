//! Monotonic revision stamps for detecting stale sampled data.

use num_traits::{Float, ToPrimitive};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// A process-wide unique, monotonically increasing revision number.
///
/// Grids and shape slots take a fresh revision every time their parameters
/// change. A consumer that recorded the revision it last read can compare
/// stamps instead of guessing from array dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    /// Returns a revision newer than every revision handed out so far.
    pub fn next() -> Self {
        Self(NEXT_REVISION.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw revision number.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Converts a primitive number into `F`.
///
/// Conversions into `f32`/`f64` always succeed; other `Float` impls that
/// cannot represent the value get NaN.
#[inline]
pub(crate) fn cast<F: Float, T: ToPrimitive>(value: T) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revisions_increase() {
        let a = Revision::next();
        let b = Revision::next();
        assert!(b > a);
        assert_ne!(a.get(), b.get());
    }

    #[test]
    fn test_cast() {
        let x: f32 = cast(3usize);
        assert_eq!(x, 3.0);
        let y: f64 = cast(0.01);
        assert_eq!(y, 0.01);
    }
}
