//! Sign classification with an explicit tolerance band.

use num_traits::Float;

/// Default half-width of the boundary band.
pub const DEFAULT_SIGN_EPSILON: f64 = 1e-4;

/// Sign of a sampled distance relative to a tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignCategory {
    /// Above `+eps`: outside the shape.
    Positive,
    /// Below `-eps`: inside the shape.
    Negative,
    /// Within the closed band `[-eps, +eps]`.
    Zero,
}

impl SignCategory {
    /// Returns true for the boundary band.
    #[inline]
    pub fn is_boundary(self) -> bool {
        self == SignCategory::Zero
    }

    /// -1, 0 or 1.
    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            SignCategory::Positive => 1,
            SignCategory::Negative => -1,
            SignCategory::Zero => 0,
        }
    }
}

/// Classifies `value` against the band `[-eps, +eps]`.
///
/// Both band edges are inclusive: `classify(eps, eps)` is `Zero`.
///
/// # Arguments
///
/// * `value` - Sampled signed distance
/// * `eps` - Non-negative half-width of the boundary band
#[inline]
pub fn classify<F: Float>(value: F, eps: F) -> SignCategory {
    if value > eps {
        SignCategory::Positive
    } else if value < -eps {
        SignCategory::Negative
    } else {
        SignCategory::Zero
    }
}
