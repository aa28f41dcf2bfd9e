//! Shared helpers for the interpolation strategies.
//!
//! Both strategies work on values divided by the largest sample magnitude,
//! so intermediate sums stay within `[-n, n]` and finite samples always give
//! finite estimates.

use crate::error::{GeoheatError, Result};
use crate::sample::Sample;

/// Fail fast on an empty sample set; both strategies divide by a count or a weight sum
pub fn ensure_samples(samples: &[Sample]) -> Result<()> {
    if samples.is_empty() {
        return Err(GeoheatError::invalid_input(
            "samples",
            "cannot interpolate from an empty sample set",
        ));
    }
    Ok(())
}

/// Largest absolute sample value, or 1 when every value is zero
pub fn value_scale(samples: &[Sample]) -> f64 {
    let scale = samples.iter().fold(0.0f64, |acc, s| acc.max(s.value.abs()));
    if scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Unnormalized Gaussian weight `exp(-d² / (2h²))` for a squared distance
pub fn gaussian_weight(distance_squared: f64, bandwidth: f64) -> f64 {
    (-distance_squared / (2.0 * bandwidth * bandwidth)).exp()
}

/// Inverse squared distance weight relative to the nearest sample:
/// `(1 / d²) / (1 / d²_nearest)`, always in `(0, 1]`.
pub fn relative_inverse_square_weight(distance_squared: f64, nearest_squared: f64) -> f64 {
    nearest_squared / distance_squared
}

/// Reject an estimate that is NaN or infinite
pub fn ensure_finite(estimate: f64, strategy: &str) -> Result<f64> {
    if !estimate.is_finite() {
        return Err(GeoheatError::Interpolation {
            message: format!("{} produced a non-finite estimate: {}", strategy, estimate),
        });
    }
    Ok(estimate)
}
