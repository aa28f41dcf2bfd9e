//! Gaussian kernel sum.
//!
//! Every sample contributes `value * exp(-d² / (2h²))` and the sum is divided
//! by the sample count. The kernel weights are not normalized, so far from
//! all samples the estimate decays toward zero instead of toward any sample
//! value, and the output is not bounded by the sample value range.

use super::common::{ensure_finite, ensure_samples, gaussian_weight, value_scale};
use super::InterpolationStrategy;
use crate::error::{GeoheatError, Result};
use crate::sample::{GeoCoordinate, Sample};

/// Gaussian kernel-sum estimator with a fixed bandwidth in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    bandwidth: f64,
}

impl GaussianKernel {
    /// Create a kernel; the bandwidth must be positive and `2h²` representable
    pub fn new(bandwidth: f64) -> Result<Self> {
        let denominator = 2.0 * bandwidth * bandwidth;
        if !(bandwidth > 0.0 && denominator.is_finite() && denominator > 0.0) {
            return Err(GeoheatError::InvalidInput {
                param: "bandwidth".to_string(),
                message: format!("bandwidth must be a positive number, got {}", bandwidth),
            });
        }
        Ok(Self { bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

impl Default for GaussianKernel {
    fn default() -> Self {
        Self {
            bandwidth: super::DEFAULT_BANDWIDTH,
        }
    }
}

impl InterpolationStrategy for GaussianKernel {
    fn estimate(&self, point: &GeoCoordinate, samples: &[Sample]) -> Result<f64> {
        ensure_samples(samples)?;

        // Each term is at most 1 in magnitude once divided by the largest value
        let scale = value_scale(samples);
        let sum: f64 = samples
            .iter()
            .map(|s| {
                let d2 = point.distance_squared(&s.coordinate());
                s.value / scale * gaussian_weight(d2, self.bandwidth)
            })
            .sum();

        ensure_finite(sum / samples.len() as f64 * scale, self.name())
    }

    fn name(&self) -> &str {
        "gaussian"
    }

    fn is_bounded(&self) -> bool {
        false
    }
}
