//! Interpolation strategies for scattered samples.
//!
//! Each strategy estimates a continuous value at an arbitrary coordinate
//! from the full sample set. Strategies hold only their own parameters and
//! recompute from scratch for every query point.

pub mod common;
pub mod gaussian;
pub mod idw;

use crate::error::{GeoheatError, Result};
use crate::sample::{GeoCoordinate, Sample};

pub use gaussian::GaussianKernel;
pub use idw::InverseDistanceWeighting;

/// Reference Gaussian bandwidth, in degrees
pub const DEFAULT_BANDWIDTH: f64 = 0.1;

/// Trait for value estimators over a sample set
pub trait InterpolationStrategy: Send + Sync {
    /// Estimate the value at `point` from `samples`
    fn estimate(&self, point: &GeoCoordinate, samples: &[Sample]) -> Result<f64>;

    /// Get the name of this strategy
    fn name(&self) -> &str;

    /// Whether estimates always stay within the sample value range
    fn is_bounded(&self) -> bool;
}

/// Get a strategy by name. `bandwidth` only applies to the Gaussian kernel.
pub fn get_strategy(name: &str, bandwidth: f64) -> Result<Box<dyn InterpolationStrategy>> {
    match name.to_lowercase().as_str() {
        "idw" => Ok(Box::new(InverseDistanceWeighting)),
        "gaussian" => Ok(Box::new(GaussianKernel::new(bandwidth)?)),
        _ => Err(GeoheatError::InvalidInput {
            param: "strategy".to_string(),
            message: format!("Unknown interpolation strategy: {}", name),
        }),
    }
}
