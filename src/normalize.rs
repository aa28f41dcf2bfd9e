//! Normalization of interpolated values.
//!
//! Raw estimates are rescaled against the min/max of the original sample
//! values, not against the interpolated field. The result is not clamped:
//! estimators that overshoot the sample range (the Gaussian kernel sum)
//! produce values outside `[0, 1]`, and the color mappers clamp on their side.

use tracing::debug;

use crate::error::Result;
use crate::sample::{Sample, ValueRange};

/// Level assigned to every value when all samples share a single value
pub const DEGENERATE_LEVEL: f64 = 0.5;

/// Linear rescaler from the sample value range onto `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    range: ValueRange,
}

impl Normalizer {
    pub fn new(range: ValueRange) -> Self {
        if range.is_degenerate() {
            debug!(
                value = range.min,
                level = DEGENERATE_LEVEL,
                "Sample values are constant, using fixed normalized level"
            );
        }
        Self { range }
    }

    /// Build from the sample set's observed value range
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        Ok(Self::new(ValueRange::from_samples(samples)?))
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// `(raw - min) / (max - min)`, or [`DEGENERATE_LEVEL`] for a constant sample set
    pub fn normalize(&self, raw: f64) -> f64 {
        if self.range.is_degenerate() {
            return DEGENERATE_LEVEL;
        }
        (raw - self.range.min) / self.range.span()
    }
}
