//! Geolocated scalar samples.
//!
//! A sample set is owned by the caller and only ever read by the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{GeoheatError, Result};

/// A single measured value at a latitude/longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

impl Sample {
    pub const fn new(lat: f64, lon: f64, value: f64) -> Self {
        Self { lat, lon, value }
    }

    /// Location of this sample
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.lat, self.lon)
    }
}

/// A point in lat/lon space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Squared planar distance in degrees. No projection correction is applied.
    pub fn distance_squared(&self, other: &GeoCoordinate) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }
}

/// Observed min/max of the sample values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Scan the samples once for their extreme values
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        let first = samples
            .first()
            .ok_or_else(|| GeoheatError::invalid_input("samples", "sample set is empty"))?;

        let range = samples.iter().skip(1).fold(
            ValueRange {
                min: first.value,
                max: first.value,
            },
            |acc, s| ValueRange {
                min: acc.min.min(s.value),
                max: acc.max.max(s.value),
            },
        );
        Ok(range)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when every sample carries the same value
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Reject empty sample sets and samples with non-finite fields
pub fn validate_samples(samples: &[Sample]) -> Result<()> {
    if samples.is_empty() {
        return Err(GeoheatError::invalid_input(
            "samples",
            "sample set is empty",
        ));
    }

    if let Some((i, s)) = samples
        .iter()
        .enumerate()
        .find(|(_, s)| !(s.lat.is_finite() && s.lon.is_finite() && s.value.is_finite()))
    {
        return Err(GeoheatError::invalid_input(
            "samples",
            format!(
                "sample {} has a non-finite field (lat={}, lon={}, value={})",
                i, s.lat, s.lon, s.value
            ),
        ));
    }

    Ok(())
}
