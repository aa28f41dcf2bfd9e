//! Inverse distance weighting.
//!
//! A normalized weighted average with weights `1 / d²`, so every estimate
//! lies within the sample value range. A query point that coincides with a
//! sample returns that sample's value directly.

use tracing::trace;

use super::common::{ensure_finite, ensure_samples, relative_inverse_square_weight, value_scale};
use super::InterpolationStrategy;
use crate::error::{GeoheatError, Result};
use crate::sample::{GeoCoordinate, Sample};

/// Inverse distance weighted estimator (power 2)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InverseDistanceWeighting;

impl InterpolationStrategy for InverseDistanceWeighting {
    fn estimate(&self, point: &GeoCoordinate, samples: &[Sample]) -> Result<f64> {
        ensure_samples(samples)?;

        let mut nearest = f64::INFINITY;
        for sample in samples {
            let d2 = point.distance_squared(&sample.coordinate());
            if d2 == 0.0 {
                trace!(
                    lat = point.lat,
                    lon = point.lon,
                    value = sample.value,
                    "Query point coincides with sample"
                );
                return Ok(sample.value);
            }
            nearest = nearest.min(d2);
        }
        if !nearest.is_finite() {
            return Err(GeoheatError::Interpolation {
                message: format!(
                    "distance from ({}, {}) to every sample overflows",
                    point.lat, point.lon
                ),
            });
        }

        // Weights relative to the nearest sample stay in (0, 1] and values
        // relative to the largest magnitude stay in [-1, 1].
        let scale = value_scale(samples);
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for sample in samples {
            let d2 = point.distance_squared(&sample.coordinate());
            let weight = relative_inverse_square_weight(d2, nearest);
            weighted_sum += sample.value / scale * weight;
            weight_total += weight;
        }

        ensure_finite(weighted_sum / weight_total * scale, self.name())
    }

    fn name(&self) -> &str {
        "idw"
    }

    fn is_bounded(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Sample> {
        vec![
            Sample::new(1.0, 3.0, 12.0),
            Sample::new(2.0, 1.0, 8.3),
            Sample::new(5.0, 2.0, 16.9),
        ]
    }

    #[test]
    fn test_exact_at_sample_locations() {
        let idw = InverseDistanceWeighting;
        let samples = samples();
        for s in &samples {
            let value = idw.estimate(&s.coordinate(), &samples).unwrap();
            assert_eq!(value, s.value);
        }
    }

    #[test]
    fn test_within_sample_range() {
        let idw = InverseDistanceWeighting;
        let samples = samples();
        for i in 0..40 {
            for j in 0..40 {
                let point = GeoCoordinate::new(-2.0 + i as f64 * 0.25, -1.0 + j as f64 * 0.15);
                let value = idw.estimate(&point, &samples).unwrap();
                assert!(value.is_finite());
                assert!(
                    value >= 8.3 - 1e-9 && value <= 16.9 + 1e-9,
                    "{} at {:?}",
                    value,
                    point
                );
            }
        }
    }

    #[test]
    fn test_midpoint_is_average() {
        let idw = InverseDistanceWeighting;
        let samples = [Sample::new(0.0, 0.0, 10.0), Sample::new(2.0, 0.0, 20.0)];
        let value = idw
            .estimate(&GeoCoordinate::new(1.0, 0.0), &samples)
            .unwrap();
        assert!((value - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_closer_sample_dominates() {
        let idw = InverseDistanceWeighting;
        let samples = [Sample::new(0.0, 0.0, 10.0), Sample::new(4.0, 0.0, 20.0)];
        // d² = 1 and 9, weights 1 and 1/9
        let value = idw
            .estimate(&GeoCoordinate::new(1.0, 0.0), &samples)
            .unwrap();
        assert!((value - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_extreme_values_stay_finite() {
        let idw = InverseDistanceWeighting;
        let samples = [Sample::new(0.0, 0.0, 1e308), Sample::new(1.0, 0.0, -1e308)];
        let value = idw
            .estimate(&GeoCoordinate::new(0.5, 0.0), &samples)
            .unwrap();
        assert!(value.is_finite());
        assert!(value.abs() < 1e292);
    }

    #[test]
    fn test_values_near_max_stay_in_range() {
        let idw = InverseDistanceWeighting;
        let samples = [
            Sample::new(0.0, 0.0, f64::MAX),
            Sample::new(1.0, 0.0, f64::MAX),
            Sample::new(0.0, 1.0, 0.5 * f64::MAX),
        ];
        for point in [
            GeoCoordinate::new(0.5, 0.5),
            GeoCoordinate::new(0.1, 0.9),
            GeoCoordinate::new(-3.0, 7.0),
        ] {
            let value = idw.estimate(&point, &samples).unwrap();
            assert!(value.is_finite(), "{:?}", point);
            assert!(value >= 0.5 * f64::MAX * (1.0 - 1e-12));
        }
    }

    #[test]
    fn test_subnormal_distance_is_weighted() {
        // A reciprocal of d² this small overflows; relative weights do not
        let idw = InverseDistanceWeighting;
        let samples = [Sample::new(0.0, 0.0, 10.0), Sample::new(1.0, 0.0, 20.0)];
        let value = idw
            .estimate(&GeoCoordinate::new(1e-160, 0.0), &samples)
            .unwrap();
        assert!((value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_samples() {
        let idw = InverseDistanceWeighting;
        assert!(idw.estimate(&GeoCoordinate::new(0.0, 0.0), &[]).is_err());
    }
}
