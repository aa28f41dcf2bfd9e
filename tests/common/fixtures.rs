//! Sample sets used across the integration tests.

use geoheat::Sample;

/// Three samples with distinct values
pub fn reference_samples() -> Vec<Sample> {
    vec![
        Sample::new(1.0, 3.0, 12.0),
        Sample::new(2.0, 1.0, 8.3),
        Sample::new(5.0, 2.0, 16.9),
    ]
}

/// Samples that all carry the same value
pub fn constant_samples() -> Vec<Sample> {
    vec![
        Sample::new(10.0, 20.0, 7.0),
        Sample::new(12.5, 21.0, 7.0),
        Sample::new(11.0, 24.0, 7.0),
        Sample::new(14.0, 22.5, 7.0),
    ]
}

/// A larger deterministic scatter over a small region
pub fn scattered_samples() -> Vec<Sample> {
    (0..25)
        .map(|i| {
            let i = i as f64;
            Sample::new(
                -33.0 + (i * 0.37) % 2.0,
                151.0 + (i * 0.53) % 1.5,
                15.0 + (i * 1.7) % 9.0,
            )
        })
        .collect()
}

/// JSON text for a sample set
pub fn samples_json(samples: &[Sample]) -> String {
    serde_json::to_string(samples).expect("samples serialize")
}
