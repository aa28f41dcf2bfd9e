//! Sample set loading.
//!
//! Samples are read from a JSON array of `{ "lat", "lon", "value" }`
//! objects. When no file is given the driver falls back to a small built-in
//! demo set.

use std::path::Path;
use tracing::{debug, info};

use crate::error::{GeoheatError, Result};
use crate::sample::{validate_samples, Sample};

/// Built-in demo samples used when no sample file is configured
pub const DEMO_SAMPLES: [Sample; 3] = [
    Sample::new(1.0, 3.0, 12.0),
    Sample::new(2.0, 1.0, 8.3),
    Sample::new(5.0, 2.0, 16.9),
];

/// Load and validate samples from a JSON file
pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    if !path.exists() {
        return Err(GeoheatError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let samples = parse_samples(&content)?;

    info!(
        path = %path.display(),
        count = samples.len(),
        "Loaded sample file"
    );
    Ok(samples)
}

/// Parse and validate samples from JSON text
pub fn parse_samples(json: &str) -> Result<Vec<Sample>> {
    let samples: Vec<Sample> = serde_json::from_str(json)?;
    debug!(count = samples.len(), "Parsed samples");

    validate_samples(&samples)?;
    Ok(samples)
}

/// Load samples from `path`, or the demo set when no path is given
pub fn load_or_demo(path: Option<&Path>) -> Result<Vec<Sample>> {
    match path {
        Some(path) => load_samples(path),
        None => {
            debug!(count = DEMO_SAMPLES.len(), "Using built-in demo samples");
            Ok(DEMO_SAMPLES.to_vec())
        }
    }
}
