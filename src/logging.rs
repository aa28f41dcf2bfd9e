//! Logging utilities for geoheat.
//!
//! This module provides structured logging helpers so render runs can be
//! traced and timed from the logs alone.

use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::geobox::GeoBox;
use crate::sample::ValueRange;

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        info!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        info!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation failed"
        );
    }
}

/// Log a summary of a loaded sample set
pub fn log_sample_stats(source: &str, count: usize, range: &ValueRange, geobox: &GeoBox) {
    info!(
        operation = "sample_load",
        source = source,
        count = count,
        min_value = range.min,
        max_value = range.max,
        min_lat = geobox.min_lat,
        max_lat = geobox.max_lat,
        min_lon = geobox.min_lon,
        max_lon = geobox.max_lon,
        "Samples loaded"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::GeoheatError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}

/// Generate a unique id for a render run
pub fn generate_render_id() -> String {
    Uuid::new_v4().to_string()
}
