//! Image helpers for testing.
//!
//! This module provides helper functions for inspecting rendered heatmaps.

use geoheat::{GeoBox, GeoCoordinate, Grid};
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use std::collections::HashSet;

/// Load an image from a byte array
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
    image::load_from_memory(bytes)
}

/// Detect image format from bytes
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Check if an image has the expected dimensions
pub fn assert_image_dimensions(
    image: &DynamicImage,
    expected_width: u32,
    expected_height: u32,
) -> Result<(), String> {
    let (actual_width, actual_height) = image.dimensions();

    if actual_width != expected_width || actual_height != expected_height {
        return Err(format!(
            "Image dimensions differ: actual = {}x{}, expected = {}x{}",
            actual_width, actual_height, expected_width, expected_height
        ));
    }

    Ok(())
}

/// Number of distinct RGBA values in the image
pub fn distinct_colors(image: &RgbaImage) -> usize {
    image.pixels().map(|p| p.0).collect::<HashSet<_>>().len()
}

/// Whether any pixel is fully zero (never written)
pub fn has_blank_pixel(image: &RgbaImage) -> bool {
    image.pixels().any(|p| p.0 == [0, 0, 0, 0])
}

/// Pixel whose geo coordinate is closest to `coord`
pub fn nearest_pixel(geobox: &GeoBox, grid: &Grid, coord: &GeoCoordinate) -> (u32, u32) {
    let to_index = |value: f64, min: f64, span: f64, size: u32| -> u32 {
        if span == 0.0 {
            return 0;
        }
        let index = ((value - min) * size as f64 / span).round();
        index.clamp(0.0, (size - 1) as f64) as u32
    };

    (
        to_index(coord.lat, geobox.min_lat, geobox.lat_span(), grid.width()),
        to_index(coord.lon, geobox.min_lon, geobox.lon_span(), grid.height()),
    )
}
