//! Bounding region and pixel grid.
//!
//! The padded bounding box of a sample set, and the linear mapping from
//! pixel coordinates onto it. Latitude runs along the image x axis and
//! longitude along the y axis; there is no projection correction.

use crate::error::{GeoheatError, Result};
use crate::sample::{validate_samples, GeoCoordinate, Sample};

/// Axis-aligned lat/lon rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl GeoBox {
    /// Compute the bounding box of `samples`, expanded on each side by
    /// `border * span` of the respective axis.
    ///
    /// A sample set with no spread along an axis yields a zero-width box on
    /// that axis; every pixel along it then maps to the same coordinate.
    pub fn from_samples(samples: &[Sample], border: f64) -> Result<Self> {
        validate_samples(samples)?;
        validate_border(border)?;

        let first = samples[0];
        let mut bbox = GeoBox {
            min_lat: first.lat,
            min_lon: first.lon,
            max_lat: first.lat,
            max_lon: first.lon,
        };
        for s in &samples[1..] {
            bbox.min_lat = bbox.min_lat.min(s.lat);
            bbox.max_lat = bbox.max_lat.max(s.lat);
            bbox.min_lon = bbox.min_lon.min(s.lon);
            bbox.max_lon = bbox.max_lon.max(s.lon);
        }

        let lat_border = bbox.lat_span() * border;
        let lon_border = bbox.lon_span() * border;
        bbox.min_lat -= lat_border;
        bbox.max_lat += lat_border;
        bbox.min_lon -= lon_border;
        bbox.max_lon += lon_border;

        Ok(bbox)
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Whether the coordinate lies inside the box (edges included)
    pub fn contains(&self, coord: &GeoCoordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&coord.lat)
            && (self.min_lon..=self.max_lon).contains(&coord.lon)
    }

    /// Map pixel `(x, y)` of `grid` to its geo coordinate.
    ///
    /// `lat = min_lat + x * lat_span / width`, `lon = min_lon + y * lon_span / height`.
    pub fn pixel_to_geo(&self, x: u32, y: u32, grid: &Grid) -> GeoCoordinate {
        GeoCoordinate {
            lat: self.min_lat + x as f64 * self.lat_span() / grid.width() as f64,
            lon: self.min_lon + y as f64 * self.lon_span() / grid.height() as f64,
        }
    }
}

fn validate_border(border: f64) -> Result<()> {
    if !border.is_finite() || border < 0.0 {
        return Err(GeoheatError::invalid_input(
            "border",
            format!("border must be a finite fraction >= 0, got {}", border),
        ));
    }
    Ok(())
}

/// Pixel raster dimensions. Only constructible through [`Grid::new`],
/// so both dimensions are always positive.
///
/// ```compile_fail
/// let grid = geoheat::Grid { width: 0, height: 10 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Create a grid, rejecting zero dimensions
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GeoheatError::invalid_input(
                "grid",
                format!("grid dimensions must be positive, got {}x{}", width, height),
            ));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
