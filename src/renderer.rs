//! Heatmap rendering.
//!
//! Drives the full pipeline: bounding box, per-pixel interpolation,
//! normalization against the sample value range, and color mapping into a
//! row-major RGBA buffer. Rows are computed in parallel; every worker owns a
//! disjoint row slice of the output, so no locking is involved and the result
//! is identical to a serial render.

use std::time::Instant;

use image::{ImageBuffer, RgbaImage};
use ndarray::Array2;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::colormaps::ColorMapper;
use crate::error::{GeoheatError, Result};
use crate::geobox::{GeoBox, Grid};
use crate::interpolation::InterpolationStrategy;
use crate::logging::generate_render_id;
use crate::normalize::Normalizer;
use crate::sample::{validate_samples, Sample, ValueRange};

/// Default padding fraction around the samples
pub const DEFAULT_BORDER: f64 = 0.2;

/// Bytes per RGBA pixel
const CHANNELS: usize = 4;

/// A rendered heatmap together with the geometry it was rendered over
#[derive(Debug, Clone)]
pub struct Heatmap {
    pub image: RgbaImage,
    pub geobox: GeoBox,
    pub range: ValueRange,
}

/// Renders sample sets with a fixed strategy and color mapper
pub struct HeatmapRenderer {
    strategy: Box<dyn InterpolationStrategy>,
    colormap: Box<dyn ColorMapper>,
    border: f64,
    alpha: u8,
}

impl HeatmapRenderer {
    pub fn new(strategy: Box<dyn InterpolationStrategy>, colormap: Box<dyn ColorMapper>) -> Self {
        Self {
            strategy,
            colormap,
            border: DEFAULT_BORDER,
            alpha: u8::MAX,
        }
    }

    /// Padding fraction applied to each side of the bounding box
    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    /// Opacity handed to color mappers that pass it through
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn strategy(&self) -> &dyn InterpolationStrategy {
        self.strategy.as_ref()
    }

    pub fn colormap(&self) -> &dyn ColorMapper {
        self.colormap.as_ref()
    }

    /// Render `samples` onto `grid`.
    ///
    /// All input validation happens before any pixel is computed.
    pub fn render(&self, samples: &[Sample], grid: Grid) -> Result<Heatmap> {
        let render_id = generate_render_id();
        let start = Instant::now();

        validate_samples(samples)?;
        let geobox = GeoBox::from_samples(samples, self.border)?;
        let normalizer = Normalizer::from_samples(samples)?;

        debug!(
            render_id = %render_id,
            samples = samples.len(),
            width = grid.width(),
            height = grid.height(),
            strategy = self.strategy.name(),
            colormap = self.colormap.name(),
            min_lat = geobox.min_lat,
            max_lat = geobox.max_lat,
            min_lon = geobox.min_lon,
            max_lon = geobox.max_lon,
            "Rendering heatmap"
        );

        let field = interpolate_field(samples, &geobox, grid, self.strategy.as_ref())?;
        let image = colorize_field(&field, &normalizer, self.colormap.as_ref(), self.alpha)?;

        info!(
            render_id = %render_id,
            width = grid.width(),
            height = grid.height(),
            strategy = self.strategy.name(),
            colormap = self.colormap.name(),
            bounded = self.strategy.is_bounded(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Heatmap rendered"
        );

        Ok(Heatmap {
            image,
            geobox,
            range: normalizer.range(),
        })
    }
}

/// Render `samples` into a `grid_width x grid_height` opaque-alpha RGBA buffer
pub fn render_heatmap(
    samples: &[Sample],
    border: f64,
    grid_width: u32,
    grid_height: u32,
    strategy: Box<dyn InterpolationStrategy>,
    colormap: Box<dyn ColorMapper>,
) -> Result<RgbaImage> {
    let grid = Grid::new(grid_width, grid_height)?;
    let renderer = HeatmapRenderer::new(strategy, colormap).with_border(border);
    Ok(renderer.render(samples, grid)?.image)
}

/// Evaluate `strategy` at every pixel of `grid` over `geobox`.
///
/// The returned array is indexed `[y, x]`.
pub fn interpolate_field(
    samples: &[Sample],
    geobox: &GeoBox,
    grid: Grid,
    strategy: &dyn InterpolationStrategy,
) -> Result<Array2<f64>> {
    let width = grid.width() as usize;
    let mut values = vec![0.0; grid.pixel_count()];

    values
        .par_chunks_mut(width)
        .enumerate()
        .try_for_each(|(y, row)| -> Result<()> {
            for (x, cell) in row.iter_mut().enumerate() {
                let point = geobox.pixel_to_geo(x as u32, y as u32, &grid);
                *cell = strategy.estimate(&point, samples)?;
            }
            Ok(())
        })?;

    Array2::from_shape_vec((grid.height() as usize, width), values).map_err(|e| {
        GeoheatError::ImageGeneration {
            message: format!("Failed to shape value field: {}", e),
        }
    })
}

/// Normalize and color every cell of a `[y, x]` value field
pub fn colorize_field(
    field: &Array2<f64>,
    normalizer: &Normalizer,
    colormap: &dyn ColorMapper,
    alpha: u8,
) -> Result<RgbaImage> {
    let (height, width) = field.dim();
    if width == 0 || height == 0 {
        return Err(GeoheatError::invalid_input(
            "field",
            format!("value field must be non-empty, got {}x{}", width, height),
        ));
    }

    let mut buffer = vec![0u8; width * height * CHANNELS];
    buffer
        .par_chunks_mut(width * CHANNELS)
        .enumerate()
        .for_each(|(y, row)| {
            let values = field.row(y);
            for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                let t = normalizer.normalize(values[x]);
                pixel.copy_from_slice(&colormap.color_of(t, alpha).to_array());
            }
        });

    ImageBuffer::from_raw(width as u32, height as u32, buffer).ok_or_else(|| {
        GeoheatError::ImageGeneration {
            message: format!("Pixel buffer does not fit a {}x{} image", width, height),
        }
    })
}
