//! # geoheat
//!
//! Interpolated heatmaps from sparse geolocated samples.
//!
//! A handful of `(lat, lon, value)` samples is turned into a dense RGBA
//! raster where color encodes an estimate of the measured quantity at every
//! pixel.
//!
//! ## Pipeline
//!
//! - **GeoBox**: padded bounding box of the samples, mapped linearly onto the pixel grid
//! - **Interpolation**: Gaussian kernel sum or inverse distance weighting, evaluated per pixel
//! - **Normalization**: rescaling against the sample value range
//! - **Color mapping**: hue gradients and constant-hue alpha ramps
//!
//! ```no_run
//! use geoheat::{render_heatmap, get_colormap, get_strategy, Sample};
//!
//! let samples = [
//!     Sample::new(1.0, 3.0, 12.0),
//!     Sample::new(2.0, 1.0, 8.3),
//!     Sample::new(5.0, 2.0, 16.9),
//! ];
//! let image = render_heatmap(
//!     &samples,
//!     0.2,
//!     320,
//!     240,
//!     get_strategy("idw", 0.1)?,
//!     get_colormap("linear")?,
//! )?;
//! geoheat::output::save_png(&image, std::path::Path::new("heatmap.png"))?;
//! # Ok::<(), geoheat::GeoheatError>(())
//! ```

pub mod colormaps;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod geobox;
pub mod interpolation;
pub mod logging;
pub mod normalize;
pub mod output;
pub mod renderer;
pub mod sample;

pub use colormaps::{get_colormap, Color, ColorMapper};
pub use config::Config;
pub use error::{GeoheatError, Result};
pub use geobox::{GeoBox, Grid};
pub use interpolation::{get_strategy, InterpolationStrategy};
pub use logging::{
    generate_render_id, init_tracing, log_error, log_operation_end, log_operation_start,
    log_sample_stats,
};
pub use normalize::Normalizer;
pub use renderer::{render_heatmap, Heatmap, HeatmapRenderer};
pub use sample::{GeoCoordinate, Sample, ValueRange};
