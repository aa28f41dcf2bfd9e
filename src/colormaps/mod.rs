//! Color mappers for heatmap rendering.
//!
//! Each mapper turns a normalized value into an RGBA color.

pub mod colormap;
pub mod gradient;
pub mod ramp;

pub use colormap::{get_colormap, Color, ColorMapper};

pub use gradient::{ColorblindBlue, LinearGradient};
pub use ramp::AlphaRamp;
