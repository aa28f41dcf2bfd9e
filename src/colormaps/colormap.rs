//! Color mapper trait and utilities.
//!
//! This module defines the common interface for all color mappers.

use crate::error::{GeoheatError, Result};

/// An RGBA pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba(color.to_array())
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Color { r, g, b, a }
    }
}

/// Trait for mapping a normalized value to a color
pub trait ColorMapper: Send + Sync {
    /// Map a normalized value to a color. `t` is clamped to `[0, 1]` first;
    /// `alpha` is used by mappers that pass opacity through.
    fn color_of(&self, t: f64, alpha: u8) -> Color;

    /// Get the name of this color mapper
    fn name(&self) -> &str;
}

/// Get a color mapper by name
pub fn get_colormap(name: &str) -> Result<Box<dyn ColorMapper>> {
    use super::{gradient::*, ramp::*};

    match name.to_lowercase().as_str() {
        "linear" => Ok(Box::new(LinearGradient)),
        "colorblind" => Ok(Box::new(ColorblindBlue)),
        "blue" => Ok(Box::new(AlphaRamp::blue())),
        "cyan" => Ok(Box::new(AlphaRamp::cyan())),
        _ => Err(GeoheatError::InvalidInput {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        }),
    }
}

/// Clamp to `[0, 1]`, sending NaN to 0
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Scale a channel by a unit factor, truncating
pub fn scale_channel(channel: u8, t: f64) -> u8 {
    (channel as f64 * t) as u8
}
