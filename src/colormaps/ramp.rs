//! Constant-hue alpha ramps.
//!
//! The hue never changes; the value is carried by opacity alone, which suits
//! overlays drawn on top of a base map.

use super::colormap::{clamp_unit, scale_channel, Color, ColorMapper};

/// Fixed hue with alpha scaled by the normalized value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaRamp {
    hue: [u8; 3],
    name: &'static str,
}

impl AlphaRamp {
    pub const fn new(hue: [u8; 3], name: &'static str) -> Self {
        Self { hue, name }
    }

    /// Pure blue
    pub const fn blue() -> Self {
        Self::new([0, 0, 255], "blue")
    }

    /// Cyan
    pub const fn cyan() -> Self {
        Self::new([0, 255, 255], "cyan")
    }

    pub fn hue(&self) -> [u8; 3] {
        self.hue
    }
}

impl ColorMapper for AlphaRamp {
    fn color_of(&self, t: f64, alpha: u8) -> Color {
        let [r, g, b] = self.hue;
        Color::rgba(r, g, b, scale_channel(alpha, clamp_unit(t)))
    }

    fn name(&self) -> &str {
        self.name
    }
}
