//! Hue gradients.
//!
//! These mappers encode the value as a change of hue at fixed or caller
//! supplied opacity.

use super::colormap::{clamp_unit, scale_channel, Color, ColorMapper};

/// Red to blue two-stop gradient, always opaque
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearGradient;

impl ColorMapper for LinearGradient {
    fn color_of(&self, t: f64, _alpha: u8) -> Color {
        let t = clamp_unit(t);
        Color::rgba(scale_channel(255, 1.0 - t), 0, scale_channel(255, t), 255)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// Off-white to deep blue gradient that stays readable under common color
/// vision deficiencies. Opacity is passed through.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorblindBlue;

impl ColorblindBlue {
    pub const LIGHT: [u8; 3] = [247, 251, 255];
    pub const DELTA: [u8; 3] = [239, 203, 148];
}

impl ColorMapper for ColorblindBlue {
    fn color_of(&self, t: f64, alpha: u8) -> Color {
        let t = clamp_unit(t);
        let [lr, lg, lb] = Self::LIGHT;
        let [dr, dg, db] = Self::DELTA;
        Color::rgba(
            lr - scale_channel(dr, t),
            lg - scale_channel(dg, t),
            lb - scale_channel(db, t),
            alpha,
        )
    }

    fn name(&self) -> &str {
        "colorblind"
    }
}
