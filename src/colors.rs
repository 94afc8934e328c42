//! Color space helpers.
//!
//! Indicator colors are defined by hue so that brightness can be scaled
//! through the HSV value channel without shifting the color. All functions
//! return `palette::Srgb` for direct use with [`crate::RgbLed`].

use crate::types::IndicatorColor;
use palette::{FromColor, Hsv, Srgb};

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Converts an indicator color to RGB at the given brightness.
///
/// Brightness is clamped to 0.0-1.0.
#[inline]
pub fn indicator_srgb(color: IndicatorColor, brightness: f32) -> Srgb {
    hsv(color.hue(), 1.0, brightness.clamp(0.0, 1.0))
}
