//! Indicator driver abstraction.
//!
//! The sequencer talks to hardware only through [`Indicator`]: three color
//! commands and one off command, all fire-and-forget. [`RgbIndicator`] adapts
//! any PWM or serial RGB LED that implements [`RgbLed`].

use crate::COLOR_OFF;
use crate::colors;
use crate::types::IndicatorColor;
use palette::Srgb;

/// Trait for the indicator driver.
///
/// Both commands are idempotent: issuing the same one twice leaves the
/// indicator unchanged. Handle any hardware errors internally - these
/// methods cannot fail, and they may be called from interrupt context, so
/// they must not block.
pub trait Indicator {
    /// Lights the indicator in the given color.
    fn set_color(&mut self, color: IndicatorColor);

    /// Turns every channel off.
    fn all_off(&mut self);
}

impl<T: Indicator + ?Sized> Indicator for &mut T {
    fn set_color(&mut self, color: IndicatorColor) {
        (**self).set_color(color);
    }

    fn all_off(&mut self) {
        (**self).all_off();
    }
}

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.) and wrap it in
/// an [`RgbIndicator`] to drive it from the sequencer.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Color components are in the range 0.0-1.0. Implementations should
    /// convert these to their hardware's native format (e.g., PWM duty cycles,
    /// 8-bit RGB values).
    fn set_color(&mut self, color: Srgb);
}

/// Drives an [`RgbLed`] as an [`Indicator`].
#[derive(Debug)]
pub struct RgbIndicator<L: RgbLed> {
    led: L,
    brightness: f32,
    current_color: Srgb,
}

impl<L: RgbLed> RgbIndicator<L> {
    /// Wraps an LED at full brightness.
    pub fn new(led: L) -> Self {
        Self::with_brightness(led, 1.0)
    }

    /// Wraps an LED, scaling every lit color to `brightness` (clamped to 0.0-1.0).
    pub fn with_brightness(led: L, brightness: f32) -> Self {
        Self {
            led,
            brightness: brightness.clamp(0.0, 1.0),
            current_color: COLOR_OFF,
        }
    }

    /// Returns the last color written to the LED.
    pub fn current_color(&self) -> Srgb {
        self.current_color
    }

    /// Returns the configured brightness.
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Returns a reference to the wrapped LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Unwraps the LED.
    pub fn into_inner(self) -> L {
        self.led
    }

    fn write(&mut self, color: Srgb) {
        self.led.set_color(color);
        self.current_color = color;
    }
}

impl<L: RgbLed> Indicator for RgbIndicator<L> {
    fn set_color(&mut self, color: IndicatorColor) {
        self.write(colors::indicator_srgb(color, self.brightness));
    }

    fn all_off(&mut self) {
        self.write(COLOR_OFF);
    }
}
