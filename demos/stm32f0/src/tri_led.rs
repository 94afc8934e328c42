use embedded_hal::PwmPin;
use indicator_sequencer::{Indicator, IndicatorColor};

/// Three-die indicator LED on PWM channels, switched between fixed patterns
///
/// Each die is either dark or lit at `level_percent` of full duty. The
/// channels are never faded, so any PWM frequency that avoids visible flicker
/// will do.
pub struct TriLed<R, G, B>
where
    R: PwmPin<Duty = u16>,
    G: PwmPin<Duty = u16>,
    B: PwmPin<Duty = u16>,
{
    red: R,
    green: G,
    blue: B,
    lit_duty: u16,
    dark_duty: u16,
}

impl<R, G, B> TriLed<R, G, B>
where
    R: PwmPin<Duty = u16>,
    G: PwmPin<Duty = u16>,
    B: PwmPin<Duty = u16>,
{
    /// Takes the three channels and switches them all dark.
    ///
    /// `level_percent` is clamped to 100. For a common anode LED the lit
    /// and dark duties are swapped.
    pub fn new(mut red: R, mut green: G, mut blue: B, level_percent: u8, common_anode: bool) -> Self {
        let max = red.get_max_duty();
        let on = (max as u32 * level_percent.min(100) as u32 / 100) as u16;
        let (lit_duty, dark_duty) = if common_anode { (max - on, max) } else { (on, 0) };

        red.enable();
        green.enable();
        blue.enable();

        let mut led = Self {
            red,
            green,
            blue,
            lit_duty,
            dark_duty,
        };
        led.apply([false; 3]);
        led
    }

    fn apply(&mut self, [r, g, b]: [bool; 3]) {
        let duty = |lit: bool| if lit { self.lit_duty } else { self.dark_duty };
        let (r, g, b) = (duty(r), duty(g), duty(b));
        self.red.set_duty(r);
        self.green.set_duty(g);
        self.blue.set_duty(b);
    }
}

impl<R, G, B> Indicator for TriLed<R, G, B>
where
    R: PwmPin<Duty = u16>,
    G: PwmPin<Duty = u16>,
    B: PwmPin<Duty = u16>,
{
    fn set_color(&mut self, color: IndicatorColor) {
        self.apply(color.lit_channels());
    }

    fn all_off(&mut self) {
        self.apply([false; 3]);
    }
}
