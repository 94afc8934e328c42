//! Core types shared by the sequencer and its collaborators.

/// Number of colors in the cycling rotation.
pub const CYCLE_LEN: u8 = 3;

/// Top-level phase of the light sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Inactive. Indicator is off and ticks are ignored.
    #[default]
    Idle,

    /// Solid red until the hold duration elapses.
    HoldOn,

    /// Red, yellow, blue blinking, one half-period on and one off per color.
    Cycling,
}

impl Mode {
    /// Returns true for `HoldOn` and `Cycling`.
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, Mode::Idle)
    }
}

/// Colors the indicator driver can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    Red,
    Yellow,
    Blue,
}

impl IndicatorColor {
    /// Hue in degrees, as used by [`crate::colors::indicator_srgb`].
    #[inline]
    pub fn hue(&self) -> f32 {
        match self {
            IndicatorColor::Red => 0.0,
            IndicatorColor::Yellow => 60.0,
            IndicatorColor::Blue => 240.0,
        }
    }

    /// Which of the red, green and blue dies are lit, for on/off LEDs.
    ///
    /// Yellow lights red and green together.
    #[inline]
    pub const fn lit_channels(&self) -> [bool; 3] {
        match self {
            IndicatorColor::Red => [true, false, false],
            IndicatorColor::Yellow => [true, true, false],
            IndicatorColor::Blue => [false, false, true],
        }
    }
}

/// Maps a cycle position to its color.
///
/// Positions outside `0..CYCLE_LEN` wrap, so the mapping is total.
#[inline]
pub fn color_for(cycle_index: u8) -> IndicatorColor {
    match cycle_index % CYCLE_LEN {
        0 => IndicatorColor::Red,
        1 => IndicatorColor::Yellow,
        _ => IndicatorColor::Blue,
    }
}

/// Snapshot of the sequencer's state.
///
/// Returned by value from [`crate::LightSequencer::state`]; the live copy is
/// only ever written by the two event entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencerState {
    /// Current phase.
    pub mode: Mode,

    /// Milliseconds since the current mode was entered. Wraps on overflow.
    pub elapsed_ms: u32,

    /// Position in the red, yellow, blue rotation. Meaningful only while cycling.
    pub cycle_index: u8,

    /// True while the current cycle color is lit.
    pub phase_on: bool,
}

impl SequencerState {
    /// The start-up configuration: idle, off, counters at zero.
    pub const IDLE: Self = Self {
        mode: Mode::Idle,
        elapsed_ms: 0,
        cycle_index: 0,
        phase_on: false,
    };
}
