//! Timing configuration for the light sequencer.

/// Validated timing parameters.
///
/// All durations are in milliseconds. The hold duration and the blink
/// half-period must be whole multiples of the tick period so that every
/// boundary lands exactly on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencerConfig {
    hold_ms: u32,
    half_period_ms: u32,
    tick_period_ms: u32,
    min_edge_interval_ms: u32,
}

impl SequencerConfig {
    /// Reference timing: 5 s solid red, 500 ms blink half-period, 1 ms tick,
    /// every edge accepted.
    pub const DEFAULT: Self = Self {
        hold_ms: 5000,
        half_period_ms: 500,
        tick_period_ms: 1,
        min_edge_interval_ms: 0,
    };

    /// Creates a new config builder starting from [`SequencerConfig::DEFAULT`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Solid-color hold duration after activation.
    #[inline]
    pub fn hold_ms(&self) -> u32 {
        self.hold_ms
    }

    /// Blink half-period while cycling.
    #[inline]
    pub fn half_period_ms(&self) -> u32 {
        self.half_period_ms
    }

    /// Milliseconds represented by one tick.
    #[inline]
    pub fn tick_period_ms(&self) -> u32 {
        self.tick_period_ms
    }

    /// Minimum spacing between accepted button edges. Zero disables filtering.
    #[inline]
    pub fn min_edge_interval_ms(&self) -> u32 {
        self.min_edge_interval_ms
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for [`SequencerConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: SequencerConfig,
}

impl ConfigBuilder {
    /// Creates a builder holding the reference timing.
    pub fn new() -> Self {
        Self {
            config: SequencerConfig::DEFAULT,
        }
    }

    /// Sets the solid-color hold duration.
    pub fn hold_ms(mut self, millis: u32) -> Self {
        self.config.hold_ms = millis;
        self
    }

    /// Sets the blink half-period.
    pub fn half_period_ms(mut self, millis: u32) -> Self {
        self.config.half_period_ms = millis;
        self
    }

    /// Sets how many milliseconds each tick represents.
    pub fn tick_period_ms(mut self, millis: u32) -> Self {
        self.config.tick_period_ms = millis;
        self
    }

    /// Ignores edges closer than `millis` to the last accepted one.
    ///
    /// Default is 0: every edge toggles, including contact bounce.
    pub fn min_edge_interval_ms(mut self, millis: u32) -> Self {
        self.config.min_edge_interval_ms = millis;
        self
    }

    /// Builds and validates the config.
    ///
    /// # Errors
    /// * `ZeroTickPeriod` - Tick period is zero
    /// * `ZeroHoldDuration` - Hold duration is zero
    /// * `ZeroHalfPeriod` - Blink half-period is zero
    /// * `MisalignedDuration` - Hold or half-period is not a whole number of ticks
    pub fn build(self) -> Result<SequencerConfig, ConfigError> {
        let config = self.config;

        if config.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if config.hold_ms == 0 {
            return Err(ConfigError::ZeroHoldDuration);
        }
        if config.half_period_ms == 0 {
            return Err(ConfigError::ZeroHalfPeriod);
        }

        for (field, value) in [
            ("hold_ms", config.hold_ms),
            ("half_period_ms", config.half_period_ms),
        ] {
            if value % config.tick_period_ms != 0 {
                return Err(ConfigError::MisalignedDuration {
                    field,
                    tick_period_ms: config.tick_period_ms,
                });
            }
        }

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Config validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period of zero milliseconds.
    ZeroTickPeriod,

    /// Hold duration of zero milliseconds.
    ZeroHoldDuration,

    /// Blink half-period of zero milliseconds.
    ZeroHalfPeriod,

    /// A duration is not a multiple of the tick period.
    MisalignedDuration {
        /// Name of the offending field.
        field: &'static str,
        /// The configured tick period.
        tick_period_ms: u32,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickPeriod => write!(f, "tick period must be non-zero"),
            ConfigError::ZeroHoldDuration => write!(f, "hold duration must be non-zero"),
            ConfigError::ZeroHalfPeriod => write!(f, "blink half-period must be non-zero"),
            ConfigError::MisalignedDuration {
                field,
                tick_period_ms,
            } => {
                write!(
                    f,
                    "{} must be a multiple of the {} ms tick period",
                    field, tick_period_ms
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    #[test]
    fn default_matches_reference_timing() {
        let config = SequencerConfig::default();
        assert_eq!(config.hold_ms(), 5000);
        assert_eq!(config.half_period_ms(), 500);
        assert_eq!(config.tick_period_ms(), 1);
        assert_eq!(config.min_edge_interval_ms(), 0);
    }

    #[test]
    fn builder_without_changes_yields_default() {
        assert_eq!(SequencerConfig::builder().build(), Ok(SequencerConfig::DEFAULT));
    }

    #[test]
    fn zero_durations_are_rejected() {
        assert_eq!(
            SequencerConfig::builder().tick_period_ms(0).build(),
            Err(ConfigError::ZeroTickPeriod)
        );
        assert_eq!(
            SequencerConfig::builder().hold_ms(0).build(),
            Err(ConfigError::ZeroHoldDuration)
        );
        assert_eq!(
            SequencerConfig::builder().half_period_ms(0).build(),
            Err(ConfigError::ZeroHalfPeriod)
        );
    }

    #[test]
    fn durations_must_be_whole_ticks() {
        let result = SequencerConfig::builder()
            .tick_period_ms(10)
            .hold_ms(5005)
            .build();
        assert_eq!(
            result,
            Err(ConfigError::MisalignedDuration {
                field: "hold_ms",
                tick_period_ms: 10
            })
        );

        let result = SequencerConfig::builder()
            .tick_period_ms(10)
            .half_period_ms(505)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MisalignedDuration {
                field: "half_period_ms",
                ..
            })
        ));
    }

    #[test]
    fn edge_interval_needs_no_alignment() {
        let config = SequencerConfig::builder()
            .tick_period_ms(10)
            .min_edge_interval_ms(25)
            .build()
            .unwrap();
        assert_eq!(config.min_edge_interval_ms(), 25);
    }

    #[test]
    fn error_messages_format_correctly_for_display() {
        assert_eq!(
            ConfigError::ZeroHalfPeriod.to_string(),
            "blink half-period must be non-zero"
        );
        assert_eq!(
            ConfigError::MisalignedDuration {
                field: "hold_ms",
                tick_period_ms: 4
            }
            .to_string(),
            "hold_ms must be a multiple of the 4 ms tick period"
        );
    }
}
