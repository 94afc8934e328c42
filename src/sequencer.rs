//! Indicator light state machine driven by button edges and a millisecond tick.
//!
//! Provides [`LightSequencer`], which toggles between idle and active on each
//! button edge and, while active, holds red before cycling red, yellow and
//! blue in on/off blinks. All timing is counted in ticks; the sequencer never
//! reads a clock.

use crate::config::SequencerConfig;
use crate::indicator::Indicator;
use crate::types::{CYCLE_LEN, IndicatorColor, Mode, SequencerState, color_for};

/// Button-toggled indicator sequencer.
///
/// Owns the indicator driver and the only copy of [`SequencerState`]. The
/// state is written exclusively by [`on_button_edge`](Self::on_button_edge)
/// and [`on_tick`](Self::on_tick); both run in bounded time and never block,
/// so they can be called directly from interrupt handlers. When the two
/// handlers can preempt each other, wrap the sequencer in a
/// [`SharedSequencer`](crate::SharedSequencer).
///
/// # Type Parameters
/// * `D` - Indicator driver implementation type
pub struct LightSequencer<D: Indicator> {
    indicator: D,
    config: SequencerConfig,
    state: SequencerState,
    /// Milliseconds into the current blink half-period.
    phase_ms: u32,
    /// Milliseconds since the last accepted edge, saturating.
    since_edge_ms: u32,
}

impl<D: Indicator> LightSequencer<D> {
    /// Creates an idle sequencer with reference timing and turns the indicator off.
    pub fn new(indicator: D) -> Self {
        Self::with_config(indicator, SequencerConfig::DEFAULT)
    }

    /// Creates an idle sequencer with the given timing and turns the indicator off.
    pub fn with_config(mut indicator: D, config: SequencerConfig) -> Self {
        indicator.all_off();

        Self {
            indicator,
            config,
            state: SequencerState::IDLE,
            phase_ms: 0,
            since_edge_ms: u32::MAX,
        }
    }

    /// Handles one button activation edge.
    ///
    /// From `Idle`, enters `HoldOn` and lights red. From any active mode,
    /// returns to `Idle` and turns the indicator off. There is no debounce
    /// unless [`SequencerConfig::min_edge_interval_ms`] is set: a bouncing
    /// contact toggles once per edge.
    pub fn on_button_edge(&mut self) {
        let min_interval = self.config.min_edge_interval_ms();
        if min_interval > 0 && self.since_edge_ms < min_interval {
            trace!("edge ignored, {} ms after previous", self.since_edge_ms);
            return;
        }
        self.since_edge_ms = 0;

        match self.state.mode {
            Mode::Idle => {
                self.state.mode = Mode::HoldOn;
                self.state.elapsed_ms = 0;
                self.indicator.set_color(IndicatorColor::Red);
                debug!("Idle -> HoldOn");
            }
            Mode::HoldOn | Mode::Cycling => {
                let from = self.state.mode;
                self.state.mode = Mode::Idle;
                self.state.elapsed_ms = 0;
                self.state.phase_on = false;
                self.indicator.all_off();
                debug!("{:?} -> Idle", from);
            }
        }
    }

    /// Advances the sequencer by one tick.
    ///
    /// Safe to call unconditionally on every timer interrupt: idle ticks do
    /// nothing beyond advancing the edge filter.
    pub fn on_tick(&mut self) {
        let step = self.config.tick_period_ms();
        self.since_edge_ms = self.since_edge_ms.saturating_add(step);

        match self.state.mode {
            Mode::Idle => {}
            Mode::HoldOn => self.tick_hold(step),
            Mode::Cycling => self.tick_cycle(step),
        }
    }

    fn tick_hold(&mut self, step: u32) {
        self.state.elapsed_ms += step;

        if self.state.elapsed_ms < self.config.hold_ms() {
            // Re-assert every tick; idempotent on the driver side.
            self.indicator.set_color(IndicatorColor::Red);
        } else {
            self.state.mode = Mode::Cycling;
            self.state.elapsed_ms = 0;
            self.state.cycle_index = 0;
            self.state.phase_on = false;
            self.phase_ms = 0;
            debug!("HoldOn -> Cycling");
        }
    }

    fn tick_cycle(&mut self, step: u32) {
        self.state.elapsed_ms = self.state.elapsed_ms.wrapping_add(step);
        self.phase_ms += step;

        if self.phase_ms < self.config.half_period_ms() {
            return;
        }
        self.phase_ms = 0;
        self.state.phase_on = !self.state.phase_on;

        if self.state.phase_on {
            let color = color_for(self.state.cycle_index);
            self.indicator.set_color(color);
            trace!("cycle on: {:?}", color);
        } else {
            self.indicator.all_off();
            self.state.cycle_index = (self.state.cycle_index + 1) % CYCLE_LEN;
            trace!("cycle off, next index {}", self.state.cycle_index);
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Returns the timing configuration.
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Returns a reference to the indicator driver.
    pub fn indicator(&self) -> &D {
        &self.indicator
    }

    /// Consumes the sequencer and returns the indicator driver.
    pub fn into_indicator(self) -> D {
        self.indicator
    }
}
