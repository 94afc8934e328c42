//! Event-based control for sequencers.

use crate::indicator::Indicator;
use crate::sequencer::LightSequencer;

/// Events delivered by the two interrupt sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightEvent {
    /// Button activation edge.
    ButtonEdge,
    /// One timer tick elapsed.
    Tick,
}

impl<D: Indicator> LightSequencer<D> {
    /// Handles an event by dispatching to the matching entry point.
    ///
    /// Convenience for queue-based delivery, so events can be applied
    /// without matching on them manually.
    pub fn handle_event(&mut self, event: LightEvent) {
        match event {
            LightEvent::ButtonEdge => self.on_button_edge(),
            LightEvent::Tick => self.on_tick(),
        }
    }
}
