//! Interrupt-safe access to a sequencer shared by two interrupt sources.
//!
//! The button and timer handlers may preempt each other. [`SharedSequencer`]
//! runs each entry point inside a single critical section, so a multi-field
//! transition (mode, counter, phase, driver command) is never observed or
//! interleaved half-done.

use core::cell::RefCell;
use critical_section::Mutex;

use crate::indicator::Indicator;
use crate::sequencer::LightSequencer;
use crate::types::SequencerState;

/// Errors returned by [`SharedSequencer`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerError {
    /// No sequencer has been installed yet. The event was dropped.
    NotInstalled,
}

impl core::fmt::Display for SequencerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequencerError::NotInstalled => write!(f, "no sequencer installed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequencerError {}

/// A [`LightSequencer`] behind a critical-section mutex.
///
/// Created empty so it can live in a `static`; the sequencer is installed
/// once the indicator hardware is initialized.
///
/// ```ignore
/// static SEQUENCER: SharedSequencer<Led> = SharedSequencer::new();
///
/// #[exception]
/// fn SysTick() {
///     let _ = SEQUENCER.on_tick();
/// }
/// ```
pub struct SharedSequencer<D: Indicator> {
    inner: Mutex<RefCell<Option<LightSequencer<D>>>>,
}

impl<D: Indicator> SharedSequencer<D> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs a sequencer, returning the one it replaces, if any.
    pub fn install(&self, sequencer: LightSequencer<D>) -> Option<LightSequencer<D>> {
        let previous =
            critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(sequencer));
        info!("sequencer installed");
        previous
    }

    /// Removes the installed sequencer.
    pub fn take(&self) -> Option<LightSequencer<D>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Returns true once a sequencer is installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Delivers a button edge. Call from the button interrupt handler.
    pub fn on_button_edge(&self) -> Result<(), SequencerError> {
        self.with(LightSequencer::on_button_edge).ok_or(SequencerError::NotInstalled)
    }

    /// Delivers a timer tick. Call from the timer interrupt handler.
    pub fn on_tick(&self) -> Result<(), SequencerError> {
        self.with(LightSequencer::on_tick).ok_or(SequencerError::NotInstalled)
    }

    /// Returns a consistent snapshot of the sequencer state.
    pub fn state(&self) -> Option<SequencerState> {
        self.with(|sequencer| sequencer.state())
    }

    /// Runs `f` on the installed sequencer inside one critical section.
    ///
    /// Keep `f` short: interrupts are masked for its whole duration.
    pub fn with<R>(&self, f: impl FnOnce(&mut LightSequencer<D>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}

impl<D: Indicator> Default for SharedSequencer<D> {
    fn default() -> Self {
        Self::new()
    }
}
