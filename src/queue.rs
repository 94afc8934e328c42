//! Bounded event mailbox between interrupt handlers and the main loop.
//!
//! An alternative to [`SharedSequencer`](crate::SharedSequencer) when the
//! driver commands are too slow for interrupt context: handlers only post
//! events, and the main loop owns the sequencer and applies them in order.

use core::cell::{Cell, RefCell};
use critical_section::Mutex;
use heapless::Deque;

use crate::event::LightEvent;
use crate::indicator::Indicator;
use crate::sequencer::LightSequencer;

/// Errors returned when posting events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// The queue is at capacity. The event was dropped.
    Full(LightEvent),
}

impl core::fmt::Display for QueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QueueError::Full(event) => write!(f, "event queue full, dropped {:?}", event),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueueError {}

/// FIFO of pending [`LightEvent`]s with capacity `N`.
///
/// Size `N` for the longest stretch the main loop can go without draining,
/// in ticks, plus headroom for button edges. A dropped tick stretches the
/// sequence by one tick period.
pub struct EventQueue<const N: usize> {
    events: Mutex<RefCell<Deque<LightEvent, N>>>,
    dropped: Mutex<Cell<u32>>,
}

impl<const N: usize> EventQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(RefCell::new(Deque::new())),
            dropped: Mutex::new(Cell::new(0)),
        }
    }

    /// Posts an event. Safe to call from interrupt handlers.
    pub fn post(&self, event: LightEvent) -> Result<(), QueueError> {
        let result = critical_section::with(|cs| {
            let pushed = self.events.borrow_ref_mut(cs).push_back(event);
            if pushed.is_err() {
                let dropped = self.dropped.borrow(cs);
                dropped.set(dropped.get().saturating_add(1));
            }
            pushed
        });

        result.map_err(|event| {
            warn!("event queue full, dropped {:?}", event);
            QueueError::Full(event)
        })
    }

    /// Applies every pending event to `sequencer` in arrival order.
    ///
    /// Each event is popped in its own critical section and handled outside
    /// it, so interrupts stay enabled while the indicator is driven.
    ///
    /// Returns the number of events applied.
    pub fn dispatch<D: Indicator>(&self, sequencer: &mut LightSequencer<D>) -> usize {
        let mut applied = 0;
        while let Some(event) = self.pop() {
            sequencer.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Removes and returns the oldest pending event.
    pub fn pop(&self) -> Option<LightEvent> {
        critical_section::with(|cs| self.events.borrow_ref_mut(cs).pop_front())
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.events.borrow_ref(cs).len())
    }

    /// Returns true if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total events rejected because the queue was full.
    pub fn dropped(&self) -> u32 {
        critical_section::with(|cs| self.dropped.borrow(cs).get())
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
