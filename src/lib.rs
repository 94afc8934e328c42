#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LightSequencer`**: The state machine. Toggled by `on_button_edge`, advanced by `on_tick`
//! - **`Mode`**: `Idle`, `HoldOn` (solid red) or `Cycling` (red, yellow, blue blink)
//! - **`SequencerState`**: Snapshot of mode, elapsed time, cycle position and blink phase
//! - **`SequencerConfig`**: Hold duration, blink half-period, tick period and optional edge filter
//! - **`Indicator`**: Trait to implement for your indicator driver (three colors and off)
//! - **`RgbLed`** / **`RgbIndicator`**: Drive an RGB LED taking `Srgb` colors as an `Indicator`
//! - **`SharedSequencer`**: Critical-section wrapper for calling both entry points from interrupts
//! - **`EventQueue`**: Bounded mailbox for deferring events to the main loop
//!
//! Both entry points are total and never block: every call completes a whole
//! transition in bounded time, so they may run directly in interrupt context.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod fmt;

pub mod colors;
pub mod config;
pub mod event;
pub mod indicator;
pub mod queue;
pub mod sequencer;
pub mod shared;
pub mod types;

pub use config::{ConfigBuilder, ConfigError, SequencerConfig};
pub use event::LightEvent;
pub use indicator::{Indicator, RgbIndicator, RgbLed};
pub use queue::{EventQueue, QueueError};
pub use sequencer::LightSequencer;
pub use shared::{SequencerError, SharedSequencer};
pub use types::{CYCLE_LEN, IndicatorColor, Mode, SequencerState, color_for};

pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

pub const BLACK: Srgb = COLOR_OFF;
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const YELLOW: Srgb = Srgb::new(1.0, 1.0, 0.0);
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);
