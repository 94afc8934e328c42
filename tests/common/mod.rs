//! Shared test infrastructure for indicator-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use indicator_sequencer::{Indicator, IndicatorColor, LightSequencer, RgbLed};
use palette::Srgb;

// ============================================================================
// Mock Indicator
// ============================================================================

/// A single driver command as seen by the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Set(IndicatorColor),
    Off,
}

/// Mock indicator that records every command it receives
#[derive(Debug, Default)]
pub struct MockIndicator {
    commands: Vec<Command>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn last(&self) -> Option<Command> {
        self.commands.last().copied()
    }
}

impl Indicator for MockIndicator {
    fn set_color(&mut self, color: IndicatorColor) {
        self.commands.push(Command::Set(color));
    }

    fn all_off(&mut self) {
        self.commands.push(Command::Off);
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock RGB LED that records all color changes for testing
pub struct MockLed {
    current_color: Srgb,
    color_history: heapless::Vec<Srgb, 32>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current_color: Srgb::new(0.0, 0.0, 0.0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn get_last_color(&self) -> Srgb {
        self.current_color
    }

    pub fn color_history(&self) -> &[Srgb] {
        &self.color_history
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: Srgb) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use indicator_sequencer::{BLACK, BLUE, RED, YELLOW};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

/// Delivers `count` ticks
pub fn tick_n<D: Indicator>(sequencer: &mut LightSequencer<D>, count: u32) {
    for _ in 0..count {
        sequencer.on_tick();
    }
}

/// Commands issued after the first `skip`
pub fn commands_since(indicator: &MockIndicator, skip: usize) -> &[Command] {
    &indicator.commands()[skip..]
}

/// An active sequencer that has just entered `Cycling`
pub fn cycling_sequencer() -> LightSequencer<MockIndicator> {
    let mut sequencer = LightSequencer::new(MockIndicator::new());
    sequencer.on_button_edge();
    tick_n(&mut sequencer, 5000);
    sequencer
}
