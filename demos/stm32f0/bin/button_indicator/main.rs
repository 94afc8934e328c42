#![no_std]
#![no_main]

use cortex_m_rt::{entry, exception};
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::interrupt;

use indicator_sequencer::{LightSequencer, SequencerConfig, SharedSequencer};

mod hardware_setup;

use hardware_setup::{IndicatorLed, TICK_PERIOD_MS};

/// Sequencer shared by the SysTick and button interrupts
static SEQUENCER: SharedSequencer<IndicatorLed> = SharedSequencer::new();

/// SysTick interrupt handler - one sequencer tick
#[exception]
fn SysTick() {
    // Ticks before install are dropped.
    let _ = SEQUENCER.on_tick();
}

/// Button interrupt handler - PC13 falling edge
#[interrupt]
fn EXTI4_15() {
    hardware_setup::clear_button_interrupt();
    let _ = SEQUENCER.on_button_edge();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Button Indicator Example ===");

    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    let config = match SequencerConfig::builder()
        .tick_period_ms(TICK_PERIOD_MS)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            rprintln!("Invalid sequencer config: {}", e);
            SequencerConfig::DEFAULT
        }
    };
    SEQUENCER.install(LightSequencer::with_config(hw.indicator, config));
    hardware_setup::enable_button_interrupt();

    rprintln!("=== System Ready ===");
    rprintln!("Press button to toggle:");
    rprintln!("  active: red 5 s, then red/yellow/blue blink");
    rprintln!("  idle:   off");

    // All work happens in the interrupt handlers.
    loop {
        cortex_m::asm::wfi();
    }
}
