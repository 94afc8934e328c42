use cortex_m::peripheral::{syst::SystClkSource, NVIC, SYST};
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{gpioa, gpiob, gpioc, Floating, Input},
    pac,
    prelude::*,
    pwm,
    rcc::Rcc,
    time::Hertz,
};

use stm32f0_indicator_demos::tri_led::TriLed;

/// Indicator LED on the three TIM3 channels
pub type IndicatorLed = TriLed<
    pwm::PwmChannels<pac::TIM3, pwm::C1>,
    pwm::PwmChannels<pac::TIM3, pwm::C2>,
    pwm::PwmChannels<pac::TIM3, pwm::C3>,
>;

/// EXTI line of the user button (PC13)
const BUTTON_LINE: u32 = 1 << 13;

/// Port C selector in SYSCFG_EXTICRx
const EXTI_PORT_C: u32 = 0b0010;

/// Must match `SequencerConfig::tick_period_ms`
pub const TICK_PERIOD_MS: u32 = 1;

const PWM_HZ: u32 = 1_000;
const LEVEL_PERCENT: u8 = 60;
const COMMON_ANODE: bool = true;

/// Initialized peripherals
pub struct HardwareContext {
    pub indicator: IndicatorLed,
}

/// Initialize clocks, the SysTick tick, the indicator LED and the button EXTI line
///
/// The button interrupt stays masked in the NVIC until
/// [`enable_button_interrupt`] is called.
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // SYSCFG routes GPIO lines to EXTI; needs its clock before RCC is frozen.
    dp.RCC.apb2enr.modify(|_, w| w.syscfgen().set_bit());

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    rprintln!("System clock configured: {} Hz", rcc.clocks.sysclk().0);
    start_tick(rcc.clocks.sysclk().0, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let indicator = setup_indicator(gpioa.pa6, gpioa.pa7, gpiob.pb0, dp.TIM3, &mut rcc);
    setup_button(gpioc.pc13, &dp.SYSCFG, &dp.EXTI);

    HardwareContext { indicator }
}

/// Start the sequencer tick: one SysTick exception every `TICK_PERIOD_MS`
fn start_tick(sysclk_hz: u32, syst: &mut SYST) {
    let reload = sysclk_hz / 1_000 * TICK_PERIOD_MS - 1;

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("Tick every {} ms (reload {})", TICK_PERIOD_MS, reload);
}

/// Configure the user button (PC13) as a falling-edge interrupt source
///
/// No software debounce: every falling edge raises EXTI4_15.
fn setup_button(pc13: gpioc::PC13<Input<Floating>>, syscfg: &pac::SYSCFG, exti: &pac::EXTI) {
    let _button = cortex_m::interrupt::free(|cs| pc13.into_pull_up_input(cs));

    // SAFETY: read-modify-write of the EXTI13 source nibble and line 13 bits only.
    syscfg.exticr4.modify(|r, w| unsafe {
        w.bits((r.bits() & !(0xF << 4)) | (EXTI_PORT_C << 4))
    });
    exti.ftsr.modify(|r, w| unsafe { w.bits(r.bits() | BUTTON_LINE) });
    exti.imr.modify(|r, w| unsafe { w.bits(r.bits() | BUTTON_LINE) });

    rprintln!("Button configured on PC13 (EXTI13, falling edge)");
}

/// Indicator LED on TIM3: red die PA6 (CH1), green die PA7 (CH2), blue die PB0 (CH3)
fn setup_indicator(
    pa6: gpioa::PA6<Input<Floating>>,
    pa7: gpioa::PA7<Input<Floating>>,
    pb0: gpiob::PB0<Input<Floating>>,
    tim3: pac::TIM3,
    rcc: &mut Rcc,
) -> IndicatorLed {
    let pins = cortex_m::interrupt::free(|cs| {
        (
            pa6.into_alternate_af1(cs),
            pa7.into_alternate_af1(cs),
            pb0.into_alternate_af1(cs),
        )
    });
    let (red, green, blue) = pwm::tim3(tim3, pins, rcc, Hertz(PWM_HZ));

    TriLed::new(red, green, blue, LEVEL_PERCENT, COMMON_ANODE)
}

/// Unmask the button interrupt in the NVIC
pub fn enable_button_interrupt() {
    // SAFETY: the handler only touches the shared sequencer, which is
    // already installed, and the EXTI pending register.
    unsafe { NVIC::unmask(pac::Interrupt::EXTI4_15) };
}

/// Acknowledge a pending button interrupt
pub fn clear_button_interrupt() {
    // SAFETY: PR is write-1-to-clear; only line 13 is written.
    unsafe { (*pac::EXTI::ptr()).pr.write(|w| w.bits(BUTTON_LINE)) };
}
