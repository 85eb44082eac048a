#![no_std]
#![no_main]

mod animate;
mod leds;

use animate::*;
use leds::*;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use cylon_core::{
    pwm_tick_period, refresh_rate, Animator, ChaseConfig, Mode, OutputPort, OutputWord,
    SharedLevels, SoftPwm, Timing,
};
use embassy_executor::Spawner;
use embassy_futures::join;
use embassy_time::{Duration, Ticker, Timer, TICK_HZ};
use microbit_bsp::{
    embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive},
    Microbit,
};

/// Number of LEDs in the strip.
pub const CHANNELS: usize = 7;
/// Fade shape of the eye.
pub const CONFIG: ChaseConfig = ChaseConfig::DEFAULT;
/// Frame pacing.
pub const TIMING: Timing = Timing::DEFAULT;
/// What the strip shows.
pub const MODE: Mode = Mode::Cylon;
/// Full 256-tick PWM cycles per second. 128 Hz is one 32 768 Hz RTC tick
/// per PWM tick.
pub const PWM_REFRESH_HZ: u64 = 128;

const _: () = assert!(CONFIG.validate().is_ok(), "invalid chase configuration");

/// Latest frame from the animation, sampled by the PWM driver.
pub static LEVELS: SharedLevels<CHANNELS> = SharedLevels::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_init_print!();
    let board = Microbit::default();

    let led_pin = |p| Output::new(p, Level::Low, OutputDrive::Standard);
    let pins: LedPins = [
        led_pin(AnyPin::from(board.p0)),
        led_pin(AnyPin::from(board.p1)),
        led_pin(AnyPin::from(board.p2)),
        led_pin(AnyPin::from(board.p8)),
        led_pin(AnyPin::from(board.p9)),
        led_pin(AnyPin::from(board.p13)),
        led_pin(AnyPin::from(board.p16)),
    ];

    let animator = match Animator::new(MODE, CONFIG, TIMING) {
        Ok(animator) => animator,
        Err(err) => {
            rprintln!("cylon: bad configuration: {}", err);
            panic!("bad configuration");
        }
    };
    rprintln!(
        "cylon: {:?} on {} leds, peak {} threshold {} step {}, frame {} ms",
        animator.mode(),
        CHANNELS,
        CONFIG.max_bright,
        CONFIG.start_threshold,
        CONFIG.fade_step,
        animator.timing().fade_delay_ms,
    );

    let pwm = PwmDriver::new(pins, PWM_REFRESH_HZ);
    let animate = Animate::new(animator);

    join::join(pwm.run(), animate.run()).await;

    panic!("fell off end of main loop");
}
