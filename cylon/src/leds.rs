//! # LED Strip PWM Driver
//!
//! Runs the software PWM engine from a fixed-rate [`Ticker`] and drives the
//! strip's GPIO pins from its output word.
//!
//! ## Timing
//!
//! One PWM cycle is 256 ticks. The tick interval is a whole number of
//! embassy time-driver ticks:
//! ```text
//! period = max(1, TICK_HZ / (256 * refresh_hz))
//! ```
//! Where:
//! - `TICK_HZ`: Time-driver ticks per second (32 768 on the nRF RTC)
//! - `256`: Ticks per PWM cycle
//! - `refresh_hz`: Requested PWM cycles per second
//!
//! Rounding down means the rate actually achieved is at or above the request;
//! at 128 Hz the period is exactly one RTC tick and a cycle takes 7.8 ms.
//!
//! The driver loop never blocks on anything but its ticker, and only reads
//! [`LEVELS`] through a whole-frame snapshot once per cycle.
use crate::*;

/// GPIO pins of the LED strip, channel 0 first.
pub type LedPins = [Output<'static, AnyPin>; CHANNELS];

/// The strip pins driven as one output word.
pub struct LedPort(LedPins);

impl OutputPort for LedPort {
    fn write(&mut self, word: OutputWord) {
        for (channel, pin) in self.0.iter_mut().enumerate() {
            let level = if word.is_high(channel) {
                Level::High
            } else {
                Level::Low
            };
            pin.set_level(level);
        }
    }
}

/// Software PWM driver for the strip.
pub struct PwmDriver {
    port: LedPort,
    pwm: SoftPwm<CHANNELS>,
    /// PWM tick interval, in time-driver ticks.
    period: u64,
}

impl PwmDriver {
    /// Creates a driver for `pins` refreshing at `refresh_hz`.
    ///
    /// # Examples
    /// ```rust,no_run
    /// let pwm = PwmDriver::new(pins, 128);
    /// pwm.run().await;
    /// ```
    pub fn new(pins: LedPins, refresh_hz: u64) -> Self {
        Self {
            port: LedPort(pins),
            pwm: SoftPwm::new(),
            period: pwm_tick_period(TICK_HZ, refresh_hz),
        }
    }

    /// Main PWM loop. Never returns.
    pub async fn run(mut self) -> ! {
        rprintln!("PWM: refresh {} Hz", refresh_rate(TICK_HZ, self.period));
        let mut ticker = Ticker::every(Duration::from_ticks(self.period));
        loop {
            ticker.next().await;
            let word = self.pwm.tick(&LEVELS);
            self.port.write(word);
        }
    }
}
