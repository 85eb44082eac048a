//! # Software PWM Engine
//!
//! Time-proportioned PWM for `N` channels from one periodic tick. A PWM cycle
//! is 256 ticks long. At the start of every cycle all channels go high, and
//! each channel goes low again on the tick whose count equals its brightness,
//! so a channel with brightness `V` is high for exactly `V` of the 256 ticks.
//!
//! ## Pipelining
//!
//! Each call to [`SoftPwm::tick`] returns the word computed on the *previous*
//! call and only then works out the next one. The caller writes the returned
//! word straight away, so the instant the outputs change does not depend on
//! how long the compare loop takes.
//!
//! ## Latching
//!
//! Brightness is sampled from [`SharedLevels`] once per cycle, when the tick
//! counter wraps to zero. Changes published mid-cycle take effect at the next
//! cycle boundary.
use crate::output::OutputWord;
use crate::shared::SharedLevels;

/// PWM state owned by the tick context.
pub struct SoftPwm<const N: usize> {
    /// Brightness latched at the start of the current cycle.
    compare: [u8; N],
    /// Levels to drive on the next tick.
    pending: OutputWord,
    /// Position within the 256-tick cycle.
    counter: u8,
    /// Number of cycle-start latches so far.
    cycles: u32,
}

/// Ticks in one PWM cycle.
pub const TICKS_PER_CYCLE: u64 = 256;

/// Whole timer ticks per PWM tick for roughly `refresh_hz` cycles per second
/// on a timer running at `tick_hz`. Never less than one tick, so the actual
/// rate can only come out at or above the request.
pub const fn pwm_tick_period(tick_hz: u64, refresh_hz: u64) -> u64 {
    let ticks = tick_hz / (TICKS_PER_CYCLE * refresh_hz);
    if ticks == 0 {
        1
    } else {
        ticks
    }
}

/// Full PWM cycles per second with a PWM tick of `period` timer ticks.
pub const fn refresh_rate(tick_hz: u64, period: u64) -> u64 {
    tick_hz / (TICKS_PER_CYCLE * period)
}

impl<const N: usize> SoftPwm<N> {
    const CHANNELS_FIT: () = assert!(
        N > 0 && N <= OutputWord::MAX_CHANNELS,
        "channel count must fit the output word"
    );

    /// The counter starts one short of wrapping, so the first tick starts a
    /// cycle and latches brightness immediately.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CHANNELS_FIT;
        Self {
            compare: [0; N],
            pending: OutputWord::all_high(N),
            counter: u8::MAX,
            cycles: 0,
        }
    }

    /// Advance one tick.
    ///
    /// # Returns
    ///
    /// The output word to drive now, computed on the previous tick.
    pub fn tick(&mut self, levels: &SharedLevels<N>) -> OutputWord {
        let out = self.pending;

        self.counter = self.counter.wrapping_add(1);
        if self.counter == 0 {
            self.compare = levels.snapshot();
            self.pending = OutputWord::all_high(N);
            self.cycles = self.cycles.wrapping_add(1);
        }

        for (channel, &level) in self.compare.iter().enumerate() {
            if level == self.counter {
                self.pending.set_low(channel);
            }
        }

        out
    }

    /// Brightness latched for the current cycle.
    pub fn latched(&self) -> &[u8; N] {
        &self.compare
    }

    /// Tick count within the current cycle.
    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Number of cycles started so far (wrapping).
    pub fn cycles(&self) -> u32 {
        self.cycles
    }
}

impl<const N: usize> Default for SoftPwm<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick rate of the nRF RTC time driver.
    const RTC_HZ: u64 = 32_768;

    #[test]
    fn tick_period_is_whole_timer_ticks() {
        // 128 Hz is exactly one RTC tick per PWM tick.
        assert_eq!(pwm_tick_period(RTC_HZ, 128), 1);
        assert_eq!(refresh_rate(RTC_HZ, 1), 128);
        // 100 Hz would be 1.28 ticks; rounding down keeps the rate above 100.
        let period = pwm_tick_period(RTC_HZ, 100);
        assert_eq!(period, 1);
        assert!(refresh_rate(RTC_HZ, period) >= 100);
        // Faster than the timer can go still ticks every timer tick.
        assert_eq!(pwm_tick_period(RTC_HZ, 1000), 1);
        // A 1 MHz timer gets the exact period.
        assert_eq!(pwm_tick_period(1_000_000, 125), 31);
        assert_eq!(refresh_rate(1_000_000, 31), 126);
    }

    /// Runs one full cycle after the initial latch and counts high ticks per
    /// channel.
    fn high_ticks<const N: usize>(levels: [u8; N]) -> [usize; N] {
        let shared = SharedLevels::new();
        shared.publish(&levels);
        let mut pwm = SoftPwm::<N>::new();
        // The first tick drives the power-on word and latches the levels.
        pwm.tick(&shared);

        let mut high = [0; N];
        for _ in 0..TICKS_PER_CYCLE {
            let word = pwm.tick(&shared);
            for (channel, count) in high.iter_mut().enumerate() {
                if word.is_high(channel) {
                    *count += 1;
                }
            }
        }
        high
    }

    #[test]
    fn duty_matches_brightness() {
        for level in [0u8, 1, 2, 84, 127, 128, 200, 254, 255] {
            let [high] = high_ticks([level]);
            assert_eq!(high, level as usize, "brightness {level}");
        }
    }

    #[test]
    fn channels_are_independent() {
        let levels = [0, 255, 17, 128, 254, 1, 99];
        let high = high_ticks(levels);
        for (channel, &level) in levels.iter().enumerate() {
            assert_eq!(high[channel], level as usize, "channel {channel}");
        }
    }

    #[test]
    fn output_lags_one_tick() {
        let shared = SharedLevels::new();
        shared.publish(&[0, 3]);
        let mut pwm = SoftPwm::<2>::new();

        // Power-on word, then the word for count 0 where channel 0 is dropped.
        assert_eq!(pwm.tick(&shared), OutputWord::all_high(2));
        assert_eq!(pwm.counter(), 0);
        assert_eq!(pwm.tick(&shared).bits(), 0b10);
        assert_eq!(pwm.tick(&shared).bits(), 0b10);
        assert_eq!(pwm.tick(&shared).bits(), 0b10);
        // Count 3 was computed on the previous tick and clears channel 1.
        assert_eq!(pwm.tick(&shared).bits(), 0b00);
    }

    #[test]
    fn latches_once_per_cycle() {
        let shared = SharedLevels::new();
        let mut pwm = SoftPwm::<1>::new();

        let mut latched_at = Vec::new();
        for tick in 0..(4 * TICKS_PER_CYCLE) {
            // Publish a new level on every tick.
            shared.publish(&[(tick % 251) as u8]);
            let before = pwm.cycles();
            pwm.tick(&shared);
            if pwm.cycles() != before {
                latched_at.push(tick);
                assert_eq!(pwm.latched(), &[(tick % 251) as u8]);
            } else if tick > 0 {
                assert_ne!(pwm.counter(), 0);
            }
        }
        assert_eq!(latched_at, vec![0, 256, 512, 768]);
        assert_eq!(pwm.cycles(), 4);
    }

    #[test]
    fn mid_cycle_publish_waits_for_boundary() {
        let shared = SharedLevels::new();
        shared.publish(&[200]);
        let mut pwm = SoftPwm::<1>::new();
        pwm.tick(&shared);
        shared.publish(&[10]);

        let mut high = 0;
        for _ in 0..TICKS_PER_CYCLE {
            if pwm.tick(&shared).is_high(0) {
                high += 1;
            }
        }
        assert_eq!(high, 200);
        assert_eq!(pwm.latched(), &[10]);
    }
}
