//! # Chase Controller
//!
//! Per-frame state machine behind the "cylon eye". Every channel has a
//! brightness and a signed increment. A frame walks the channels in index
//! order and, for each one:
//!
//! 1. starts the fade-out once the channel reaches the peak,
//! 2. wakes the next channel in the sweep direction once a rising channel
//!    passes the start threshold,
//! 3. parks a channel that has faded back to zero, bouncing the sweep when
//!    that channel is the far end of the strip,
//! 4. applies the increment.
//!
//! Overlapping fades of neighbouring channels are what make the eye look like
//! a smeared glow instead of a single hopping dot.
use crate::config::{ChaseConfig, ConfigError};

/// Which way the eye is travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards increasing channel index.
    LowToHigh,
    /// Towards decreasing channel index.
    HighToLow,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::LowToHigh => Direction::HighToLow,
            Direction::HighToLow => Direction::LowToHigh,
        }
    }
}

/// What a frame did, so the caller can pace the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Ordinary fade frame.
    Fade,
    /// The eye hit an end of the strip and now travels the given way.
    Bounce(Direction),
}

/// Chase state for `N` channels.
pub struct Chase<const N: usize> {
    config: ChaseConfig,
    brightness: [u8; N],
    increment: [i8; N],
    direction: Direction,
}

impl<const N: usize> Chase<N> {
    /// Dark strip with channel 0 starting to fade in, travelling up.
    pub fn new(config: ChaseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut increment = [0; N];
        if let Some(first) = increment.first_mut() {
            *first = config.fade_up();
        }
        Ok(Self {
            config,
            brightness: [0; N],
            increment,
            direction: Direction::LowToHigh,
        })
    }

    /// Run one animation frame.
    pub fn step(&mut self) -> Step {
        let mut step = Step::Fade;
        let ChaseConfig {
            max_bright,
            start_threshold,
            ..
        } = self.config;

        for i in 0..N {
            let level = self.brightness[i];

            if level == max_bright {
                self.increment[i] = self.config.fade_down();
            }

            if level >= start_threshold && self.increment[i] > 0 {
                if let Some(next) = self.next_channel(i) {
                    self.increment[next] = self.config.fade_up();
                }
            }

            if level == 0 && self.increment[i] < 0 {
                self.increment[i] = 0;
                if i == self.far_end() {
                    self.direction = self.direction.reversed();
                    self.increment[i] = self.config.fade_up();
                    step = Step::Bounce(self.direction);
                }
            }

            self.brightness[i] = level.wrapping_add_signed(self.increment[i]);
        }

        step
    }

    /// Neighbour of `channel` in the sweep direction, if there is one.
    fn next_channel(&self, channel: usize) -> Option<usize> {
        match self.direction {
            Direction::LowToHigh if channel + 1 < N => Some(channel + 1),
            Direction::HighToLow if channel > 0 => Some(channel - 1),
            _ => None,
        }
    }

    /// Last channel the eye reaches before bouncing.
    fn far_end(&self) -> usize {
        match self.direction {
            Direction::LowToHigh => N - 1,
            Direction::HighToLow => 0,
        }
    }

    pub fn brightness(&self) -> &[u8; N] {
        &self.brightness
    }

    pub fn increments(&self) -> &[i8; N] {
        &self.increment
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }
}
