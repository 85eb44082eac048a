//! Compile-time animation parameters.
use core::fmt;

/// Fade parameters shared by every channel of the chase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaseConfig {
    /// Brightness at which a channel turns around and starts fading out.
    pub max_bright: u8,
    /// Brightness a rising channel must reach before the next one starts.
    pub start_threshold: u8,
    /// Brightness change per frame while fading.
    pub fade_step: u8,
}

/// Reasons a [`ChaseConfig`] would freeze or break the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero step never moves any channel.
    ZeroStep,
    /// The step has to fit a signed 8-bit increment.
    StepTooLarge,
    /// A zero peak leaves nothing to fade.
    ZeroPeak,
    /// Channels would skip over the peak or over zero and never turn around.
    UnevenStep,
    /// Rising channels would never hand off to their neighbour.
    ThresholdUnreachable,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroStep => write!(f, "fade step must be nonzero"),
            ConfigError::StepTooLarge => write!(f, "fade step must be at most {}", i8::MAX),
            ConfigError::ZeroPeak => write!(f, "peak brightness must be nonzero"),
            ConfigError::UnevenStep => write!(f, "fade step must evenly divide peak brightness"),
            ConfigError::ThresholdUnreachable => {
                write!(f, "start threshold must be below peak brightness")
            }
        }
    }
}

impl ChaseConfig {
    /// Peak 254, hand off at a third of the way up, two steps per frame.
    pub const DEFAULT: Self = Self {
        max_bright: 254,
        start_threshold: 84,
        fade_step: 2,
    };

    /// Checks the parameters. Usable in a `const` assertion so a bad
    /// configuration fails the build instead of freezing the strip.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.fade_step > i8::MAX as u8 {
            return Err(ConfigError::StepTooLarge);
        }
        if self.max_bright == 0 {
            return Err(ConfigError::ZeroPeak);
        }
        if self.max_bright % self.fade_step != 0 {
            return Err(ConfigError::UnevenStep);
        }
        if self.start_threshold >= self.max_bright {
            return Err(ConfigError::ThresholdUnreachable);
        }
        Ok(())
    }

    /// Increment of a channel fading in.
    pub(crate) const fn fade_up(&self) -> i8 {
        self.fade_step as i8
    }

    /// Increment of a channel fading out.
    pub(crate) const fn fade_down(&self) -> i8 {
        -(self.fade_step as i8)
    }
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Frame pacing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause between animation frames; sets the fade speed.
    pub fade_delay_ms: u64,
    /// Extra pause when the eye bounces off an end of the strip.
    pub cycle_delay_ms: u64,
    /// Half period of the slow blink.
    pub slow_blink_ms: u64,
    /// Half period of the fast blink.
    pub fast_blink_ms: u64,
    /// Refresh interval of the steady modes.
    pub idle_ms: u64,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        fade_delay_ms: 10,
        cycle_delay_ms: 1550,
        slow_blink_ms: 1000,
        fast_blink_ms: 150,
        idle_ms: 1000,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
