//! Display modes and frame pacing.
//!
//! The firmware picks one [`Mode`] at build time. [`Animator`] turns that mode
//! into a brightness frame plus the pauses around it.
use crate::chase::{Chase, Direction, Step};
use crate::config::{ChaseConfig, ConfigError, Timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The sweeping, fading eye.
    Cylon,
    /// All channels blink together, slowly.
    SlowBlink,
    /// All channels blink together, quickly.
    FastBlink,
    /// All channels steady at peak brightness.
    On,
    /// All channels dark.
    Sleep,
}

/// Outcome of one [`Animator::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// How long to keep showing the previous frame before this one.
    pub hold_ms: u64,
    /// How long to wait after showing this frame.
    pub pause_ms: u64,
    /// Set when the eye bounced off an end of the strip this frame.
    pub bounce: Option<Direction>,
}

pub struct Animator<const N: usize> {
    mode: Mode,
    timing: Timing,
    chase: Chase<N>,
    /// Brightness of the non-chase modes.
    levels: [u8; N],
}

impl<const N: usize> Animator<N> {
    pub fn new(mode: Mode, config: ChaseConfig, timing: Timing) -> Result<Self, ConfigError> {
        let chase = Chase::new(config)?;
        let levels = match mode {
            Mode::On => [config.max_bright; N],
            _ => [0; N],
        };
        Ok(Self {
            mode,
            timing,
            chase,
            levels,
        })
    }

    /// Compute the next frame.
    pub fn advance(&mut self) -> Frame {
        let Timing {
            fade_delay_ms,
            cycle_delay_ms,
            slow_blink_ms,
            fast_blink_ms,
            idle_ms,
        } = self.timing;

        match self.mode {
            Mode::Cylon => match self.chase.step() {
                Step::Fade => Frame {
                    hold_ms: 0,
                    pause_ms: fade_delay_ms,
                    bounce: None,
                },
                // The strip is dark when the eye bounces; stay dark for the
                // cycle pause before the return sweep lights up.
                Step::Bounce(direction) => Frame {
                    hold_ms: cycle_delay_ms,
                    pause_ms: fade_delay_ms,
                    bounce: Some(direction),
                },
            },
            Mode::SlowBlink => self.toggle(slow_blink_ms),
            Mode::FastBlink => self.toggle(fast_blink_ms),
            Mode::On | Mode::Sleep => Frame {
                hold_ms: 0,
                pause_ms: idle_ms,
                bounce: None,
            },
        }
    }

    fn toggle(&mut self, pause_ms: u64) -> Frame {
        let peak = self.chase.config().max_bright;
        let next = if self.levels.first() == Some(&peak) { 0 } else { peak };
        self.levels = [next; N];
        Frame {
            hold_ms: 0,
            pause_ms,
            bounce: None,
        }
    }

    /// Brightness to publish for the current frame.
    pub fn levels(&self) -> &[u8; N] {
        match self.mode {
            Mode::Cylon => self.chase.brightness(),
            _ => &self.levels,
        }
    }

    /// Mode chosen at construction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Frame pacing in use.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(mode: Mode) -> Animator<4> {
        Animator::new(mode, ChaseConfig::DEFAULT, Timing::DEFAULT).unwrap()
    }

    #[test]
    fn cylon_paces_frames_and_pauses_on_bounce() {
        let mut anim = animator(Mode::Cylon);
        let first = anim.advance();
        assert_eq!(first.hold_ms, 0);
        assert_eq!(first.pause_ms, Timing::DEFAULT.fade_delay_ms);
        assert_eq!(anim.levels(), &[2, 0, 0, 0]);

        let bounce = loop {
            let frame = anim.advance();
            if frame.bounce.is_some() {
                break frame;
            }
        };
        assert_eq!(bounce.bounce, Some(Direction::HighToLow));
        assert_eq!(bounce.hold_ms, Timing::DEFAULT.cycle_delay_ms);
        assert_eq!(bounce.pause_ms, Timing::DEFAULT.fade_delay_ms);
        assert_eq!(anim.levels(), &[0, 0, 0, 2]);
    }

    #[test]
    fn reports_mode_and_timing() {
        let timing = Timing {
            fade_delay_ms: 20,
            ..Timing::DEFAULT
        };
        let anim = Animator::<4>::new(Mode::SlowBlink, ChaseConfig::DEFAULT, timing).unwrap();
        assert_eq!(anim.mode(), Mode::SlowBlink);
        assert_eq!(anim.timing().fade_delay_ms, 20);
    }

    #[test]
    fn blink_alternates() {
        let mut anim = animator(Mode::FastBlink);
        assert_eq!(anim.levels(), &[0; 4]);
        let frame = anim.advance();
        assert_eq!(frame.pause_ms, Timing::DEFAULT.fast_blink_ms);
        assert_eq!(anim.levels(), &[254; 4]);
        anim.advance();
        assert_eq!(anim.levels(), &[0; 4]);

        let mut anim = animator(Mode::SlowBlink);
        assert_eq!(anim.advance().pause_ms, Timing::DEFAULT.slow_blink_ms);
        assert_eq!(anim.levels(), &[254; 4]);
    }

    #[test]
    fn steady_modes_hold() {
        let mut on = animator(Mode::On);
        let mut sleep = animator(Mode::Sleep);
        for _ in 0..3 {
            assert_eq!(on.advance().pause_ms, Timing::DEFAULT.idle_ms);
            assert_eq!(on.levels(), &[254; 4]);
            sleep.advance();
            assert_eq!(sleep.levels(), &[0; 4]);
        }
    }

    #[test]
    fn bad_config_rejected_in_every_mode() {
        let config = ChaseConfig {
            start_threshold: 254,
            ..ChaseConfig::DEFAULT
        };
        let result = Animator::<4>::new(Mode::On, config, Timing::DEFAULT);
        assert_eq!(result.err(), Some(ConfigError::ThresholdUnreachable));
    }
}
