//! # Cylon Eye Core
//!
//! Board-independent pieces of the cylon-eye LED firmware:
//!
//! - [`soft_pwm`]: a tick-driven software PWM engine that turns one 8-bit
//!   brightness per channel into a duty-cycled [`OutputWord`].
//! - [`chase`]: the per-frame state machine that sweeps a fading "eye" back
//!   and forth along the strip.
//! - [`shared`]: the snapshot buffer the two contexts hand brightness through.
//! - [`mode`]: compile-time display mode selection on top of the chase.
//!
//! Nothing here touches hardware; the firmware supplies the tick, the delay
//! and an [`OutputPort`].
#![cfg_attr(not(test), no_std)]

pub mod chase;
pub mod config;
pub mod mode;
pub mod output;
pub mod shared;
pub mod soft_pwm;

pub use chase::{Chase, Direction, Step};
pub use config::{ChaseConfig, ConfigError, Timing};
pub use mode::{Animator, Frame, Mode};
pub use output::{OutputPort, OutputWord};
pub use shared::SharedLevels;
pub use soft_pwm::{pwm_tick_period, refresh_rate, SoftPwm};
