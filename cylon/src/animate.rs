//! Main animation loop: steps the animator, publishes each frame to the PWM
//! driver and paces frames with the embassy timer.
use crate::*;

pub struct Animate {
    animator: Animator<CHANNELS>,
}

impl Animate {
    pub fn new(animator: Animator<CHANNELS>) -> Self {
        Self { animator }
    }

    /// Runs the animation forever.
    ///
    /// A bounce holds the previous, dark frame for the cycle pause before the
    /// return sweep is published.
    pub async fn run(mut self) -> ! {
        LEVELS.publish(self.animator.levels());
        loop {
            let frame = self.animator.advance();
            if let Some(direction) = frame.bounce {
                rprintln!("cylon: bounce, now {:?}", direction);
            }
            if frame.hold_ms > 0 {
                Timer::after_millis(frame.hold_ms).await;
            }
            LEVELS.publish(self.animator.levels());
            Timer::after_millis(frame.pause_ms).await;
        }
    }
}
