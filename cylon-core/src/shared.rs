//! Brightness handoff between the animation loop and the PWM tick.
//!
//! The animation publishes a whole frame at a time and the PWM engine takes a
//! whole-frame snapshot, each inside one short critical section. The engine
//! therefore always latches a complete frame, never half of one.
use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Latest published brightness of every channel.
pub struct SharedLevels<const N: usize>(Mutex<CriticalSectionRawMutex, Cell<[u8; N]>>);

impl<const N: usize> SharedLevels<N> {
    /// All channels off. `const` so the buffer can live in a `static`.
    pub const fn new() -> Self {
        Self(Mutex::new(Cell::new([0; N])))
    }

    /// Replace the published frame. Only the animation side calls this.
    pub fn publish(&self, levels: &[u8; N]) {
        self.0.lock(|cell| cell.set(*levels));
    }

    /// Copy out the most recently published frame.
    pub fn snapshot(&self) -> [u8; N] {
        self.0.lock(|cell| cell.get())
    }
}

impl<const N: usize> Default for SharedLevels<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LEVELS: SharedLevels<3> = SharedLevels::new();

    #[test]
    fn starts_dark() {
        let levels = SharedLevels::<4>::new();
        assert_eq!(levels.snapshot(), [0; 4]);
    }

    #[test]
    fn snapshot_sees_last_publish() {
        LEVELS.publish(&[1, 2, 3]);
        LEVELS.publish(&[4, 5, 6]);
        assert_eq!(LEVELS.snapshot(), [4, 5, 6]);
        assert_eq!(LEVELS.snapshot(), [4, 5, 6]);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let levels = SharedLevels::<2>::new();
        let mut frame = [10, 20];
        levels.publish(&frame);
        frame[0] = 99;
        assert_eq!(levels.snapshot(), [10, 20]);
    }
}
