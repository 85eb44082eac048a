//! Output pin levels packed one bit per channel.

/// Pin levels for up to [`OutputWord::MAX_CHANNELS`] channels. Bit `i` set
/// means channel `i` is driven high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputWord(u32);

impl OutputWord {
    pub const MAX_CHANNELS: usize = u32::BITS as usize;

    /// Every channel low.
    pub const fn all_low() -> Self {
        Self(0)
    }

    /// The first `channels` channels high, everything above them low.
    pub const fn all_high(channels: usize) -> Self {
        if channels >= Self::MAX_CHANNELS {
            Self(u32::MAX)
        } else {
            Self((1 << channels) - 1)
        }
    }

    pub fn set_high(&mut self, channel: usize) {
        self.0 |= Self::bit(channel);
    }

    pub fn set_low(&mut self, channel: usize) {
        self.0 &= !Self::bit(channel);
    }

    pub const fn is_high(self, channel: usize) -> bool {
        self.0 & Self::bit(channel) != 0
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    const fn bit(channel: usize) -> u32 {
        debug_assert!(channel < Self::MAX_CHANNELS);
        1 << channel
    }
}

/// Something that can drive all channel outputs at once from an
/// [`OutputWord`], such as a GPIO port or an array of pins.
pub trait OutputPort {
    fn write(&mut self, word: OutputWord);
}
