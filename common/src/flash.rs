//! Flash mode LED shifter.
//!
//! While the game is paused in flash mode, each paddle release walks a single
//! lit LED one position. Walking off either end wraps around to the other.

use crate::board::ButtonId;

/// Pattern shown when flash mode starts.
pub const FLASH_START_PATTERN: u8 = 0x01;

/// One-hot cyclic shift register driven by paddle releases.
#[derive(Clone, Copy, Debug)]
pub struct FlashCycler {
    pattern: u8,
}

impl FlashCycler {
    pub const fn new() -> Self {
        Self {
            pattern: FLASH_START_PATTERN,
        }
    }

    /// Back to the leftmost LED.
    #[inline]
    pub fn reset(&mut self) { self.pattern = FLASH_START_PATTERN; }

    #[inline]
    pub const fn pattern(&self) -> u8 { self.pattern }

    /// Shift on a button release and return the new pattern.
    ///
    /// Left moves toward bit 7 (`0x80` wraps to `0x01`), right moves toward
    /// bit 0 (`0x01` wraps to `0x80`). The mode button leaves it unchanged.
    pub fn on_release(
        &mut self,
        button: ButtonId,
    ) -> u8 {
        if self.pattern.count_ones() != 1 {
            self.pattern = FLASH_START_PATTERN;
        }
        self.pattern = match button {
            ButtonId::Left => self.pattern.rotate_left(1),
            ButtonId::Right => self.pattern.rotate_right(1),
            ButtonId::Mode => self.pattern,
        };
        self.pattern
    }
}

impl Default for FlashCycler {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
