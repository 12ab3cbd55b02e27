//! Hardware collaborator interface.
//!
//! The game never touches pins or timers directly. Each platform (Pico 2
//! GPIO, desktop simulator, test mock) implements [`Board`] and the engine
//! drives it.

use crate::config::{TickPeriod, WINNING_SCORE};
use crate::mode::DisplayMode;
use crate::player::Player;

/// Physical input lines read by the core.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonId {
    /// Player A's paddle.
    Left,
    /// Player B's paddle.
    Right,
    /// Play/Flash toggle.
    Mode,
}

/// Primitives the game consumes from the platform.
pub trait Board {
    /// Instantaneous level of an input line. Buttons are active-low:
    /// `true` (line high) means released.
    fn read_raw_level(
        &mut self,
        button: ButtonId,
    ) -> bool;

    /// Show a pattern on the 8 playfield LEDs (bit 0 = player A's end).
    fn set_led_pattern(
        &mut self,
        pattern: u8,
    );

    /// Light `score` (0..=3) indicator LEDs for a player.
    fn set_score_display(
        &mut self,
        player: Player,
        score: u8,
    );

    /// Blink the winner's score LEDs. Blocks until the animation is done.
    fn flash_winner_indicator(
        &mut self,
        player: Player,
    );

    /// Re-arm the game tick. Takes effect from the next period.
    fn configure_periodic_tick(
        &mut self,
        period: TickPeriod,
    );

    /// Show the current display mode on the indicator LED.
    fn set_mode_indicator(
        &mut self,
        mode: DisplayMode,
    );
}

/// Bit mask lighting `score` indicator LEDs, saturating at [`WINNING_SCORE`].
///
/// ```
/// assert_eq!(pong_common::score_mask(0), 0b000);
/// assert_eq!(pong_common::score_mask(2), 0b011);
/// ```
#[inline]
pub const fn score_mask(score: u8) -> u8 {
    let lit = if score > WINNING_SCORE { WINNING_SCORE } else { score };
    ((1u16 << lit) - 1) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_mask() {
        assert_eq!(score_mask(0), 0b000);
        assert_eq!(score_mask(1), 0b001);
        assert_eq!(score_mask(2), 0b011);
        assert_eq!(score_mask(3), 0b111);
    }

    #[test]
    fn test_score_mask_saturates() {
        assert_eq!(score_mask(200), 0b111);
    }
}
