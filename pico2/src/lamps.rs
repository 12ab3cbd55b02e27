//! LED bank wiring.
//!
//! # Pin Map
//!
//! | Function          | GPIO      | Notes                       |
//! |-------------------|-----------|-----------------------------|
//! | Track LED 0..7    | GP2..GP9  | LED 0 = player A's end      |
//! | Score A bit 0..2  | GP10..12  | Unary (thermometer) display |
//! | Score B bit 0..2  | GP13..15  | Unary (thermometer) display |
//! | Left paddle       | GP16      | Active low, pull-up         |
//! | Right paddle      | GP17      | Active low, pull-up         |
//! | Mode button       | GP18      | Active low, pull-up         |
//! | Mode indicator    | GP25      | On-board LED, lit in Play   |
//!
//! All LEDs are active high.

use pong_common::config::TRACK_LEN;
use pong_common::score_mask;

/// LEDs on the playfield.
pub const TRACK_LEDS: usize = TRACK_LEN;

/// LEDs per score display.
pub const SCORE_LEDS: usize = 3;

/// Expand the low `N` bits of `mask` into per-LED on/off levels.
///
/// Index 0 is bit 0.
pub const fn lamp_levels<const N: usize>(mask: u8) -> [bool; N] {
    let mut levels = [false; N];
    let mut i = 0;
    while i < N && i < 8 {
        levels[i] = mask & (1 << i) != 0;
        i += 1;
    }
    levels
}

/// Track LED levels for a ball pattern.
#[inline]
pub const fn track_levels(pattern: u8) -> [bool; TRACK_LEDS] { lamp_levels(pattern) }

/// Score LED levels for a score (saturates at three lit LEDs).
#[inline]
pub const fn score_levels(score: u8) -> [bool; SCORE_LEDS] { lamp_levels(score_mask(score)) }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_levels_one_hot() {
        for i in 0..TRACK_LEDS {
            let levels = track_levels(1 << i);
            assert_eq!(levels.iter().filter(|&&on| on).count(), 1);
            assert!(levels[i]);
        }
    }

    #[test]
    fn test_track_levels_ends() {
        assert_eq!(track_levels(0x01), [true, false, false, false, false, false, false, false]);
        assert_eq!(track_levels(0x80), [false, false, false, false, false, false, false, true]);
    }

    #[test]
    fn test_track_covers_whole_track() {
        assert_eq!(TRACK_LEDS, TRACK_LEN);
        let far_end = track_levels(1 << (TRACK_LEN - 1));
        assert!(far_end[TRACK_LEDS - 1]);
    }

    #[test]
    fn test_score_levels() {
        assert_eq!(score_levels(0), [false, false, false]);
        assert_eq!(score_levels(1), [true, false, false]);
        assert_eq!(score_levels(2), [true, true, false]);
        assert_eq!(score_levels(3), [true, true, true]);
    }

    #[test]
    fn test_score_levels_saturate() {
        assert_eq!(score_levels(7), [true, true, true]);
        assert_eq!(score_levels(u8::MAX), [true, true, true]);
    }

    #[test]
    fn test_lamp_levels_ignores_high_bits() {
        let levels: [bool; 2] = lamp_levels(0b1111_1110);
        assert_eq!(levels, [false, true]);
    }
}
