//! The two players and their ends of the track.
//!
//! Player A defends the leftmost LED (`0x01`) with the left paddle,
//! player B defends the rightmost LED (`0x80`) with the right paddle.

use crate::board::ButtonId;

/// One of the two players.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Player {
    /// Left end, left paddle. Opens the first match.
    #[default]
    A,
    /// Right end, right paddle.
    B,
}

impl Player {
    /// Both players in fixed evaluation order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// One-hot LED pattern of this player's end of the track.
    #[inline]
    pub const fn end_pattern(self) -> u8 {
        match self {
            Self::A => 0x01,
            Self::B => 0x80,
        }
    }

    /// The paddle button this player presses.
    #[inline]
    pub const fn paddle(self) -> ButtonId {
        match self {
            Self::A => ButtonId::Left,
            Self::B => ButtonId::Right,
        }
    }

    /// Array index for per-player storage.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
        assert_eq!(Player::A.opponent().opponent(), Player::A);
    }

    #[test]
    fn test_end_patterns_are_opposite_ends() {
        assert_eq!(Player::A.end_pattern(), 0x01);
        assert_eq!(Player::B.end_pattern(), 0x80);
    }

    #[test]
    fn test_paddles() {
        assert_eq!(Player::A.paddle(), ButtonId::Left);
        assert_eq!(Player::B.paddle(), ButtonId::Right);
    }
}
