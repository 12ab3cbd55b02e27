//! Display mode selection.
//!
//! The mode button switches between the two modes on release.
//!
//! # Modes
//!
//! - [`DisplayMode::Play`]: The game engine drives the LEDs on every tick
//! - [`DisplayMode::Flash`]: Paddle releases walk a single LED with wraparound

/// Which logic owns the playfield LEDs.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DisplayMode {
    /// Pong game. Mode indicator LED on.
    #[default]
    Play,

    /// Manual LED shifter. Game paused, mode indicator LED off.
    Flash,
}

impl DisplayMode {
    /// Switch to the other mode.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Play => Self::Flash,
            Self::Flash => Self::Play,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Flash => "Flash",
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
    fn test_mode_default() {
        assert_eq!(DisplayMode::default(), DisplayMode::Play);
    }

    #[test]
    fn test_mode_toggle_cycle() {
        let mode = DisplayMode::Play;
        let mode = mode.toggle(); // -> Flash
        assert_eq!(mode, DisplayMode::Flash);
        let mode = mode.toggle(); // -> Play
        assert_eq!(mode, DisplayMode::Play);
    }
}
