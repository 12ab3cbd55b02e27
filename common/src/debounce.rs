//! Button debounce handling.
//!
//! Each button keeps a shift register of its most recent raw samples. A new
//! sample is shifted in on every sample tick; the debounced state only commits
//! once the whole register agrees (all 0 = pressed, all 1 = released). Any
//! mixed history keeps the previous state, so a single noisy sample can never
//! toggle a button.
//!
//! Settle time is `bits x sample period`. With the defaults (8 x 5 ms) that is
//! 40 ms, comfortably above mechanical bounce and below human reaction time.
//!
//! Edges are not stored by the filter. Callers compare consecutive debounced
//! values with an [`EdgeDetector`].

use crate::board::{Board, ButtonId};
use crate::config::DEBOUNCE_BITS;

// =============================================================================
// Debounced Level
// =============================================================================

/// Stable logical state of a button.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ButtonLevel {
    Pressed,
    #[default]
    Released,
}

impl ButtonLevel {
    #[inline]
    pub const fn is_pressed(self) -> bool { matches!(self, Self::Pressed) }
}

// =============================================================================
// Shift-Register Debouncer
// =============================================================================

/// Shift-register debounce filter for a single input line.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    history: u32,
    mask: u32,
    state: ButtonLevel,
}

impl Debouncer {
    /// Create a filter with a `bits`-wide history (clamped to 1..=32).
    ///
    /// The history is pre-filled to agree with `initial`, so the filter does
    /// not report a spurious change on the first samples.
    pub const fn new(
        bits: u32,
        initial: ButtonLevel,
    ) -> Self {
        let bits = if bits == 0 {
            1
        } else if bits > 32 {
            32
        } else {
            bits
        };
        let mask = if bits == 32 { u32::MAX } else { (1 << bits) - 1 };
        let history = match initial {
            ButtonLevel::Pressed => 0,
            ButtonLevel::Released => mask,
        };
        Self { history, mask, state: initial }
    }

    /// Shift in one raw sample (`true` = line high = released).
    pub fn sample(
        &mut self,
        raw_high: bool,
    ) -> ButtonLevel {
        self.history = ((self.history << 1) | u32::from(raw_high)) & self.mask;

        if self.history == 0 {
            self.state = ButtonLevel::Pressed;
        } else if self.history == self.mask {
            self.state = ButtonLevel::Released;
        }

        self.state
    }

    #[inline]
    pub const fn state(&self) -> ButtonLevel { self.state }

    /// Raw sample history, newest sample in bit 0.
    #[inline]
    pub const fn history(&self) -> u32 { self.history }
}

impl Default for Debouncer {
    fn default() -> Self { Self::new(DEBOUNCE_BITS, ButtonLevel::Released) }
}

// =============================================================================
// Edge Detection
// =============================================================================

/// Transition of a debounced level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Edge {
    /// Released -> Pressed.
    Press,
    /// Pressed -> Released.
    Release,
}

/// Compares consecutive debounced levels.
#[derive(Clone, Copy, Default, Debug)]
pub struct EdgeDetector {
    previous: ButtonLevel,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            previous: ButtonLevel::Released,
        }
    }

    /// Returns the edge between the last level seen and `level`, if any.
    pub fn update(
        &mut self,
        level: ButtonLevel,
    ) -> Option<Edge> {
        let edge = match (self.previous, level) {
            (ButtonLevel::Released, ButtonLevel::Pressed) => Some(Edge::Press),
            (ButtonLevel::Pressed, ButtonLevel::Released) => Some(Edge::Release),
            _ => None,
        };
        self.previous = level;
        edge
    }
}

// =============================================================================
// Button Bank
// =============================================================================

/// One raw sample of every input line (`true` = line high).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RawLevels {
    pub mode: bool,
    pub left: bool,
    pub right: bool,
}

impl RawLevels {
    /// All buttons released.
    pub const IDLE: Self = Self {
        mode: true,
        left: true,
        right: true,
    };

    /// Sample every line from the board, in fixed order Mode, Left, Right.
    pub fn read<B: Board + ?Sized>(board: &mut B) -> Self {
        Self {
            mode: board.read_raw_level(ButtonId::Mode),
            left: board.read_raw_level(ButtonId::Left),
            right: board.read_raw_level(ButtonId::Right),
        }
    }
}

/// Debounced level of every button after a sample.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ButtonLevels {
    pub mode: ButtonLevel,
    pub left: ButtonLevel,
    pub right: ButtonLevel,
}

/// Debouncers for the three buttons.
#[derive(Clone, Copy, Debug)]
pub struct ButtonBank {
    mode: Debouncer,
    left: Debouncer,
    right: Debouncer,
}

impl ButtonBank {
    /// Create a bank with `bits`-wide histories, all buttons released.
    pub const fn new(bits: u32) -> Self {
        Self {
            mode: Debouncer::new(bits, ButtonLevel::Released),
            left: Debouncer::new(bits, ButtonLevel::Released),
            right: Debouncer::new(bits, ButtonLevel::Released),
        }
    }

    /// Shift one raw sample into every debouncer.
    pub fn sample(
        &mut self,
        raw: RawLevels,
    ) -> ButtonLevels {
        ButtonLevels {
            mode: self.mode.sample(raw.mode),
            left: self.left.sample(raw.left),
            right: self.right.sample(raw.right),
        }
    }

    /// Current debounced levels without sampling.
    pub const fn levels(&self) -> ButtonLevels {
        ButtonLevels {
            mode: self.mode.state(),
            left: self.left.state(),
            right: self.right.state(),
        }
    }
}

impl Default for ButtonBank {
    fn default() -> Self { Self::new(DEBOUNCE_BITS) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a sequence of raw samples, returning the level after each one.
    fn feed(
        debouncer: &mut Debouncer,
        samples: &[bool],
    ) -> Vec<ButtonLevel> {
        samples.iter().map(|&s| debouncer.sample(s)).collect()
    }

    #[test]
    fn test_new_is_released() {
        let d = Debouncer::default();
        assert_eq!(d.state(), ButtonLevel::Released);
        assert_eq!(d.history(), 0xFF);
    }

    #[test]
    fn test_press_commits_after_full_history() {
        let mut d = Debouncer::new(4, ButtonLevel::Released);
        let levels = feed(&mut d, &[false, false, false, false]);
        assert_eq!(
            levels,
            [
                ButtonLevel::Released,
                ButtonLevel::Released,
                ButtonLevel::Released,
                ButtonLevel::Pressed
            ]
        );
    }

    #[test]
    fn test_release_commits_after_full_history() {
        let mut d = Debouncer::new(4, ButtonLevel::Pressed);
        feed(&mut d, &[true, true, true]);
        assert_eq!(d.state(), ButtonLevel::Pressed);
        assert_eq!(d.sample(true), ButtonLevel::Released);
    }

    #[test]
    fn test_single_glitch_never_toggles() {
        let mut d = Debouncer::new(8, ButtonLevel::Released);
        // One low sample in a stream of highs
        for i in 0..32 {
            assert_eq!(d.sample(i != 10), ButtonLevel::Released);
        }

        let mut d = Debouncer::new(8, ButtonLevel::Pressed);
        // One high sample in a stream of lows
        for i in 0..32 {
            assert_eq!(d.sample(i == 10), ButtonLevel::Pressed);
        }
    }

    #[test]
    fn test_bouncing_press_holds_previous_state() {
        let mut d = Debouncer::new(8, ButtonLevel::Released);
        // Contact bounce: alternating samples while the button settles
        for &s in &[false, true, false, true, false, false, false, true] {
            assert_eq!(d.sample(s), ButtonLevel::Released);
        }
        // Last bounce was high: 8 consecutive lows needed from here
        for _ in 0..7 {
            assert_eq!(d.sample(false), ButtonLevel::Released);
        }
        assert_eq!(d.sample(false), ButtonLevel::Pressed);
    }

    #[test]
    fn test_state_only_changes_on_uniform_history() {
        // Every 8-bit history, from both starting states. The pre-filled
        // history means no partial prefix can commit the opposite state.
        for pattern in 0u32..=0xFF {
            for initial in [ButtonLevel::Pressed, ButtonLevel::Released] {
                let mut d = Debouncer::new(8, initial);
                for bit in (0..8).rev() {
                    d.sample((pattern >> bit) & 1 == 1);
                }
                let expected = match pattern {
                    0x00 => ButtonLevel::Pressed,
                    0xFF => ButtonLevel::Released,
                    _ => initial,
                };
                assert_eq!(d.state(), expected, "pattern {pattern:#04x} from {initial:?}");
                assert_eq!(d.history(), pattern);
            }
        }
    }

    #[test]
    fn test_bits_clamped() {
        let d = Debouncer::new(0, ButtonLevel::Released);
        assert_eq!(d.history(), 0b1);

        let mut d = Debouncer::new(64, ButtonLevel::Released);
        assert_eq!(d.history(), u32::MAX);
        for _ in 0..31 {
            assert_eq!(d.sample(false), ButtonLevel::Released);
        }
        assert_eq!(d.sample(false), ButtonLevel::Pressed);
    }

    #[test]
    fn test_edge_detector() {
        let mut edges = EdgeDetector::new();
        assert_eq!(edges.update(ButtonLevel::Released), None);
        assert_eq!(edges.update(ButtonLevel::Pressed), Some(Edge::Press));
        assert_eq!(edges.update(ButtonLevel::Pressed), None);
        assert_eq!(edges.update(ButtonLevel::Released), Some(Edge::Release));
        assert_eq!(edges.update(ButtonLevel::Released), None);
    }

    #[test]
    fn test_bank_samples_each_line() {
        let mut bank = ButtonBank::new(2);
        let raw = RawLevels {
            mode: true,
            left: false,
            right: true,
        };
        bank.sample(raw);
        let levels = bank.sample(raw);
        assert_eq!(levels.left, ButtonLevel::Pressed);
        assert_eq!(levels.mode, ButtonLevel::Released);
        assert_eq!(levels.right, ButtonLevel::Released);
        assert_eq!(bank.levels(), levels);
    }
}
