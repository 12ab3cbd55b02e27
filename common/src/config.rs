//! Game timing configuration.
//!
//! Periods are stored in milliseconds. Every value that reaches the timer goes
//! through [`TickPeriod::from_millis`], which clamps it into a safe range, so a
//! zero or runaway period can never be armed.

// =============================================================================
// Game Speed
// =============================================================================

/// Tick period at the start of every serve (slowest speed).
pub const INITIAL_TICK_MS: u32 = 150;

/// Fastest allowed tick period. Hits never push the speed past this floor.
pub const MIN_TICK_MS: u32 = 50;

/// Amount the tick period shrinks on every successful hit.
pub const TICK_STEP_MS: u32 = 25;

/// Shortest period the timer is ever armed with.
pub const SAFE_MIN_TICK_MS: u32 = 1;

/// Longest period the timer is ever armed with.
pub const SAFE_MAX_TICK_MS: u32 = 10_000;

// =============================================================================
// Rules
// =============================================================================

/// Number of ticks the defender has to press once the ball sits on their end.
/// Counted in ticks, so the window shrinks in wall-clock time as the game speeds up.
pub const HIT_WINDOW_TICKS: u8 = 3;

/// Points needed to win a match.
pub const WINNING_SCORE: u8 = 3;

/// Number of LEDs on the playfield.
pub const TRACK_LEN: usize = 8;

// =============================================================================
// Input Sampling
// =============================================================================

/// Width of the debounce history register in samples.
pub const DEBOUNCE_BITS: u32 = 8;

/// Interval between debounce samples.
/// 8 samples x 5 ms = 40 ms settle time, above typical 5-20 ms contact bounce.
pub const SAMPLE_PERIOD_MS: u32 = 5;

// =============================================================================
// Win Animation
// =============================================================================

/// How many times the winner's score LEDs blink.
pub const WIN_FLASH_COUNT: u8 = 3;

/// On (and off) time of each winner blink.
pub const WIN_FLASH_HALF_PERIOD_MS: u32 = 150;

// =============================================================================
// Tick Period
// =============================================================================

/// Period of the game tick, always within `SAFE_MIN_TICK_MS..=SAFE_MAX_TICK_MS`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TickPeriod(u32);

impl TickPeriod {
    /// Build a period, clamping out-of-range values.
    pub const fn from_millis(ms: u32) -> Self {
        if ms < SAFE_MIN_TICK_MS {
            Self(SAFE_MIN_TICK_MS)
        } else if ms > SAFE_MAX_TICK_MS {
            Self(SAFE_MAX_TICK_MS)
        } else {
            Self(ms)
        }
    }

    #[inline]
    pub const fn as_millis(self) -> u32 { self.0 }

    /// Shorten the period by `step_ms`, never going below `floor`.
    pub const fn faster(
        self,
        step_ms: u32,
        floor: Self,
    ) -> Self {
        let ms = self.0.saturating_sub(step_ms);
        if ms < floor.0 { floor } else { Self(ms) }
    }
}

// =============================================================================
// Game Configuration
// =============================================================================

/// Tunable game parameters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameConfig {
    /// Period armed at every serve.
    pub initial_period: TickPeriod,
    /// Speed floor reached after enough hits.
    pub min_period: TickPeriod,
    /// Period reduction per hit.
    pub period_step_ms: u32,
    /// Hit-zone length in ticks.
    pub hit_window_ticks: u8,
}

impl GameConfig {
    /// Configuration built from the crate constants.
    pub const fn new() -> Self {
        Self {
            initial_period: TickPeriod::from_millis(INITIAL_TICK_MS),
            min_period: TickPeriod::from_millis(MIN_TICK_MS),
            period_step_ms: TICK_STEP_MS,
            hit_window_ticks: HIT_WINDOW_TICKS,
        }
        .sanitized()
    }

    /// Clamp fields into a consistent configuration.
    ///
    /// The floor never exceeds the initial period, the step is at least 1 ms
    /// and the hit window is at least one tick.
    pub const fn sanitized(self) -> Self {
        let min_period = if self.min_period.0 > self.initial_period.0 {
            self.initial_period
        } else {
            self.min_period
        };
        Self {
            initial_period: self.initial_period,
            min_period,
            period_step_ms: if self.period_step_ms == 0 { 1 } else { self.period_step_ms },
            hit_window_ticks: if self.hit_window_ticks == 0 { 1 } else { self.hit_window_ticks },
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_clamps_zero() {
        assert_eq!(TickPeriod::from_millis(0).as_millis(), SAFE_MIN_TICK_MS);
    }

    #[test]
    fn test_period_clamps_overflow() {
        assert_eq!(TickPeriod::from_millis(u32::MAX).as_millis(), SAFE_MAX_TICK_MS);
    }

    #[test]
    fn test_faster_steps_down() {
        let p = TickPeriod::from_millis(150);
        let floor = TickPeriod::from_millis(50);
        assert_eq!(p.faster(25, floor).as_millis(), 125);
    }

    #[test]
    fn test_faster_stops_at_floor() {
        let floor = TickPeriod::from_millis(50);
        let p = TickPeriod::from_millis(60).faster(25, floor);
        assert_eq!(p, floor);
        assert_eq!(p.faster(25, floor), floor);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_period.as_millis(), INITIAL_TICK_MS);
        assert_eq!(config.min_period.as_millis(), MIN_TICK_MS);
        assert_eq!(config.hit_window_ticks, HIT_WINDOW_TICKS);
    }

    #[test]
    fn test_sanitized_fixes_inverted_floor() {
        let config = GameConfig {
            initial_period: TickPeriod::from_millis(100),
            min_period: TickPeriod::from_millis(400),
            period_step_ms: 0,
            hit_window_ticks: 0,
        }
        .sanitized();
        assert_eq!(config.min_period.as_millis(), 100);
        assert_eq!(config.period_step_ms, 1);
        assert_eq!(config.hit_window_ticks, 1);
    }
}
