//! Timing for the simulator loop.
//!
//! These use `std::time` which is not available in `no_std` environments, so
//! they are defined here rather than in the common crate.

use std::time::{Duration, Instant};

use pong_common::TickPeriod;
use pong_common::config::SAMPLE_PERIOD_MS;

/// Minimum time between two window redraws (~50 FPS).
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between button samples.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(SAMPLE_PERIOD_MS as u64);

#[inline]
pub fn to_duration(period: TickPeriod) -> Duration { Duration::from_millis(u64::from(period.as_millis())) }

/// Periodic deadline on the wall clock.
///
/// Advances by whole periods to keep a steady rhythm. When it falls more than
/// a period behind (window drag, win animation) it restarts from `now`
/// instead of firing a burst of catch-up events.
pub struct Deadline {
    next: Instant,
}

impl Deadline {
    pub fn new(
        now: Instant,
        period: Duration,
    ) -> Self {
        Self { next: now + period }
    }

    /// Returns true once per elapsed deadline and schedules the next one.
    pub fn poll(
        &mut self,
        now: Instant,
        period: Duration,
    ) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.advance(now, period);
        true
    }

    #[inline]
    pub fn is_due(
        &self,
        now: Instant,
    ) -> bool {
        now >= self.next
    }

    /// Schedule the next deadline one `period` after the current one.
    pub fn advance(
        &mut self,
        now: Instant,
        period: Duration,
    ) {
        self.next += period;
        if self.next <= now {
            self.next = now + period;
        }
    }

    #[inline]
    pub fn next(&self) -> Instant { self.next }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn test_not_due_before_deadline() {
        let start = Instant::now();
        let mut deadline = Deadline::new(start, PERIOD);
        assert!(!deadline.poll(start, PERIOD));
        assert!(!deadline.poll(start + Duration::from_millis(99), PERIOD));
    }

    #[test]
    fn test_due_once_per_period() {
        let start = Instant::now();
        let mut deadline = Deadline::new(start, PERIOD);
        let late = start + Duration::from_millis(130);
        assert!(deadline.poll(late, PERIOD));
        assert!(!deadline.poll(late, PERIOD));
        // Rhythm kept: next deadline at 200 ms, not 230 ms
        assert_eq!(deadline.next(), start + 2 * PERIOD);
    }

    #[test]
    fn test_resyncs_when_far_behind() {
        let start = Instant::now();
        let mut deadline = Deadline::new(start, PERIOD);
        let stalled = start + Duration::from_millis(1_000);
        assert!(deadline.poll(stalled, PERIOD));
        assert!(!deadline.poll(stalled, PERIOD));
        assert_eq!(deadline.next(), stalled + PERIOD);
    }

    #[test]
    fn test_period_change_applies_to_next_deadline() {
        let start = Instant::now();
        let mut deadline = Deadline::new(start, PERIOD);
        let faster = Duration::from_millis(50);
        assert!(deadline.poll(start + PERIOD, faster));
        assert_eq!(deadline.next(), start + PERIOD + faster);
    }

    #[test]
    fn test_advance_after_slow_step() {
        let start = Instant::now();
        let mut deadline = Deadline::new(start, PERIOD);
        assert!(deadline.is_due(start + PERIOD));
        // The step itself took longer than a period
        deadline.advance(start + Duration::from_millis(450), PERIOD);
        assert!(!deadline.is_due(start + Duration::from_millis(450)));
        assert_eq!(deadline.next(), start + Duration::from_millis(550));
    }

    #[test]
    fn test_tick_period_conversion() {
        assert_eq!(to_duration(TickPeriod::from_millis(150)), Duration::from_millis(150));
    }
}
