//! Game events and the event log.
//!
//! The core never logs by itself. Every step returns the [`Events`] it
//! produced and the platform decides how to report them: `defmt` on the
//! Pico 2, stdout plus an on-screen [`EventLog`] in the simulator.

use core::fmt::{self, Write};

use heapless::{Deque, String, Vec};

use crate::mode::DisplayMode;
use crate::player::Player;

/// Maximum number of events a single step can produce.
pub const MAX_EVENTS_PER_STEP: usize = 8;

/// Events returned by one step of the game.
pub type Events = Vec<GameEvent, MAX_EVENTS_PER_STEP>;

/// Something worth reporting happened.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    /// The server pressed and the ball is on its way.
    Served { server: Player },
    /// The defender returned the ball inside the hit zone.
    Returned { by: Player },
    /// The tick period changed.
    SpeedChanged { period_ms: u32 },
    /// A point was scored after a missed defense.
    PointScored { scorer: Player, score: u8 },
    /// The ball is parked at a new server's end.
    ServeReady { server: Player },
    /// A player reached the winning score. Scores reset.
    MatchWon { winner: Player },
    /// The mode button switched modes.
    ModeChanged { mode: DisplayMode },
    /// A paddle release moved the flash-mode LED.
    FlashMoved { pattern: u8 },
    /// An inconsistent state was found and the game was reset to serve.
    InvalidStateReset,
}

impl fmt::Display for GameEvent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match *self {
            Self::Served { server } => write!(f, "Serve by {}", server.name()),
            Self::Returned { by } => write!(f, "Hit by {}", by.name()),
            Self::SpeedChanged { period_ms } => write!(f, "Tick {} ms", period_ms),
            Self::PointScored { scorer, score } => write!(f, "Point {}: {}", scorer.name(), score),
            Self::ServeReady { server } => write!(f, "{} to serve", server.name()),
            Self::MatchWon { winner } => write!(f, "{} wins!", winner.name()),
            Self::ModeChanged { mode } => write!(f, "Mode: {}", mode.name()),
            Self::FlashMoved { pattern } => write!(f, "Flash {:#04x}", pattern),
            Self::InvalidStateReset => f.write_str("State reset"),
        }
    }
}

/// Append an event to a step's event list.
///
/// The list is sized for the longest step, so overflow is dropped silently.
#[inline]
pub(crate) fn record(
    events: &mut Events,
    event: GameEvent,
) {
    events.push(event).ok();
}

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Maximum number of lines kept in the log.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 32;

/// Ring buffer of recent event descriptions.
///
/// Stores the last `LOG_BUFFER_SIZE` lines. Old lines are dropped when full.
pub struct EventLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Format and push an event. Text past `LOG_LINE_LENGTH` is cut.
    pub fn push(
        &mut self,
        event: &GameEvent,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        // A full line reports an error, the truncated text is kept
        write!(TruncatingWriter(&mut line), "{event}").ok();

        self.buffer.push_back(line).ok();
    }

    /// Iterate over log lines (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

/// Writes as many characters as fit, instead of dropping a whole fragment.
struct TruncatingWriter<'a>(&'a mut String<LOG_LINE_LENGTH>);

impl Write for TruncatingWriter<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            self.0.push(c).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        assert_eq!(GameEvent::Served { server: Player::A }.to_string(), "Serve by A");
        assert_eq!(
            GameEvent::PointScored {
                scorer: Player::B,
                score: 2
            }
            .to_string(),
            "Point B: 2"
        );
        assert_eq!(GameEvent::FlashMoved { pattern: 0x01 }.to_string(), "Flash 0x01");
        assert_eq!(GameEvent::SpeedChanged { period_ms: 125 }.to_string(), "Tick 125 ms");
    }

    #[test]
    fn test_record_drops_overflow() {
        let mut events = Events::new();
        for _ in 0..MAX_EVENTS_PER_STEP + 2 {
            record(&mut events, GameEvent::InvalidStateReset);
        }
        assert_eq!(events.len(), MAX_EVENTS_PER_STEP);
    }

    #[test]
    fn test_event_log_push() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(&GameEvent::Served { server: Player::A });
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next(), Some("Serve by A"));
    }

    #[test]
    fn test_event_log_ring_buffer() {
        let mut log = EventLog::new();

        for score in 0..LOG_BUFFER_SIZE as u8 {
            log.push(&GameEvent::PointScored {
                scorer: Player::A,
                score,
            });
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        // One more drops the oldest
        log.push(&GameEvent::MatchWon { winner: Player::A });
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("Point A: 1"));
        assert_eq!(log.iter().last(), Some("A wins!"));
    }

    #[test]
    fn test_truncating_writer_keeps_prefix() {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        let long = "This line is much longer than the log line length limit";
        assert!(write!(TruncatingWriter(&mut line), "{long}").is_err());
        assert_eq!(line.len(), LOG_LINE_LENGTH);
        assert!(long.starts_with(line.as_str()));
    }
}
