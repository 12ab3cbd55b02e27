//! Pong state machine.
//!
//! One call to [`Engine::tick`] per game tick. The tick period itself is
//! owned by the engine: it starts slow at every serve, shrinks by a fixed
//! step on every return and is pushed to the board whenever it changes.
//!
//! # States
//!
//! ```text
//!            server press          ball reaches far end
//!   Serve ───────────────▶ Shift ───────────────────────▶ HitZone
//!     ▲                      ▲                              │   │
//!     │                      │ reverse direction   defender │   │ window
//!     │                      └──────────────────── Hit ◀────┘   │ expires
//!     │  score < 3                                              ▼
//!     ├───────────────────────────────────────────────────── Miss
//!     │  match reset                                            │ score == 3
//!     └───────────────────────────── Win ◀──────────────────────┘
//! ```
//!
//! # Presses
//!
//! The engine receives [`Presses`]: press edges latched since the previous
//! tick. A press only counts for the server in `Serve` and for the defender in
//! `HitZone`. Presses during `Shift` are dropped, so an early press neither
//! returns the ball nor ends the rally. Holding a button down produces no new
//! presses.

use crate::board::Board;
use crate::config::{GameConfig, TickPeriod, WINNING_SCORE};
use crate::events::{Events, GameEvent, record};
use crate::player::Player;

// =============================================================================
// Ball
// =============================================================================

/// One-hot ball position on the 8-LED track.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ball {
    pattern: u8,
}

impl Ball {
    /// Ball parked at a player's end.
    #[inline]
    pub const fn at(end: Player) -> Self {
        Self {
            pattern: end.end_pattern(),
        }
    }

    /// LED pattern for the playfield.
    #[inline]
    pub const fn pattern(self) -> u8 { self.pattern }

    /// Track index, 0 = player A's end.
    #[inline]
    pub const fn position(self) -> u32 { self.pattern.trailing_zeros() }

    /// Exactly one LED lit.
    #[inline]
    pub const fn is_valid(self) -> bool { self.pattern.count_ones() == 1 }

    #[inline]
    pub const fn is_at(
        self,
        end: Player,
    ) -> bool {
        self.pattern == end.end_pattern()
    }

    /// Move one LED toward `end`. Returns false if already there.
    pub fn step_toward(
        &mut self,
        end: Player,
    ) -> bool {
        if self.is_at(end) {
            return false;
        }
        match end {
            Player::A => self.pattern >>= 1,
            Player::B => self.pattern <<= 1,
        }
        true
    }
}

// =============================================================================
// Inputs and States
// =============================================================================

/// Paddle press edges latched since the previous tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Presses {
    pressed: [bool; 2],
}

impl Presses {
    pub const NONE: Self = Self { pressed: [false; 2] };

    /// Presses containing a single player's press.
    pub const fn only(player: Player) -> Self {
        let mut presses = Self::NONE;
        presses.pressed[player.index()] = true;
        presses
    }

    #[inline]
    pub fn set(
        &mut self,
        player: Player,
    ) {
        self.pressed[player.index()] = true;
    }

    #[inline]
    pub const fn of(
        &self,
        player: Player,
    ) -> bool {
        self.pressed[player.index()]
    }
}

/// Game state. Exactly one is active; transitions happen on ticks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    /// Ball parked at the server's end, waiting for the server's press.
    Serve,
    /// Ball moving one LED per tick toward `toward`'s end.
    Shift { toward: Player },
    /// Ball at the defender's end; `ticks` of the window already elapsed.
    HitZone { defender: Player, ticks: u8 },
    /// Defender returned the ball. Speed up and reverse.
    Hit { by: Player },
    /// Defender missed. The opponent scores.
    Miss { by: Player },
    /// `winner` reached the winning score.
    Win { winner: Player },
}

impl GameState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Serve => "Serve",
            Self::Shift { toward: Player::A } => "ShiftTowardA",
            Self::Shift { toward: Player::B } => "ShiftTowardB",
            Self::HitZone { .. } => "HitZone",
            Self::Hit { .. } => "Hit",
            Self::Miss { .. } => "Miss",
            Self::Win { .. } => "Win",
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

/// The game: ball, scores, server and speed.
pub struct Engine {
    config: GameConfig,
    state: GameState,
    ball: Ball,
    scores: [u8; 2],
    server: Player,
    /// Serves first in the current match. Alternates between matches.
    match_opener: Player,
    period: TickPeriod,
}

impl Engine {
    /// Create an engine with player A serving the first match.
    pub const fn new(config: GameConfig) -> Self {
        let config = config.sanitized();
        Self {
            config,
            state: GameState::Serve,
            ball: Ball::at(Player::A),
            scores: [0; 2],
            server: Player::A,
            match_opener: Player::A,
            period: config.initial_period,
        }
    }

    /// Draw the initial ball and scores and arm the tick.
    pub fn start<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
    ) {
        self.serve(board);
        self.show_scores(board);
        board.configure_periodic_tick(self.period);
    }

    /// Redraw everything and re-arm the tick after another mode owned the LEDs.
    pub fn resume<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
    ) {
        board.set_led_pattern(self.ball.pattern());
        self.show_scores(board);
        board.configure_periodic_tick(self.period);
    }

    /// Advance the state machine by one tick.
    pub fn tick<B: Board + ?Sized>(
        &mut self,
        presses: Presses,
        board: &mut B,
    ) -> Events {
        let mut events = Events::new();

        if !self.is_consistent() {
            self.reset_to_serve(board);
            record(&mut events, GameEvent::InvalidStateReset);
            return events;
        }

        match self.state {
            GameState::Serve => {
                if presses.of(self.server) {
                    self.state = GameState::Shift {
                        toward: self.server.opponent(),
                    };
                    record(&mut events, GameEvent::Served { server: self.server });
                }
            },

            GameState::Shift { toward } => {
                self.ball.step_toward(toward);
                board.set_led_pattern(self.ball.pattern());
                if self.ball.is_at(toward) {
                    self.state = GameState::HitZone {
                        defender: toward,
                        ticks: 0,
                    };
                }
            },

            GameState::HitZone { defender, ticks } => {
                if presses.of(defender) {
                    self.state = GameState::Hit { by: defender };
                    record(&mut events, GameEvent::Returned { by: defender });
                } else {
                    let ticks = ticks + 1;
                    self.state = if ticks >= self.config.hit_window_ticks {
                        GameState::Miss { by: defender }
                    } else {
                        GameState::HitZone { defender, ticks }
                    };
                }
            },

            GameState::Hit { by } => {
                let faster = self.period.faster(self.config.period_step_ms, self.config.min_period);
                if faster != self.period {
                    self.period = faster;
                    board.configure_periodic_tick(self.period);
                    record(&mut events, GameEvent::SpeedChanged {
                        period_ms: self.period.as_millis(),
                    });
                }
                self.state = GameState::Shift { toward: by.opponent() };
            },

            GameState::Miss { by } => {
                let scorer = by.opponent();
                let score = self.add_point(scorer);
                board.set_score_display(scorer, score);
                record(&mut events, GameEvent::PointScored { scorer, score });

                if score >= WINNING_SCORE {
                    self.state = GameState::Win { winner: scorer };
                } else {
                    // Loser serves next
                    self.server = by;
                    self.reset_speed(board, &mut events);
                    self.serve(board);
                    self.state = GameState::Serve;
                    record(&mut events, GameEvent::ServeReady { server: self.server });
                }
            },

            GameState::Win { winner } => {
                board.flash_winner_indicator(winner);
                record(&mut events, GameEvent::MatchWon { winner });

                self.scores = [0; 2];
                self.show_scores(board);
                self.reset_speed(board, &mut events);
                self.match_opener = self.match_opener.opponent();
                self.server = self.match_opener;
                self.serve(board);
                self.state = GameState::Serve;
                record(&mut events, GameEvent::ServeReady { server: self.server });
            },
        }

        events
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn state(&self) -> GameState { self.state }

    #[inline]
    pub const fn ball(&self) -> Ball { self.ball }

    #[inline]
    pub const fn score(
        &self,
        player: Player,
    ) -> u8 {
        self.scores[player.index()]
    }

    #[inline]
    pub const fn server(&self) -> Player { self.server }

    /// Current tick period.
    #[inline]
    pub const fn period(&self) -> TickPeriod { self.period }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Park the ball at the server's end and show it.
    fn serve<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
    ) {
        self.ball = Ball::at(self.server);
        board.set_led_pattern(self.ball.pattern());
    }

    fn show_scores<B: Board + ?Sized>(
        &self,
        board: &mut B,
    ) {
        for player in Player::ALL {
            board.set_score_display(player, self.score(player));
        }
    }

    fn add_point(
        &mut self,
        player: Player,
    ) -> u8 {
        let score = &mut self.scores[player.index()];
        *score = score.saturating_add(1).min(WINNING_SCORE);
        *score
    }

    fn reset_speed<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
        events: &mut Events,
    ) {
        if self.period != self.config.initial_period {
            self.period = self.config.initial_period;
            record(events, GameEvent::SpeedChanged {
                period_ms: self.period.as_millis(),
            });
        }
        board.configure_periodic_tick(self.period);
    }

    /// Checks the ball and state agree with each other.
    fn is_consistent(&self) -> bool {
        if !self.ball.is_valid() {
            return false;
        }
        match self.state {
            GameState::Serve => self.ball.is_at(self.server),
            GameState::HitZone { defender, ticks } => {
                self.ball.is_at(defender) && ticks < self.config.hit_window_ticks
            },
            GameState::Hit { by } | GameState::Miss { by } => self.ball.is_at(by),
            GameState::Shift { .. } | GameState::Win { .. } => true,
        }
    }

    /// Recover from an inconsistent state: ball back at the server's end,
    /// initial speed, scores kept.
    fn reset_to_serve<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
    ) {
        self.period = self.config.initial_period;
        board.configure_periodic_tick(self.period);
        self.serve(board);
        self.state = GameState::Serve;
    }
}

impl Default for Engine {
    fn default() -> Self { Self::new(GameConfig::new()) }
}

// =============================================================================
// Unit Tests
// =============================================================================
