//! Game context: the single owner of all game state.
//!
//! Two entry points are driven by the platform:
//!
//! - [`GameContext::on_buttons`] after every debounce sample (foreground).
//!   Handles the mode button, flash-mode shifts, and latches paddle presses.
//! - [`GameContext::on_tick`] on every game tick. Runs the engine in Play
//!   mode with the presses latched since the previous tick.
//!
//! Buttons are evaluated in a fixed order: mode, then left, then right.
//! A mode switch is applied before the paddle edges of the same sample.
//!
//! Platforms that run input and ticks from different contexts must keep the
//! whole context behind one lock (see the Pico 2 firmware).

use core::mem;

use crate::board::Board;
use crate::config::GameConfig;
use crate::debounce::{ButtonBank, ButtonLevels, Edge, EdgeDetector, RawLevels};
use crate::engine::{Engine, Presses};
use crate::events::{Events, GameEvent, record};
use crate::flash::FlashCycler;
use crate::mode::DisplayMode;
use crate::player::Player;

/// Engine, flash shifter, display mode and input edge state.
pub struct GameContext {
    engine: Engine,
    flash: FlashCycler,
    mode: DisplayMode,
    mode_edges: EdgeDetector,
    paddle_edges: [EdgeDetector; 2],
    latched: Presses,
}

impl GameContext {
    pub const fn new(config: GameConfig) -> Self {
        Self {
            engine: Engine::new(config),
            flash: FlashCycler::new(),
            mode: DisplayMode::Play,
            mode_edges: EdgeDetector::new(),
            paddle_edges: [EdgeDetector::new(); 2],
            latched: Presses::NONE,
        }
    }

    /// Light the mode indicator and start the game.
    pub fn start<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
    ) {
        board.set_mode_indicator(self.mode);
        self.engine.start(board);
    }

    /// Foreground step: react to freshly debounced levels.
    pub fn on_buttons<B: Board + ?Sized>(
        &mut self,
        levels: ButtonLevels,
        board: &mut B,
    ) -> Events {
        let mut events = Events::new();

        if self.mode_edges.update(levels.mode) == Some(Edge::Release) {
            self.switch_mode(board);
            record(&mut events, GameEvent::ModeChanged { mode: self.mode });
        }

        for player in Player::ALL {
            let level = match player {
                Player::A => levels.left,
                Player::B => levels.right,
            };
            let Some(edge) = self.paddle_edges[player.index()].update(level) else {
                continue;
            };

            match (self.mode, edge) {
                (DisplayMode::Play, Edge::Press) => self.latched.set(player),
                (DisplayMode::Flash, Edge::Release) => {
                    let pattern = self.flash.on_release(player.paddle());
                    board.set_led_pattern(pattern);
                    record(&mut events, GameEvent::FlashMoved { pattern });
                },
                _ => {},
            }
        }

        events
    }

    /// Game tick: run the engine on the presses latched since the last tick.
    pub fn on_tick<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
    ) -> Events {
        let presses = mem::take(&mut self.latched);
        match self.mode {
            DisplayMode::Play => self.engine.tick(presses, board),
            DisplayMode::Flash => Events::new(),
        }
    }

    /// Sample, debounce and tick in one call, in that order.
    ///
    /// For loops where the debounce sample and the game tick share one timer.
    pub fn step<B: Board + ?Sized>(
        &mut self,
        bank: &mut ButtonBank,
        board: &mut B,
    ) -> Events {
        let levels = bank.sample(RawLevels::read(board));
        let mut events = self.on_buttons(levels, board);
        for event in self.on_tick(board) {
            record(&mut events, event);
        }
        events
    }

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.mode }

    #[inline]
    pub const fn engine(&self) -> &Engine { &self.engine }

    /// Flash pattern, meaningful in Flash mode.
    #[inline]
    pub const fn flash_pattern(&self) -> u8 { self.flash.pattern() }

    fn switch_mode<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
    ) {
        self.mode = self.mode.toggle();
        // Presses from the other mode never carry over
        self.latched = Presses::NONE;
        board.set_mode_indicator(self.mode);

        match self.mode {
            DisplayMode::Flash => {
                self.flash.reset();
                board.set_led_pattern(self.flash.pattern());
            },
            DisplayMode::Play => self.engine.resume(board),
        }
    }
}

impl Default for GameContext {
    fn default() -> Self { Self::new(GameConfig::new()) }
}

// =============================================================================
// Unit Tests
// =============================================================================
