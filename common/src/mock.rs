//! Recording board for unit tests.

use crate::board::{Board, ButtonId};
use crate::config::TickPeriod;
use crate::mode::DisplayMode;
use crate::player::Player;

/// Board that records every output call and serves scripted input levels.
pub struct MockBoard {
    /// Raw line levels (`true` = high = released), indexed Left, Right, Mode.
    pub raw: [bool; 3],
    pub led_pattern: u8,
    pub led_history: Vec<u8>,
    pub scores: [u8; 2],
    pub flashed: Vec<Player>,
    pub periods: Vec<TickPeriod>,
    pub mode: Option<DisplayMode>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            raw: [true; 3],
            led_pattern: 0,
            led_history: Vec::new(),
            scores: [0; 2],
            flashed: Vec::new(),
            periods: Vec::new(),
            mode: None,
        }
    }

    /// Hold a button down (line low) or let it go.
    pub fn hold(
        &mut self,
        button: ButtonId,
        down: bool,
    ) {
        self.raw[Self::line(button)] = !down;
    }

    /// Last period armed, in milliseconds.
    pub fn last_period(&self) -> Option<u32> { self.periods.last().map(|p| p.as_millis()) }

    const fn line(button: ButtonId) -> usize {
        match button {
            ButtonId::Left => 0,
            ButtonId::Right => 1,
            ButtonId::Mode => 2,
        }
    }
}

impl Board for MockBoard {
    fn read_raw_level(
        &mut self,
        button: ButtonId,
    ) -> bool {
        self.raw[Self::line(button)]
    }

    fn set_led_pattern(
        &mut self,
        pattern: u8,
    ) {
        self.led_pattern = pattern;
        self.led_history.push(pattern);
    }

    fn set_score_display(
        &mut self,
        player: Player,
        score: u8,
    ) {
        self.scores[player.index()] = score;
    }

    fn flash_winner_indicator(
        &mut self,
        player: Player,
    ) {
        self.flashed.push(player);
    }

    fn configure_periodic_tick(
        &mut self,
        period: TickPeriod,
    ) {
        self.periods.push(period);
    }

    fn set_mode_indicator(
        &mut self,
        mode: DisplayMode,
    ) {
        self.mode = Some(mode);
    }
}
