//! GPIO board for the Pico 2: 8 track LEDs, two 3-LED score displays,
//! the on-board mode LED and three active-low buttons.

use embassy_rp::gpio::{Input, Level, Output};
use embassy_time::{Duration, block_for};
use pong_common::config::{TickPeriod, WIN_FLASH_COUNT, WIN_FLASH_HALF_PERIOD_MS};
use pong_common::{Board, ButtonId, DisplayMode, Player};
use pong_pico2::lamps::{SCORE_LEDS, TRACK_LEDS, score_levels, track_levels};

/// Output pins of the board.
pub struct Leds<'d> {
    pub track: [Output<'d>; TRACK_LEDS],
    /// Indexed by `Player::index`.
    pub score: [[Output<'d>; SCORE_LEDS]; 2],
    pub mode: Output<'d>,
}

/// Input pins of the board (pulled up, low = pressed).
pub struct Buttons<'d> {
    pub left: Input<'d>,
    pub right: Input<'d>,
    pub mode: Input<'d>,
}

/// [`Board`] over the RP2350 GPIOs.
///
/// The tick period is only stored here. The game tick task reads it back with
/// [`LedBoard::tick_period`] before arming its next deadline.
pub struct LedBoard<'d> {
    leds: Leds<'d>,
    buttons: Buttons<'d>,
    period: TickPeriod,
}

impl<'d> LedBoard<'d> {
    /// `period` is the game's initial period, armed before the first tick.
    pub fn new(
        leds: Leds<'d>,
        buttons: Buttons<'d>,
        period: TickPeriod,
    ) -> Self {
        Self { leds, buttons, period }
    }

    /// Period last requested by the game.
    #[inline]
    pub const fn tick_period(&self) -> TickPeriod { self.period }

    fn set_score_leds(
        &mut self,
        player: Player,
        levels: [bool; SCORE_LEDS],
    ) {
        for (led, on) in self.leds.score[player.index()].iter_mut().zip(levels) {
            led.set_level(Level::from(on));
        }
    }
}

impl Board for LedBoard<'_> {
    fn read_raw_level(
        &mut self,
        button: ButtonId,
    ) -> bool {
        match button {
            ButtonId::Left => self.buttons.left.is_high(),
            ButtonId::Right => self.buttons.right.is_high(),
            ButtonId::Mode => self.buttons.mode.is_high(),
        }
    }

    fn set_led_pattern(
        &mut self,
        pattern: u8,
    ) {
        for (led, on) in self.leds.track.iter_mut().zip(track_levels(pattern)) {
            led.set_level(Level::from(on));
        }
    }

    fn set_score_display(
        &mut self,
        player: Player,
        score: u8,
    ) {
        self.set_score_leds(player, score_levels(score));
    }

    /// Blink the winner's score LEDs. Blocks the caller for the whole animation.
    fn flash_winner_indicator(
        &mut self,
        player: Player,
    ) {
        let half_period = Duration::from_millis(u64::from(WIN_FLASH_HALF_PERIOD_MS));
        for _ in 0..WIN_FLASH_COUNT {
            self.set_score_leds(player, [true; SCORE_LEDS]);
            block_for(half_period);
            self.set_score_leds(player, [false; SCORE_LEDS]);
            block_for(half_period);
        }
    }

    fn configure_periodic_tick(
        &mut self,
        period: TickPeriod,
    ) {
        self.period = period;
    }

    fn set_mode_indicator(
        &mut self,
        mode: DisplayMode,
    ) {
        self.leds.mode.set_level(Level::from(mode == DisplayMode::Play));
    }
}
