//! Simulated board: SDL window with drawn LEDs and keyboard buttons.

use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use pong_common::config::{WIN_FLASH_COUNT, WIN_FLASH_HALF_PERIOD_MS};
use pong_common::{
    Board,
    ButtonId,
    DisplayMode,
    EventLog,
    Events,
    GameEvent,
    Player,
    TickPeriod,
    score_mask,
};

use crate::render::{Lamps, SCREEN_HEIGHT, SCREEN_WIDTH, draw_scene};

/// Keyboard mapping of the three buttons.
pub fn button_for(keycode: Keycode) -> Option<ButtonId> {
    match keycode {
        Keycode::A | Keycode::Left => Some(ButtonId::Left),
        Keycode::L | Keycode::Right => Some(ButtonId::Right),
        Keycode::Space => Some(ButtonId::Mode),
        _ => None,
    }
}

const fn line(button: ButtonId) -> usize {
    match button {
        ButtonId::Left => 0,
        ButtonId::Right => 1,
        ButtonId::Mode => 2,
    }
}

/// [`Board`] drawing into a simulator window.
pub struct SimBoard {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    lamps: Lamps,
    /// Raw line levels (`true` = released), indexed Left, Right, Mode.
    raw: [bool; 3],
    period: TickPeriod,
    log: EventLog,
    status: String,
}

impl SimBoard {
    /// `period` is the game's initial period, armed before the first tick.
    pub fn new(
        window: Window,
        period: TickPeriod,
    ) -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            window,
            lamps: Lamps::new(),
            raw: [true; 3],
            period,
            log: EventLog::new(),
            status: String::new(),
        }
    }

    /// Key went down (`true`) or up.
    pub fn hold(
        &mut self,
        button: ButtonId,
        down: bool,
    ) {
        self.raw[line(button)] = !down;
    }

    /// Period last requested by the game.
    #[inline]
    pub fn tick_period(&self) -> TickPeriod { self.period }

    /// Pending window events. Only valid after the first [`SimBoard::redraw`].
    pub fn poll_events(&mut self) -> Vec<SimulatorEvent> { self.window.events().collect() }

    /// Print events to stdout and keep them for the on-screen log.
    pub fn log_events(
        &mut self,
        events: &Events,
    ) {
        for event in events {
            match event {
                GameEvent::InvalidStateReset => println!("[WARN] {event}"),
                _ => println!("[INFO] {event}"),
            }
            self.log.push(event);
        }
    }

    /// Replace the status line shown under the LEDs.
    pub fn set_status(
        &mut self,
        status: String,
    ) {
        self.status = status;
    }

    pub fn redraw(&mut self) {
        draw_scene(&mut self.display, &self.lamps, &self.status, &self.log);
        self.window.update(&self.display);
    }
}

impl Board for SimBoard {
    fn read_raw_level(
        &mut self,
        button: ButtonId,
    ) -> bool {
        self.raw[line(button)]
    }

    fn set_led_pattern(
        &mut self,
        pattern: u8,
    ) {
        self.lamps.track = pattern;
    }

    fn set_score_display(
        &mut self,
        player: Player,
        score: u8,
    ) {
        self.lamps.scores[player.index()] = score_mask(score);
    }

    /// Blinks on screen, blocking the game like the hardware does.
    fn flash_winner_indicator(
        &mut self,
        player: Player,
    ) {
        let half_period = Duration::from_millis(u64::from(WIN_FLASH_HALF_PERIOD_MS));
        let shown = self.lamps.scores[player.index()];
        for _ in 0..WIN_FLASH_COUNT {
            self.lamps.scores[player.index()] = score_mask(u8::MAX);
            self.redraw();
            thread::sleep(half_period);
            self.lamps.scores[player.index()] = 0;
            self.redraw();
            thread::sleep(half_period);
        }
        self.lamps.scores[player.index()] = shown;
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
        self.lamps.mode = mode;
    }
}
