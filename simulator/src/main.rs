//! 1D Pong Simulator for Windows/Desktop.
//!
//! Runs the same game as the Pico 2 firmware inside an
//! embedded-graphics-simulator window.
//!
//! # Keys
//!
//! - **A** / **Left**: Player A paddle
//! - **L** / **Right**: Player B paddle
//! - **Space**: Toggle Play / Flash mode (on release)
//! - Close the window to quit
//!
//! Buttons are sampled every 5 ms through the same shift-register debouncer
//! as the hardware. The game tick runs on its own deadline.

mod board;
mod colors;
mod render;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorEvent, Window};
use pong_common::config::DEBOUNCE_BITS;
use pong_common::{ButtonBank, GameConfig, GameContext, Player, RawLevels};

use crate::board::{SimBoard, button_for};
use crate::timing::{Deadline, FRAME_TIME, SAMPLE_PERIOD, to_duration};

/// One-line summary of the game for the status line.
fn status_line(ctx: &GameContext) -> String {
    let engine = ctx.engine();
    format!(
        "{} | Tick {} ms | A {} - {} B",
        engine.state().name(),
        engine.period().as_millis(),
        engine.score(Player::A),
        engine.score(Player::B),
    )
}

fn main() {
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let window = Window::new("1D Pong Sim", &output_settings);

    let config = GameConfig::new();
    let mut board = SimBoard::new(window, config.initial_period);
    let mut ctx = GameContext::new(config);
    let mut bank = ButtonBank::new(DEBOUNCE_BITS);

    ctx.start(&mut board);
    println!("[INFO] Player A serves. Keys: A/Left, L/Right, Space = mode");
    board.set_status(status_line(&ctx));
    // The SDL window only exists after the first update
    board.redraw();

    let start = Instant::now();
    let mut sample_clock = Deadline::new(start, SAMPLE_PERIOD);
    let mut tick_clock = Deadline::new(start, to_duration(board.tick_period()));
    let mut last_draw = start;

    loop {
        for ev in board.poll_events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(button) = button_for(keycode) {
                        board.hold(button, true);
                    }
                },
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(button) = button_for(keycode) {
                        board.hold(button, false);
                    }
                },
                _ => {},
            }
        }

        let now = Instant::now();

        if sample_clock.poll(now, SAMPLE_PERIOD) {
            let levels = bank.sample(RawLevels::read(&mut board));
            let events = ctx.on_buttons(levels, &mut board);
            board.log_events(&events);
        }

        if tick_clock.is_due(now) {
            let events = ctx.on_tick(&mut board);
            board.log_events(&events);
            // Re-read after the tick so a speed change applies from the next deadline
            tick_clock.advance(Instant::now(), to_duration(board.tick_period()));
        }

        if last_draw.elapsed() >= FRAME_TIME {
            board.set_status(status_line(&ctx));
            board.redraw();
            last_draw = Instant::now();
        }

        let next = sample_clock.next().min(tick_clock.next());
        if let Some(wait) = next.checked_duration_since(Instant::now()) {
            thread::sleep(wait);
        }
    }
}
