//! Embassy entry point: pin setup, task spawn and the button sampling loop.

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker};
use pong_common::config::{DEBOUNCE_BITS, SAMPLE_PERIOD_MS};
use pong_common::{ButtonBank, GameConfig, GameContext, RawLevels};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::board::{Buttons, LedBoard, Leds};
use crate::tasks::{Game, SharedGame, game_tick_task, log_events};

// =============================================================================
// Binary Info
// =============================================================================

/// Program metadata for `picotool info`.
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-pong"),
    embassy_rp::binary_info::rp_program_description!(c"1D Pong on an 8-LED track with score displays"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

// =============================================================================
// Main
// =============================================================================

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pong starting...");

    let p = embassy_rp::init(Default::default());

    // Track: GP2 (player A's end) .. GP9 (player B's end)
    let leds = Leds {
        track: [
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
        ],
        score: [
            [
                Output::new(p.PIN_10, Level::Low),
                Output::new(p.PIN_11, Level::Low),
                Output::new(p.PIN_12, Level::Low),
            ],
            [
                Output::new(p.PIN_13, Level::Low),
                Output::new(p.PIN_14, Level::Low),
                Output::new(p.PIN_15, Level::Low),
            ],
        ],
        mode: Output::new(p.PIN_25, Level::Low),
    };

    // Buttons (active-low with internal pull-up)
    let buttons = Buttons {
        left: Input::new(p.PIN_16, Pull::Up),
        right: Input::new(p.PIN_17, Pull::Up),
        mode: Input::new(p.PIN_18, Pull::Up),
    };
    info!("GPIO initialized");

    let config = GameConfig::new();
    let mut board = LedBoard::new(leds, buttons, config.initial_period);
    let mut ctx = GameContext::new(config);
    ctx.start(&mut board);

    // Move the game to static for the tick task (Embassy tasks need 'static lifetime)
    static GAME: StaticCell<SharedGame> = StaticCell::new();
    let game: &'static SharedGame = GAME.init(Mutex::new(Game { ctx, board }));

    spawner.spawn(game_tick_task(game)).unwrap();
    info!("Game tick task spawned");

    let mut bank = ButtonBank::new(DEBOUNCE_BITS);
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(SAMPLE_PERIOD_MS)));

    info!("Sampling buttons every {} ms, {} samples to settle", SAMPLE_PERIOD_MS, DEBOUNCE_BITS);

    loop {
        ticker.next().await;

        let mut game = game.lock().await;
        let Game { ctx, board } = &mut *game;
        let levels = bank.sample(RawLevels::read(board));
        let events = ctx.on_buttons(levels, board);
        log_events(&events);
    }
}
