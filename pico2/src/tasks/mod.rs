//! Async tasks for the pong firmware.
//!
//! The game is shared between two loops behind one mutex:
//! - `main`: Samples and debounces the buttons every `SAMPLE_PERIOD_MS`
//! - `tick`: Advances the game on its variable-period tick

pub mod tick;

use defmt::{Display2Format, info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use pong_common::{Events, GameContext, GameEvent};

use crate::board::LedBoard;

pub use tick::game_tick_task;

/// Everything the game owns: state and the board it drives.
pub struct Game {
    pub ctx: GameContext,
    pub board: LedBoard<'static>,
}

/// The game behind the lock shared by the sampling loop and the tick task.
pub type SharedGame = Mutex<CriticalSectionRawMutex, Game>;

/// Report a step's events over RTT.
pub fn log_events(events: &Events) {
    for event in events {
        match event {
            GameEvent::InvalidStateReset => warn!("{}", Display2Format(event)),
            _ => info!("{}", Display2Format(event)),
        }
    }
}
