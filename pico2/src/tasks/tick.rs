//! Game tick task.
//!
//! Runs the engine once per tick period. The period is re-read from the board
//! after every tick, so a speed change takes effect from the next deadline.
//! Deadlines are absolute to keep the rhythm steady while the sampling loop
//! holds the lock.

use defmt::{debug, info};
use embassy_time::{Duration, Instant, Timer};
use pong_common::TickPeriod;

use super::{Game, SharedGame, log_events};

#[inline]
fn to_duration(period: TickPeriod) -> Duration { Duration::from_millis(u64::from(period.as_millis())) }

/// Game tick task - advances the state machine on its own timer.
#[embassy_executor::task]
pub async fn game_tick_task(game: &'static SharedGame) {
    info!("Game tick task started");

    let mut period = to_duration(game.lock().await.board.tick_period());
    let mut deadline = Instant::now() + period;

    loop {
        Timer::at(deadline).await;

        {
            let mut game = game.lock().await;
            let Game { ctx, board } = &mut *game;
            let events = ctx.on_tick(board);
            log_events(&events);
            period = to_duration(board.tick_period());
        }

        deadline += period;
        let now = Instant::now();
        if deadline < now {
            // The win animation blocks for several periods, start over from now
            debug!("Tick deadline missed by {} ms", (now - deadline).as_millis());
            deadline = now + period;
        }
    }
}
