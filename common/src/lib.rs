//! Core logic for the 1D Pong LED strip.
//!
//! This crate contains the platform-agnostic game shared between the Pico 2
//! firmware and the desktop simulator:
//!
//! - [`config`]: Game timing constants and [`GameConfig`]
//! - [`debounce`]: Shift-register debounce filter and edge detection
//! - [`board`]: The [`Board`] trait implemented by each platform
//! - [`engine`]: Serve / shift / hit-zone / score state machine
//! - [`flash`]: Flash mode wraparound shifter
//! - [`context`]: [`GameContext`] tying input, mode and engine together
//! - [`events`]: Game events and the on-screen event log
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p pong-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware links this crate as `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

pub mod board;
pub mod config;
pub mod context;
pub mod debounce;
pub mod engine;
pub mod events;
pub mod flash;
pub mod mode;
pub mod player;

#[cfg(test)]
mod mock;

// Re-export commonly used items
pub use board::{Board, ButtonId, score_mask};
pub use config::{GameConfig, TickPeriod};
pub use context::GameContext;
pub use debounce::{ButtonBank, ButtonLevel, ButtonLevels, Debouncer, Edge, EdgeDetector, RawLevels};
pub use engine::{Ball, Engine, GameState, Presses};
pub use events::{EventLog, Events, GameEvent};
pub use flash::FlashCycler;
pub use mode::DisplayMode;
pub use player::Player;
