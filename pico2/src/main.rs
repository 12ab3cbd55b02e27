//! 1D Pong Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Two players bounce a single lit LED along an 8-LED track. Each player's
//! score is shown on 3 LEDs; the first to 3 points wins the match.
//!
//! # Architecture
//!
//! - Main task: Samples the buttons every 5 ms through the shift-register
//!   debouncer and feeds the edges to the game
//! - Tick task: Advances the game on a tick that speeds up with every return
//!
//! # Button Controls
//!
//! - **Left**: Player A serve/return (Flash mode: shift left)
//! - **Right**: Player B serve/return (Flash mode: shift right)
//! - **Mode**: Toggle Play / Flash mode on release
//!
//! Off-target builds only produce a stub so the workspace still builds on host.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
mod board;
#[cfg(target_arch = "arm")]
mod firmware;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(not(target_arch = "arm"))]
fn main() {
    println!("pico2 firmware only runs on the RP2350 (--target thumbv8m.main-none-eabihf)");
    println!("Play on the desktop with: cargo run -p pong-simulator");
}
