//! Pong firmware library - testable modules for the Pico 2 board.
//!
//! The game itself lives in `pong-common`. This library only holds the
//! board-specific pieces that don't need the hardware to be tested.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p pong-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p pong-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

pub mod lamps;
