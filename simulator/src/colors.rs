//! Color constants for the simulated LED board.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Labels and event log text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Lit track LED (the ball).
pub const RED: Rgb565 = Rgb565::RED;

/// Lit score LED.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Lit mode indicator.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Unlit LED body. RGB565: (4, 8, 4), just visible on black.
pub const LED_OFF: Rgb565 = Rgb565::new(4, 8, 4);

/// LED bezel ring. RGB565: (8, 16, 8).
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Status line text. RGB565: (0, 48, 24).
pub const TEAL: Rgb565 = Rgb565::new(0, 48, 24);
