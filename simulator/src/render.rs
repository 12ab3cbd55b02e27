//! Drawing of the simulated LED board.
//!
//! # Layout
//!
//! ```text
//!                   1D PONG
//!   (o) (o) (o) (o) (o) (o) (o) (o)     track, A end on the left
//!   (o)(o)(o)       (o)       (o)(o)(o) score A, mode LED, score B
//!   Player A        PLAY        Player B
//!   Serve | Tick 150 ms | A 0 - 0 B     status
//!   Serve by A                          event log
//!   ...
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyleBuilder};
use embedded_graphics::text::{Alignment, Text};
use pong_common::config::TRACK_LEN;
use pong_common::{DisplayMode, EventLog, Player};
use profont::PROFONT_18_POINT;

use crate::colors::{BLACK, GRAY, GREEN, LED_OFF, RED, TEAL, WHITE, YELLOW};

// =============================================================================
// Layout
// =============================================================================

pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 220;

const CENTER_X: i32 = SCREEN_WIDTH as i32 / 2;

const TITLE_POS: Point = Point::new(CENTER_X, 22);

const TRACK_Y: i32 = 56;
const TRACK_PITCH: i32 = 38;
const TRACK_DIAMETER: u32 = 28;
/// Center of track LED 0. The track is centered on screen.
const TRACK_X0: i32 = CENTER_X - TRACK_PITCH * (TRACK_LEN as i32 - 1) / 2;

const SCORE_Y: i32 = 98;
const SCORE_PITCH: i32 = 22;
const SCORE_DIAMETER: u32 = 16;
const SCORE_A_X0: i32 = TRACK_X0;
const SCORE_B_X0: i32 = SCREEN_WIDTH as i32 - TRACK_X0 - 2 * SCORE_PITCH;

const MODE_POS: Point = Point::new(CENTER_X, SCORE_Y);
const LABEL_Y: i32 = 124;
const STATUS_Y: i32 = 144;

const LOG_X: i32 = 8;
const LOG_Y: i32 = 162;
const LOG_LINE_HEIGHT: i32 = 11;

// =============================================================================
// Styles
// =============================================================================

const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);
const STATUS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEAL);

// =============================================================================
// Scene
// =============================================================================

/// Current output of every LED on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Lamps {
    /// Track pattern, bit 0 = player A's end.
    pub track: u8,
    /// Score LED masks, indexed by `Player::index`.
    pub scores: [u8; 2],
    pub mode: DisplayMode,
}

impl Lamps {
    pub const fn new() -> Self {
        Self {
            track: 0,
            scores: [0; 2],
            mode: DisplayMode::Play,
        }
    }
}

impl Default for Lamps {
    fn default() -> Self { Self::new() }
}

/// Draw the whole board: LEDs, labels, status line and event log.
pub fn draw_scene<D>(
    display: &mut D,
    lamps: &Lamps,
    status: &str,
    log: &EventLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    Text::with_alignment("1D PONG", TITLE_POS, TITLE_STYLE, Alignment::Center)
        .draw(display)
        .ok();

    for i in 0..TRACK_LEN as i32 {
        let center = Point::new(TRACK_X0 + i * TRACK_PITCH, TRACK_Y);
        draw_lamp(display, center, TRACK_DIAMETER, lamps.track & (1 << i) != 0, RED);
    }

    for player in Player::ALL {
        draw_score(display, player, lamps.scores[player.index()]);
    }

    draw_lamp(display, MODE_POS, SCORE_DIAMETER, lamps.mode == DisplayMode::Play, YELLOW);
    Text::with_alignment(
        match lamps.mode {
            DisplayMode::Play => "PLAY",
            DisplayMode::Flash => "FLASH",
        },
        Point::new(CENTER_X, LABEL_Y),
        LABEL_STYLE,
        Alignment::Center,
    )
    .draw(display)
    .ok();

    Text::new(status, Point::new(LOG_X, STATUS_Y), STATUS_STYLE)
        .draw(display)
        .ok();

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(line, Point::new(LOG_X, y), LABEL_STYLE).draw(display).ok();
        y += LOG_LINE_HEIGHT;
    }
}

fn draw_score<D>(
    display: &mut D,
    player: Player,
    mask: u8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (x0, label_pos, alignment) = match player {
        Player::A => (SCORE_A_X0, Point::new(SCORE_A_X0 - 8, LABEL_Y), Alignment::Left),
        Player::B => (
            SCORE_B_X0,
            Point::new(SCORE_B_X0 + 2 * SCORE_PITCH + 8, LABEL_Y),
            Alignment::Right,
        ),
    };

    for i in 0..3 {
        let center = Point::new(x0 + i * SCORE_PITCH, SCORE_Y);
        draw_lamp(display, center, SCORE_DIAMETER, mask & (1 << i) != 0, GREEN);
    }

    let label = match player {
        Player::A => "Player A",
        Player::B => "Player B",
    };
    Text::with_alignment(label, label_pos, LABEL_STYLE, alignment)
        .draw(display)
        .ok();
}

/// Draw one round LED with a bezel.
fn draw_lamp<D>(
    display: &mut D,
    center: Point,
    diameter: u32,
    on: bool,
    on_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(if on { on_color } else { LED_OFF })
        .stroke_color(GRAY)
        .stroke_width(2)
        .build();
    Circle::with_center(center, diameter)
        .into_styled(style)
        .draw(display)
        .ok();
}
