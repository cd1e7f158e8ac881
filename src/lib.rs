//! Brickfall - a classic brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, round state)
//! - `runner`: Fixed-cadence game loop driver
//! - `host`: Boundary to the rendering/input host (draw requests, command queue)
//! - `tuning`: Data-driven game balance overrides

pub mod host;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use host::{Command, Frontend, InputHandle, InputQueue, input_channel};
pub use runner::GameLoop;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick interval (100 Hz)
    pub const TICK_MS: u64 = 10;

    /// Field half-extents - origin at field center, +y up
    pub const FIELD_HALF_WIDTH: f32 = 400.0;
    pub const FIELD_HALF_HEIGHT: f32 = 300.0;

    /// Paddle defaults - y is fixed, only x moves
    pub const PADDLE_Y: f32 = -250.0;
    pub const PADDLE_HALF_WIDTH: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 20.0;
    /// Paddle center stays within ±(FIELD_HALF_WIDTH - PADDLE_MARGIN)
    pub const PADDLE_MARGIN: f32 = 50.0;
    /// Vertical band around PADDLE_Y where a paddle hit is tested
    pub const PADDLE_BAND: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-tick velocity component at spawn/reset
    pub const BALL_BASE_SPEED: f32 = 3.0;
    pub const BALL_RESET_Y: f32 = -200.0;

    /// Paddle-bounce speed formula: `dx` at a full-edge hit
    pub const BOUNCE_DEFLECT_GAIN: f32 = 5.0;
    /// `|dx|` never drops below this after a paddle bounce
    pub const BOUNCE_MIN_SPEED: f32 = 3.0;
    /// Multiplier applied to each velocity component on a paddle bounce
    pub const SPEED_RAMP: f32 = 1.05;
    /// Components at or above this magnitude stop ramping
    pub const SPEED_CAP: f32 = 7.0;

    /// Brick grid
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_HALF_WIDTH: f32 = 37.5;
    pub const BRICK_HALF_HEIGHT: f32 = 10.0;
    pub const BRICK_START_X: f32 = -337.5;
    pub const BRICK_START_Y: f32 = 200.0;
    pub const BRICK_COL_STEP: f32 = 75.0;
    pub const BRICK_ROW_STEP: f32 = 30.0;
    /// Rows cycle through this many host-side colors
    pub const BRICK_COLOR_COUNT: usize = 5;

    /// Round defaults
    pub const INITIAL_LIVES: u8 = 3;
    pub const BRICK_SCORE: u64 = 10;
    /// Combo streaks longer than this earn a bonus
    pub const COMBO_BONUS_THRESHOLD: u32 = 3;
    /// Bonus is combo * COMBO_BONUS on each qualifying tick
    pub const COMBO_BONUS: u64 = 5;
}
