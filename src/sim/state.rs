//! Entity state and round ownership
//!
//! Plain value types: the collision engine and rules mutate them through
//! explicit calls, never through hidden globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// How a round ends - terminal until an explicit restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Active gameplay
    Playing,
    /// Every brick destroyed
    Won,
    /// Last life lost
    Lost,
}

/// The player's paddle - horizontal movement only, y fixed at `PADDLE_Y`
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Center x, clamped to ±(FIELD_HALF_WIDTH - PADDLE_MARGIN)
    pub x: f32,
    pub half_width: f32,
    /// Displacement per steer command, one per tick
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: 0.0,
            half_width: PADDLE_HALF_WIDTH,
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    /// Slide one step in `dir` (-1.0 left, +1.0 right), clamped to the field
    pub fn slide(&mut self, dir: f32) {
        let bound = FIELD_HALF_WIDTH - PADDLE_MARGIN;
        self.x = (self.x + dir * self.speed).clamp(-bound, bound);
    }
}

/// The ball - constant velocity between collisions
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity per tick; components carry independent signs
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn with the base diagonal velocity of a fresh round
    pub fn new(base_speed: f32) -> Self {
        Self {
            pos: Vec2::new(0.0, BALL_RESET_Y),
            vel: Vec2::splat(base_speed),
            radius: BALL_RADIUS,
        }
    }

    /// Move by one tick's velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Put the ball back in play after a lost life: spawn position, base
    /// speed, upward, horizontal direction drawn from the round RNG
    pub fn reset(&mut self, base_speed: f32, rng: &mut Pcg32) {
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = Vec2::new(0.0, BALL_RESET_Y);
        self.vel = Vec2::new(base_speed * dir, base_speed);
    }
}

/// A brick - fixed position, only `destroyed` ever mutates (false -> true)
#[derive(Debug, Clone)]
pub struct Brick {
    pub pos: Vec2,
    pub half_extent: Vec2,
    /// Cosmetic row color, cycled through the host palette
    pub color_index: usize,
    pub destroyed: bool,
}

/// Build the standard grid in row-major layout order
pub fn brick_grid() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            bricks.push(Brick {
                pos: Vec2::new(
                    BRICK_START_X + col as f32 * BRICK_COL_STEP,
                    BRICK_START_Y - row as f32 * BRICK_ROW_STEP,
                ),
                half_extent: Vec2::new(BRICK_HALF_WIDTH, BRICK_HALF_HEIGHT),
                color_index: row % BRICK_COLOR_COUNT,
                destroyed: false,
            });
        }
    }
    bricks
}

/// One round of play - exclusive owner of all mutable game state
#[derive(Debug, Clone)]
pub struct Round {
    /// Run seed for reproducibility
    pub seed: u64,
    pub score: u64,
    pub lives: u8,
    /// Consecutive-tick brick-destruction streak, reset on any miss tick
    pub combo: u32,
    pub outcome: Outcome,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Fixed size for the whole round; layout order is scan order
    pub bricks: Vec<Brick>,
    pub tick_count: u64,
    /// Gameplay parameters captured at round creation
    pub tuning: crate::Tuning,
    rng: Pcg32,
}

impl Round {
    /// Create a fresh round with the given seed
    pub fn new(seed: u64, tuning: crate::Tuning) -> Self {
        Self {
            seed,
            score: 0,
            lives: tuning.initial_lives,
            combo: 0,
            outcome: Outcome::Playing,
            paddle: Paddle {
                speed: tuning.paddle_speed,
                ..Paddle::default()
            },
            ball: Ball::new(tuning.ball_base_speed),
            bricks: brick_grid(),
            tick_count: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn all_bricks_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Put the ball back in play after a non-final lost life
    pub fn reset_ball(&mut self) {
        let base_speed = self.tuning.ball_base_speed;
        self.ball.reset(base_speed, &mut self.rng);
    }

    /// Rebuild the round wholesale. Only meaningful from a terminal state;
    /// a restart request while playing is ignored.
    pub fn restart(&mut self) {
        if self.outcome == Outcome::Playing {
            return;
        }
        let seed = self.rng.random();
        log::info!("round restarted, seed {seed}");
        *self = Round::new(seed, self.tuning.clone());
    }
}
