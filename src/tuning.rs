//! Data-driven game balance
//!
//! Loop cadence and round-construction parameters, overridable from a JSON
//! file named by `BRICKFALL_TUNING`. Collision thresholds are deliberately
//! not configurable; they are literal inherited behavior.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay parameters, captured by each `Round` at creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulation tick interval in milliseconds
    pub tick_ms: u64,
    pub initial_lives: u8,
    /// Paddle displacement per steer command
    pub paddle_speed: f32,
    /// Velocity component magnitude at ball spawn/reset
    pub ball_base_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            initial_lives: INITIAL_LIVES,
            paddle_speed: PADDLE_SPEED,
            ball_base_speed: BALL_BASE_SPEED,
        }
    }
}

impl Tuning {
    const ENV_VAR: &'static str = "BRICKFALL_TUNING";

    /// Load overrides from the file named by `BRICKFALL_TUNING`, falling
    /// back to defaults on any failure. Tuning problems are never fatal.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        let tuning = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning overrides from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("ignoring unreadable tuning file {path}: {err}");
                Self::default()
            }
        };
        tuning.sanitize()
    }

    /// Clamp overrides that would break the round: a playable round needs at
    /// least one life and a moving ball.
    fn sanitize(mut self) -> Self {
        if self.initial_lives == 0 {
            log::warn!("initial_lives 0 is unplayable, using 1");
            self.initial_lives = 1;
        }
        if !(self.ball_base_speed > 0.0) {
            log::warn!(
                "ball_base_speed {} is unplayable, using {BALL_BASE_SPEED}",
                self.ball_base_speed
            );
            self.ball_base_speed = BALL_BASE_SPEED;
        }
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
