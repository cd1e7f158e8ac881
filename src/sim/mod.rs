//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable brick scan order (layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rules;
pub mod state;
pub mod tick;

pub use collision::{TickEvents, resolve};
pub use state::{Ball, Brick, Outcome, Paddle, Round, brick_grid};
pub use tick::{Steer, TickInput, tick};
