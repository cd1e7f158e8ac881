//! Fixed timestep simulation tick
//!
//! One tick: steer the paddle from the drained input, move the ball, resolve
//! collisions, apply the results to the round. The three phases complete
//! before the caller reads any state, so a tick is atomic from the host's
//! point of view.

use super::collision::{self, TickEvents};
use super::rules;
use super::state::{Outcome, Round};

/// Paddle steer direction for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// One paddle displacement this tick; last queued command wins
    pub steer: Option<Steer>,
    /// Restart request - only honored from a terminal state
    pub restart: bool,
    /// Exit request - honored in any state, handled by the loop
    pub exit: bool,
}

/// Advance the round by one fixed timestep.
///
/// Terminal rounds do not tick; the loop keeps draining input and waits for
/// restart or exit.
pub fn tick(round: &mut Round, input: &TickInput) -> TickEvents {
    if round.outcome != Outcome::Playing {
        return TickEvents::default();
    }

    round.tick_count += 1;

    match input.steer {
        Some(Steer::Left) => round.paddle.slide(-1.0),
        Some(Steer::Right) => round.paddle.slide(1.0),
        None => {}
    }

    round.ball.advance();
    let events = collision::resolve(&mut round.ball, &round.paddle, &mut round.bricks);
    rules::apply(round, &events);

    events
}
