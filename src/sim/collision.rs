//! Collision detection and response
//!
//! One tick's worth of axis-aligned collisions, resolved in a fixed order:
//! walls, then paddle, then bricks. Velocity and brick status are mutated in
//! place; everything the round state machine needs to know comes back as
//! events.

use crate::consts::*;

use super::state::{Ball, Brick, Paddle};

/// Events produced by one tick of collision resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub wall_bounce: bool,
    pub paddle_bounce: bool,
    /// Ball crossed the bottom bound - no bounce, caller decrements a life
    pub life_lost: bool,
    /// Layout index of the brick destroyed this tick, at most one
    pub brick_destroyed: Option<usize>,
}

/// Resolve one tick of collisions against the current entity state.
///
/// A life loss ends resolution for the tick: the ball is below the field, so
/// neither the paddle band nor any brick box can match it, and the caller is
/// about to reset or retire it anyway.
pub fn resolve(ball: &mut Ball, paddle: &Paddle, bricks: &mut [Brick]) -> TickEvents {
    let mut events = TickEvents::default();

    if resolve_walls(ball, &mut events) {
        return events;
    }
    resolve_paddle(ball, paddle, &mut events);
    resolve_bricks(ball, bricks, &mut events);

    events
}

/// Wall pass: top and side bounds invert the matching velocity component;
/// the bottom bound signals a lost life instead. Returns true on life loss.
///
/// Bounces are plain sign inversions without position correction. The speed
/// cap (7) stays below the ball radius (10), so a bounced ball cannot escape
/// the field before the inverted component carries it back inside.
fn resolve_walls(ball: &mut Ball, events: &mut TickEvents) -> bool {
    if ball.pos.y + ball.radius > FIELD_HALF_HEIGHT {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }

    if ball.pos.x + ball.radius > FIELD_HALF_WIDTH || ball.pos.x - ball.radius < -FIELD_HALF_WIDTH {
        ball.vel.x = -ball.vel.x;
        events.wall_bounce = true;
    }

    if ball.pos.y - ball.radius < -FIELD_HALF_HEIGHT {
        events.life_lost = true;
        return true;
    }

    false
}

/// Paddle pass: tested only inside a thin band around the paddle line, and
/// only across the paddle's width. At most one bounce per tick.
fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, events: &mut TickEvents) {
    let in_band = ball.pos.y > PADDLE_Y - PADDLE_BAND && ball.pos.y < PADDLE_Y + PADDLE_BAND;
    if !in_band || (ball.pos.x - paddle.x).abs() >= paddle.half_width {
        return;
    }

    events.paddle_bounce = true;
    ball.vel.y = ball.vel.y.abs();

    // Outgoing dx from the normalized hit offset, floored so the ball never
    // creeps along the vertical. The floor keeps the sign of the offset,
    // which makes dx jump between -3 and +3 around a dead-center hit; that
    // discontinuity is inherited behavior, kept as-is.
    let hit = ((ball.pos.x - paddle.x) / paddle.half_width).clamp(-1.0, 1.0);
    let deflected = hit * BOUNCE_DEFLECT_GAIN;
    ball.vel.x = if deflected.abs() < BOUNCE_MIN_SPEED {
        if hit < 0.0 {
            -BOUNCE_MIN_SPEED
        } else {
            BOUNCE_MIN_SPEED
        }
    } else {
        deflected
    };

    // Gradual difficulty ramp, per component, until each reaches the cap
    if ball.vel.x.abs() < SPEED_CAP {
        ball.vel.x *= SPEED_RAMP;
    }
    if ball.vel.y.abs() < SPEED_CAP {
        ball.vel.y *= SPEED_RAMP;
    }
}

/// Brick pass: scan in layout order, destroy the first live brick whose box
/// (expanded by the ball radius) contains the ball center, then stop. One
/// brick per tick - simultaneous overlaps are not resolved.
fn resolve_bricks(ball: &mut Ball, bricks: &mut [Brick], events: &mut TickEvents) {
    for (index, brick) in bricks.iter_mut().enumerate() {
        if brick.destroyed {
            continue;
        }
        let dx = (ball.pos.x - brick.pos.x).abs();
        let dy = (ball.pos.y - brick.pos.y).abs();
        if dx < brick.half_extent.x + ball.radius && dy < brick.half_extent.y + ball.radius {
            brick.destroyed = true;
            ball.vel.y = -ball.vel.y;
            events.brick_destroyed = Some(index);
            break;
        }
    }
}
