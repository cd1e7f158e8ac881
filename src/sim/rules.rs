//! Round state machine
//!
//! Applies one tick's collision events to the round: scoring, combo streak,
//! life accounting, and the terminal Won/Lost transitions. Runs exactly once
//! per tick, after the collision engine.

use crate::consts::*;

use super::collision::TickEvents;
use super::state::{Outcome, Round};

/// Apply a tick's events. No-op once the round is terminal.
pub fn apply(round: &mut Round, events: &TickEvents) {
    if round.outcome != Outcome::Playing {
        return;
    }

    if events.brick_destroyed.is_some() {
        round.score += BRICK_SCORE;
        round.combo += 1;
        if round.combo > COMBO_BONUS_THRESHOLD {
            round.score += round.combo as u64 * COMBO_BONUS;
            log::debug!("combo x{} bonus, score {}", round.combo, round.score);
        }
    } else {
        // Single-tick lookback: any tick without a brick hit breaks the streak
        round.combo = 0;
    }

    if events.life_lost {
        // Saturating: a misconfigured round can reach Playing with no lives
        // in reserve, and must retire cleanly on its first bottom crossing
        round.lives = round.lives.saturating_sub(1);
        if round.lives == 0 {
            round.outcome = Outcome::Lost;
            log::info!("round lost, final score {}", round.score);
        } else {
            log::debug!("life lost, {} remaining", round.lives);
            round.reset_ball();
        }
    }

    // Win check runs last so a round can be won on the same tick the final
    // brick falls
    if round.outcome == Outcome::Playing && round.all_bricks_destroyed() {
        round.outcome = Outcome::Won;
        log::info!("round won, final score {}", round.score);
    }
}
