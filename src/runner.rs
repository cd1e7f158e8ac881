//! Fixed-cadence game loop
//!
//! Drives the simulation at the configured tick interval: drain input, tick,
//! request redraws, sleep until the next tick boundary. A terminal round
//! idles at the same cadence, draining input until restart or exit.

use std::thread;
use std::time::Instant;

use crate::host::{Frontend, InputQueue};
use crate::sim::{Outcome, Round, TickInput, tick};
use crate::tuning::Tuning;

/// Whether the loop keeps running after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Owns the round and the host connections for the lifetime of the process
pub struct GameLoop<F: Frontend> {
    round: Round,
    frontend: F,
    input: InputQueue,
}

impl<F: Frontend> GameLoop<F> {
    pub fn new(seed: u64, tuning: Tuning, frontend: F, input: InputQueue) -> Self {
        log::info!("new round, seed {seed}");
        Self {
            round: Round::new(seed, tuning),
            frontend,
            input,
        }
    }

    /// Run until the host requests exit
    pub fn run(&mut self) {
        let interval = self.round.tuning.tick_interval();
        let mut next_tick = Instant::now() + interval;

        loop {
            let input = self.input.drain();
            if self.process(&input) == LoopControl::Exit {
                break;
            }

            let now = Instant::now();
            if next_tick > now {
                thread::sleep(next_tick - now);
                next_tick += interval;
            } else {
                // Fell behind (host stall); resync instead of bursting
                next_tick = now + interval;
            }
        }

        log::info!("game loop exited, final score {}", self.round.score);
    }

    /// One loop iteration: tick while playing, otherwise wait for restart.
    /// The tick fully completes before any draw request goes out.
    fn process(&mut self, input: &TickInput) -> LoopControl {
        if input.exit {
            return LoopControl::Exit;
        }

        if self.round.outcome == Outcome::Playing {
            tick(&mut self.round, input);
            self.frontend.draw_hud(self.round.score, self.round.lives);
            self.frontend
                .draw_entities(&self.round.paddle, &self.round.ball, &self.round.bricks);
            if self.round.outcome != Outcome::Playing {
                self.frontend.draw_overlay(self.round.outcome, self.round.score);
            }
        } else if input.restart {
            self.round.restart();
            self.frontend.draw_hud(self.round.score, self.round.lives);
            self.frontend
                .draw_entities(&self.round.paddle, &self.round.ball, &self.round.bricks);
        }

        LoopControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::input_channel;
    use crate::sim::{Ball, Brick, Paddle};
    use glam::Vec2;

    /// Records draw requests for assertions
    #[derive(Default)]
    struct Recording {
        entity_draws: usize,
        hud: Vec<(u64, u8)>,
        overlays: Vec<(Outcome, u64)>,
    }

    impl Frontend for Recording {
        fn draw_entities(&mut self, _paddle: &Paddle, _ball: &Ball, _bricks: &[Brick]) {
            self.entity_draws += 1;
        }

        fn draw_hud(&mut self, score: u64, lives: u8) {
            self.hud.push((score, lives));
        }

        fn draw_overlay(&mut self, outcome: Outcome, score: u64) {
            self.overlays.push((outcome, score));
        }
    }

    fn game() -> GameLoop<Recording> {
        let (_handle, queue) = input_channel();
        GameLoop::new(7, Tuning::default(), Recording::default(), queue)
    }

    #[test]
    fn test_playing_tick_draws_hud_and_entities() {
        let mut game = game();
        let control = game.process(&TickInput::default());
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(game.frontend.entity_draws, 1);
        assert_eq!(game.frontend.hud, vec![(0, 3)]);
        assert!(game.frontend.overlays.is_empty());
    }

    #[test]
    fn test_exit_wins_over_everything() {
        let mut game = game();
        let input = TickInput {
            exit: true,
            restart: true,
            ..TickInput::default()
        };
        assert_eq!(game.process(&input), LoopControl::Exit);
        assert_eq!(game.frontend.entity_draws, 0);
    }

    #[test]
    fn test_overlay_drawn_once_per_terminal_transition() {
        let mut game = game();
        // Send the ball below the field with the last life
        game.round.lives = 1;
        game.round.ball.pos = Vec2::new(0.0, -295.0);
        game.round.ball.vel = Vec2::new(0.0, -3.0);

        game.process(&TickInput::default());
        assert_eq!(game.frontend.overlays.len(), 1);
        assert_eq!(game.frontend.overlays[0].0, Outcome::Lost);

        // Terminal idle ticks draw no further overlays
        game.process(&TickInput::default());
        game.process(&TickInput::default());
        assert_eq!(game.frontend.overlays.len(), 1);
    }

    #[test]
    fn test_restart_only_works_from_terminal_state() {
        let mut game = game();
        let restart = TickInput {
            restart: true,
            ..TickInput::default()
        };

        // Ignored while playing
        game.process(&restart);
        assert_eq!(game.round.outcome, Outcome::Playing);
        assert_eq!(game.round.tick_count, 1);

        // Honored once terminal
        game.round.lives = 1;
        game.round.ball.pos = Vec2::new(0.0, -295.0);
        game.round.ball.vel = Vec2::new(0.0, -3.0);
        game.process(&TickInput::default());
        assert_eq!(game.round.outcome, Outcome::Lost);

        game.process(&restart);
        assert_eq!(game.round.outcome, Outcome::Playing);
        assert_eq!(game.round.tick_count, 0);
        assert_eq!(game.round.lives, 3);
    }

    #[test]
    fn test_terminal_idle_without_restart_stays_terminal() {
        let mut game = game();
        game.round.lives = 1;
        game.round.ball.pos = Vec2::new(0.0, -295.0);
        game.round.ball.vel = Vec2::new(0.0, -3.0);
        game.process(&TickInput::default());

        let draws = game.frontend.entity_draws;
        game.process(&TickInput::default());
        assert_eq!(game.round.outcome, Outcome::Lost);
        // Idle ticks do not redraw
        assert_eq!(game.frontend.entity_draws, draws);
    }

    #[test]
    fn test_run_returns_on_exit_command() {
        let (handle, queue) = input_channel();
        let mut game = GameLoop::new(7, Tuning::default(), Recording::default(), queue);
        handle.move_right();
        handle.exit();
        // Exit is queued ahead of time, so run terminates on its first drain
        game.run();
    }
}
