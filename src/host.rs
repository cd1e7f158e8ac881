//! Boundary to the rendering/input host
//!
//! The core never draws or reads devices itself. Redraws go out through the
//! [`Frontend`] trait; input comes in as [`Command`]s queued from any thread
//! and drained once at the start of each tick. Draining between ticks keeps
//! the simulation free of mid-tick reentrancy from input callbacks.

use std::sync::mpsc::{Receiver, Sender, channel};

use crate::sim::{Ball, Brick, Outcome, Paddle, Steer, TickInput};

/// Draw requests the core makes of its host. All calls are idempotent
/// redraw requests; the host owns every visual decision.
pub trait Frontend {
    fn draw_entities(&mut self, paddle: &Paddle, ball: &Ball, bricks: &[Brick]);
    fn draw_hud(&mut self, score: u64, lives: u8);
    /// Called once per terminal transition with the final outcome and score
    fn draw_overlay(&mut self, outcome: Outcome, score: u64);
}

/// A queued input command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Restart,
    Exit,
}

/// Create the host-to-core command channel
pub fn input_channel() -> (InputHandle, InputQueue) {
    let (tx, rx) = channel();
    (InputHandle { tx }, InputQueue { rx })
}

/// Host-side sender. Cheap to clone, safe to call from any thread and in
/// any game state.
#[derive(Debug, Clone)]
pub struct InputHandle {
    tx: Sender<Command>,
}

impl InputHandle {
    pub fn move_left(&self) {
        let _ = self.tx.send(Command::MoveLeft);
    }

    pub fn move_right(&self) {
        let _ = self.tx.send(Command::MoveRight);
    }

    /// Request a restart; ignored by the core unless the round is terminal
    pub fn restart(&self) {
        let _ = self.tx.send(Command::Restart);
    }

    pub fn exit(&self) {
        let _ = self.tx.send(Command::Exit);
    }
}

/// Core-side receiver, drained synchronously once per tick
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<Command>,
}

impl InputQueue {
    /// Collapse everything queued since the last tick into one `TickInput`.
    /// Directional commands are idempotent per tick, so the last one wins;
    /// restart and exit latch for the tick.
    pub fn drain(&self) -> TickInput {
        let mut input = TickInput::default();
        for command in self.rx.try_iter() {
            match command {
                Command::MoveLeft => input.steer = Some(Steer::Left),
                Command::MoveRight => input.steer = Some(Steer::Right),
                Command::Restart => input.restart = true,
                Command::Exit => input.exit = true,
            }
        }
        input
    }
}
