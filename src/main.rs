//! Brickfall entry point
//!
//! Wires the core loop to a minimal console host: stdin lines become input
//! commands, draw requests become log lines. A graphical host would replace
//! this file only.

use std::io::BufRead;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use brickfall::sim::{Ball, Brick, Outcome, Paddle};
use brickfall::{Frontend, GameLoop, InputHandle, Tuning, input_channel};

/// Console frontend: HUD changes and overlays as log lines, entity redraws
/// at trace level only
#[derive(Default)]
struct ConsoleFrontend {
    last_hud: Option<(u64, u8)>,
}

impl Frontend for ConsoleFrontend {
    fn draw_entities(&mut self, paddle: &Paddle, ball: &Ball, _bricks: &[Brick]) {
        log::trace!(
            "paddle x {:.1}, ball ({:.1}, {:.1})",
            paddle.x,
            ball.pos.x,
            ball.pos.y
        );
    }

    fn draw_hud(&mut self, score: u64, lives: u8) {
        // Redraw requests arrive every tick; only changes are worth a line
        if self.last_hud != Some((score, lives)) {
            self.last_hud = Some((score, lives));
            log::info!("score {score}, lives {lives}");
        }
    }

    fn draw_overlay(&mut self, outcome: Outcome, score: u64) {
        let message = match outcome {
            Outcome::Won => "YOU WIN!",
            Outcome::Lost => "GAME OVER",
            Outcome::Playing => return,
        };
        log::info!("{message} - final score {score} ('r' to restart, 'q' to quit)");
    }
}

/// Map stdin lines to input commands until EOF or quit
fn spawn_stdin_reader(handle: InputHandle) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match line.trim() {
                "a" | "left" => handle.move_left(),
                "d" | "right" => handle.move_right(),
                "r" => handle.restart(),
                "q" | "quit" => {
                    handle.exit();
                    return;
                }
                "" => {}
                other => log::warn!("unknown command {other:?} (a/d/r/q)"),
            }
        }
        // stdin closed; shut the loop down cleanly
        handle.exit();
    });
}

fn main() {
    env_logger::init();

    let tuning = Tuning::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let (handle, queue) = input_channel();
    spawn_stdin_reader(handle);

    GameLoop::new(seed, tuning, ConsoleFrontend::default(), queue).run();
}
