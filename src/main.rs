//! Pong Wars entry point
//!
//! Headless demo driver: runs the simulation at display rate for a fixed
//! span, logs the score as it shifts, and emits the final renderer
//! snapshot as JSON on stdout.

use pong_wars::clock::{FrameClock, TickSource};
use pong_wars::sim::{SimState, tick};

/// Demo length in frames (30 seconds at 60 fps)
const DEMO_TICKS: u64 = 30 * 60;

fn main() {
    env_logger::init();

    let seed: u64 = rand::random();
    log::info!("pong-wars starting (seed {seed})");

    let mut state = SimState::new(seed);
    state.start();

    let mut clock = FrameClock::new(60);
    clock.drive(|| {
        tick(&mut state);
        if state.time_ticks % 60 == 0 {
            log::info!(
                "tick {:4}  day {:3}  night {:3}",
                state.time_ticks,
                state.score.day,
                state.score.night
            );
        }
        state.time_ticks < DEMO_TICKS
    });

    log::info!(
        "finished: day {} night {}",
        state.score.day,
        state.score.night
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
