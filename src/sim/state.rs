//! Simulation state and core entity types
//!
//! `SimState` owns everything the simulation needs: the grid, the balls in
//! their fixed step order, the phase flag, the cached score and the seeded
//! jitter RNG. It is also the external control surface: `start()` plus the
//! read-only `snapshot()` consumed by the renderer.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::grid::{Grid, Owner, Score};
use crate::consts::*;

/// Current phase of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Created but not started; nothing advances
    Stopped,
    /// Advancing one step per tick. There is no way back to Stopped.
    Running,
}

/// A ball entity
///
/// Mutated in place each tick; discarded and rebuilt on `start()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Cells this ball touches are flipped to this side
    pub owner: Owner,
    /// Display color only; never consulted by the simulation
    pub color: &'static str,
}

impl Ball {
    /// The Day ball: starts mid-left, claiming for Day
    pub fn day() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 4.0, CANVAS_HEIGHT / 2.0),
            vel: Vec2::new(8.0, -8.0),
            owner: Owner::Day,
            color: DAY_BALL_COLOR,
        }
    }

    /// The Night ball: starts mid-right, claiming for Night
    pub fn night() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 4.0 * 3.0, CANVAS_HEIGHT / 2.0),
            vel: Vec2::new(-8.0, 8.0),
            owner: Owner::Night,
            color: NIGHT_BALL_COLOR,
        }
    }

    /// The canonical starting pair, in step order
    pub fn starting_pair() -> Vec<Ball> {
        vec![Ball::day(), Ball::night()]
    }
}

/// Complete simulation state
///
/// Balls are stepped in `balls` order each tick and grid mutation is
/// immediately visible, so a later ball observes captures made earlier in
/// the same tick. That ordering is part of the observable contract.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility; the jitter stream derives from it
    pub seed: u64,
    pub grid: Grid,
    pub balls: Vec<Ball>,
    pub phase: Phase,
    /// Cell counts, recomputed from the grid after every tick
    pub score: Score,
    /// Ticks advanced since the last `start()`
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Create a stopped simulation in the canonical starting configuration
    pub fn new(seed: u64) -> Self {
        let grid = Grid::new();
        let score = grid.score();
        Self {
            seed,
            grid,
            balls: Ball::starting_pair(),
            phase: Phase::Stopped,
            score,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start the simulation. Rebuilds the grid and balls from the canonical
    /// starting configuration, then transitions to Running. A no-op while
    /// already Running.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.grid.reset();
        self.balls = Ball::starting_pair();
        self.score = self.grid.score();
        self.time_ticks = 0;
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.phase = Phase::Running;
        log::debug!("simulation started (seed {})", self.seed);
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Read-only view for the rendering collaborator
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.grid.cells().to_vec(),
            balls: self
                .balls
                .iter()
                .map(|b| BallView {
                    x: b.pos.x,
                    y: b.pos.y,
                    color: b.color,
                })
                .collect(),
            score: self.score,
            running: self.is_running(),
        }
    }
}

/// A ball as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub color: &'static str,
}

/// Owned snapshot of everything the renderer draws: row-major cell owners,
/// ball positions and colors, the score pair and the running flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub cells: Vec<Owner>,
    pub balls: Vec<BallView>,
    pub score: Score,
    pub running: bool,
}
