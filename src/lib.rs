//! Pong Wars - a day/night territorial capture simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid ownership, ball physics, scoring)
//! - `clock`: Tick scheduling decoupled from any rendering runtime
//!
//! Rendering is an external collaborator: it consumes the read-only
//! snapshot exposed by [`sim::SimState::snapshot`] and never reaches into
//! the simulation directly.

pub mod clock;
pub mod sim;

pub use clock::{FrameClock, ManualTicks, TickSource};
pub use sim::{Ball, Grid, Owner, Phase, Score, SimState, tick};

/// Game configuration constants
pub mod consts {
    /// Grid dimensions in cells
    pub const GRID_ROWS: usize = 24;
    pub const GRID_COLS: usize = 24;

    /// Cell edge length in canvas pixels
    pub const SQUARE_SIZE: f32 = 25.0;

    /// Canvas dimensions derived from the grid
    pub const CANVAS_WIDTH: f32 = GRID_COLS as f32 * SQUARE_SIZE;
    pub const CANVAS_HEIGHT: f32 = GRID_ROWS as f32 * SQUARE_SIZE;

    /// Ball radius - half a cell. Doubles as the wall margin: the ball
    /// center never passes closer than this to a canvas edge.
    pub const BALL_RADIUS: f32 = SQUARE_SIZE / 2.0;

    /// Per-axis speed bounds, re-enforced after every step
    pub const MIN_SPEED: f32 = 5.0;
    pub const MAX_SPEED: f32 = 10.0;

    /// Per-axis uniform jitter bound, applied every step
    pub const SPEED_JITTER: f32 = 0.01;

    /// Rim samples per capture scan
    pub const SCAN_POINTS: u32 = 8;

    /// Cell palette
    pub const DAY_COLOR: &str = "#fffff0";
    pub const NIGHT_COLOR: &str = "#111111";

    /// Ball palette (each ball is drawn in the opposing cell color)
    pub const DAY_BALL_COLOR: &str = "#111111";
    pub const NIGHT_BALL_COLOR: &str = "#fffff0";
}
