//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock dependence inside a step
//! - Seeded RNG only
//! - Stable ball iteration order
//! - No rendering or platform dependencies

pub mod grid;
pub mod state;
pub mod tick;

pub use grid::{Grid, Owner, Score};
pub use state::{Ball, BallView, Phase, SimState, Snapshot};
pub use tick::{step_ball, tick};
