//! Per-frame simulation step
//!
//! One `tick` advances every ball in sequence order and then recomputes the
//! score. Grid mutation is immediately visible, so a ball stepped later in a
//! tick observes captures made earlier in that same tick. That ordering is
//! part of the observable contract.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::grid::Grid;
use super::state::{Ball, SimState};
use crate::consts::*;

/// Advance the simulation by one frame. No-op unless Running.
pub fn tick(state: &mut SimState) {
    if !state.is_running() {
        return;
    }
    state.time_ticks += 1;

    for ball in &mut state.balls {
        step_ball(ball, &mut state.grid, &mut state.rng);
    }

    state.score = state.grid.score();
}

/// Advance a single ball by one step.
///
/// In order: move to the tentative position, run the capture scan (at most
/// one cell flips, first sample angle wins), bounce off the canvas margins,
/// jitter, clamp. A capture flip and a wall flip on the same axis in the
/// same step cancel each other; that double negation is intended behavior.
pub fn step_ball(ball: &mut Ball, grid: &mut Grid, rng: &mut Pcg32) {
    let nx = ball.pos.x + ball.vel.x;
    let ny = ball.pos.y + ball.vel.y;
    let mut vx = ball.vel.x;
    let mut vy = ball.vel.y;

    // Capture scan: sample the ball's rim at 8 evenly spaced angles around
    // the tentative position. The first in-bounds sample on an opposing
    // cell claims that cell and reflects one axis.
    for k in 0..SCAN_POINTS {
        let angle = k as f32 * (TAU / SCAN_POINTS as f32);
        let (sin, cos) = angle.sin_cos();
        let sample = Vec2::new(nx + cos * BALL_RADIUS, ny + sin * BALL_RADIUS);
        let Some((row, col)) = grid.cell_at(sample) else {
            continue;
        };
        if grid.get(row, col) != ball.owner {
            grid.set(row, col, ball.owner);
            // Reflect the axis the sample direction leans toward; ties go
            // to the x axis.
            if cos.abs() >= sin.abs() {
                vx = -vx;
            } else {
                vy = -vy;
            }
            break;
        }
    }

    // Wall bounce against the canvas margins, one axis at a time, using the
    // tentative position and the possibly already-flipped velocity.
    if nx + vx > CANVAS_WIDTH - BALL_RADIUS || nx + vx < BALL_RADIUS {
        vx = -vx;
    }
    if ny + vy > CANVAS_HEIGHT - BALL_RADIUS || ny + vy < BALL_RADIUS {
        vy = -vy;
    }

    // Jitter every step so the trajectory never settles into a fixed orbit
    vx += rng.random_range(-SPEED_JITTER..=SPEED_JITTER);
    vy += rng.random_range(-SPEED_JITTER..=SPEED_JITTER);

    ball.pos = Vec2::new(nx, ny);
    ball.vel = Vec2::new(clamp_speed(vx), clamp_speed(vy));
}

/// Clamp one velocity component back into [MIN_SPEED, MAX_SPEED] by
/// magnitude, keeping its sign. A non-positive component clamps into the
/// negative band, so zero comes out as -MIN_SPEED.
#[inline]
fn clamp_speed(v: f32) -> f32 {
    if v > 0.0 {
        v.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        v.clamp(-MAX_SPEED, -MIN_SPEED)
    }
}
