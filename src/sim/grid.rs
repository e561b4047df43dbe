//! Cell ownership grid and score tally
//!
//! The playfield is a fixed rectangle of cells, each owned by one side at
//! all times. Balls flip ownership one cell at a time; the score is just
//! the per-side cell count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The side currently controlling a cell (or claiming cells, for a ball)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Day,
    Night,
}

impl Owner {
    /// Cell fill color for this side
    pub fn cell_color(&self) -> &'static str {
        match self {
            Owner::Day => DAY_COLOR,
            Owner::Night => NIGHT_COLOR,
        }
    }
}

/// Per-side cell counts, derived from the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub day: u32,
    pub night: u32,
}

impl Score {
    /// Total cells counted; always equals the grid size
    pub fn total(&self) -> u32 {
        self.day + self.night
    }
}

/// Fixed-size rectangular grid of cell owners, row-major
///
/// Single-threaded mutation only. A `set` is visible to every subsequent
/// `get` in the same step; there is no buffering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Owner>,
}

impl Grid {
    /// Create a grid in the starting configuration: a vertical half-split,
    /// left half Day, right half Night.
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(GRID_ROWS * GRID_COLS);
        for _row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                cells.push(if col < GRID_COLS / 2 {
                    Owner::Day
                } else {
                    Owner::Night
                });
            }
        }
        Self { cells }
    }

    /// Reset to the starting configuration
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn index(row: usize, col: usize) -> usize {
        assert!(
            row < GRID_ROWS && col < GRID_COLS,
            "cell ({row}, {col}) out of bounds for {GRID_ROWS}x{GRID_COLS} grid"
        );
        row * GRID_COLS + col
    }

    /// Owner of the cell at (row, col). Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Owner {
        self.cells[Self::index(row, col)]
    }

    /// Hand the cell at (row, col) to `owner`. Panics if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, owner: Owner) {
        self.cells[Self::index(row, col)] = owner;
    }

    /// Map a canvas point to the cell containing it, or `None` if the
    /// point lies outside the grid (including negative coordinates).
    pub fn cell_at(&self, point: Vec2) -> Option<(usize, usize)> {
        let row = (point.y / SQUARE_SIZE).floor();
        let col = (point.x / SQUARE_SIZE).floor();
        if row < 0.0 || col < 0.0 || row >= GRID_ROWS as f32 || col >= GRID_COLS as f32 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Tally cell counts per side. Pure full-grid pass; the grid is small
    /// enough that incremental counting buys nothing.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for owner in &self.cells {
            match owner {
                Owner::Day => score.day += 1,
                Owner::Night => score.night += 1,
            }
        }
        score
    }

    /// Row-major view of all cell owners, for snapshots
    pub fn cells(&self) -> &[Owner] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
