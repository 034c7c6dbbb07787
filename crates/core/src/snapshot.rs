//! Snapshot module - read-only views of engine state for hosts
//!
//! Snapshots are plain owned data. Hosts render them, serialize them, or diff
//! consecutive ones; nothing in a snapshot points back into the engine.

use serde::Serialize;

use crate::creature::GuessResult;
use crate::snake::Point;
use crate::types::{
    CreatureOutcome, Direction, PieceKind, Rotation, SnakeOutcome, TetrisOutcome, WordOutcome,
    BOARD_HEIGHT, BOARD_WIDTH,
};
use crate::word::{Attempt, Hint};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSnapshot {
    pub attempts: Vec<Attempt>,
    pub outcome: WordOutcome,
    pub remaining_attempts: usize,
    pub hint: Option<Hint>,
    /// A hint may still be requested.
    pub hint_available: bool,
    pub score: Option<u32>,
    /// Only set once the game is over.
    pub revealed_target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatureSnapshot {
    pub guesses: Vec<GuessResult>,
    pub outcome: CreatureOutcome,
    pub score: Option<u32>,
    pub revealed_target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnakeSnapshot {
    pub size: u8,
    /// Head first.
    pub body: Vec<Point>,
    pub direction: Direction,
    pub food: Option<Point>,
    pub score: u32,
    pub outcome: SnakeOutcome,
}

impl SnakeSnapshot {
    /// Text grid: `@` head, `o` body, `*` food, `.` empty.
    pub fn grid(&self) -> Vec<String> {
        let size = self.size as usize;
        let mut rows = vec![vec!['.'; size]; size];
        if let Some(food) = self.food {
            rows[food.row as usize][food.col as usize] = '*';
        }
        for (i, p) in self.body.iter().enumerate() {
            rows[p.row as usize][p.col as usize] = if i == 0 { '@' } else { 'o' };
        }
        rows.into_iter().map(|r| r.into_iter().collect()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute `(x, y)` of the filled cells; y may be negative.
    pub cells: Vec<(i8, i8)>,
}

/// Board colour tags row by row (0 = empty, 1..=7 piece kind).
pub type ColorGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TetrisSnapshot {
    /// Locked cells only.
    pub board: ColorGrid,
    pub active: ActivePiece,
    pub ghost_y: i8,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub outcome: TetrisOutcome,
    pub drop_interval_ms: u32,
}

impl TetrisSnapshot {
    /// Locked cells with the active piece drawn on top.
    pub fn composite(&self) -> ColorGrid {
        let mut grid = self.board;
        let tag = self.active.kind.color_index();
        for &(x, y) in &self.active.cells {
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                grid[y as usize][x as usize] = tag;
            }
        }
        grid
    }

    /// Cells of the landing preview, excluding cells the active piece covers.
    pub fn ghost_cells(&self) -> Vec<(i8, i8)> {
        let dy = self.ghost_y - self.active.y;
        self.active
            .cells
            .iter()
            .map(|&(x, y)| (x, y + dy))
            .filter(|c| dy > 0 && !self.active.cells.contains(c))
            .collect()
    }
}
