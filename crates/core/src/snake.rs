//! Snake module - grid movement, growth and collision
//!
//! The snake moves one cell per tick in its committed direction. Turns are
//! buffered and applied at the next tick, so a reversal check against the
//! committed direction is enough to stop the head folding back into the neck.
//!
//! Collision uses the strict rule: the new head may not land on any cell the
//! body occupied before the move, tail included.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::rng::{pick_index, RandomSource, SimpleRng};
use crate::snapshot::SnakeSnapshot;
use crate::types::{
    Direction, IntentError, SnakeIntent, SnakeOutcome, FOOD_PLACEMENT_ATTEMPTS, SNAKE_BOARD_SIZE,
    SNAKE_FOOD_SCORE, SNAKE_TICK_MS,
};

/// Grid cell as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub row: i8,
    pub col: i8,
}

impl Point {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Neighbouring cell in `dir`. May fall outside the board.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    pub fn in_bounds(self, size: u8) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as u8) < size && (self.col as u8) < size
    }
}

/// Pick a free cell for food.
///
/// Rejection sampling with a bounded number of probes, then a row-major scan
/// for the first free cell. `None` only when the body covers the board.
pub fn place_food<R: RandomSource + ?Sized>(
    size: u8,
    body: &VecDeque<Point>,
    rng: &mut R,
) -> Option<Point> {
    let cells = size as usize * size as usize;
    if body.len() >= cells {
        return None;
    }

    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let idx = pick_index(rng, cells);
        let p = Point::new((idx / size as usize) as i8, (idx % size as usize) as i8);
        if !body.contains(&p) {
            return Some(p);
        }
    }

    (0..size as i8)
        .flat_map(|row| (0..size as i8).map(move |col| Point::new(row, col)))
        .find(|p| !body.contains(p))
}

/// Snake game state.
#[derive(Debug, Clone)]
pub struct SnakeEngine<R = SimpleRng> {
    size: u8,
    /// Head first.
    body: VecDeque<Point>,
    /// Direction applied at the last tick.
    direction: Direction,
    /// Turn buffered for the next tick.
    pending: Option<Direction>,
    food: Option<Point>,
    score: u32,
    outcome: SnakeOutcome,
    ticks: u64,
    rng: R,
}

impl<R: RandomSource> SnakeEngine<R> {
    /// Default 8x8 board.
    pub fn new(rng: R) -> Self {
        Self::with_size(SNAKE_BOARD_SIZE, rng)
    }

    /// Square board of side `size` (at least 2, at most 64).
    #[instrument(skip(rng))]
    pub fn with_size(size: u8, rng: R) -> Self {
        let size = size.clamp(2, 64);
        let mut engine = Self {
            size,
            body: VecDeque::new(),
            direction: Direction::Right,
            pending: None,
            food: None,
            score: 0,
            outcome: SnakeOutcome::InProgress,
            ticks: 0,
            rng,
        };
        engine.reset_state();
        engine
    }

    /// Start from an explicit body (head first) and direction.
    ///
    /// Returns `None` if the body is empty, leaves the board, or repeats a cell.
    pub fn from_layout(size: u8, body: Vec<Point>, direction: Direction, rng: R) -> Option<Self> {
        if !(2..=64).contains(&size) || body.is_empty() || body.iter().any(|p| !p.in_bounds(size)) {
            return None;
        }
        for (i, p) in body.iter().enumerate() {
            if body[..i].contains(p) {
                return None;
            }
        }

        let mut engine = Self {
            size,
            body: body.into(),
            direction,
            pending: None,
            food: None,
            score: 0,
            outcome: SnakeOutcome::InProgress,
            ticks: 0,
            rng,
        };
        engine.food = place_food(engine.size, &engine.body, &mut engine.rng);
        if engine.food.is_none() {
            engine.outcome = SnakeOutcome::Won;
        }
        Some(engine)
    }

    fn reset_state(&mut self) {
        let mid = (self.size / 2) as i8;
        self.body.clear();
        self.body.push_back(Point::new(mid, mid));
        self.direction = Direction::Right;
        self.pending = None;
        self.score = 0;
        self.outcome = SnakeOutcome::InProgress;
        self.ticks = 0;
        self.food = place_food(self.size, &self.body, &mut self.rng);
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn head(&self) -> Point {
        // Body is never empty.
        self.body.front().copied().unwrap_or(Point::new(0, 0))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn outcome(&self) -> SnakeOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != SnakeOutcome::InProgress
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick_interval_ms(&self) -> u32 {
        SNAKE_TICK_MS
    }

    /// Buffer a turn for the next tick.
    ///
    /// Reversing onto the committed direction is rejected with the silent
    /// `IllegalIntent`.
    pub fn set_direction(&mut self, dir: Direction) -> Result<(), IntentError> {
        if self.is_terminal() {
            return Err(IntentError::AlreadyTerminal);
        }
        if dir == self.direction.opposite() {
            return Err(IntentError::IllegalIntent);
        }
        self.pending = Some(dir);
        Ok(())
    }

    /// Advance one step. Returns `true` if the state changed.
    pub fn tick(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }

        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }
        self.ticks += 1;

        let head = self.head().step(self.direction);
        if !head.in_bounds(self.size) || self.body.contains(&head) {
            self.outcome = SnakeOutcome::GameOver;
            info!(score = self.score, length = self.body.len(), "snake collided");
            return true;
        }

        self.body.push_front(head);
        if Some(head) == self.food {
            self.score += SNAKE_FOOD_SCORE;
            self.food = place_food(self.size, &self.body, &mut self.rng);
            debug!(score = self.score, length = self.body.len(), "snake ate");
            if self.food.is_none() {
                self.outcome = SnakeOutcome::Won;
                info!(score = self.score, "snake filled the board");
            }
        } else {
            self.body.pop_back();
        }

        true
    }

    pub fn restart(&mut self) {
        self.reset_state();
        debug!("snake restarted");
    }

    pub fn apply_intent(&mut self, intent: SnakeIntent) -> Result<(), IntentError> {
        match intent {
            SnakeIntent::Turn(dir) => self.set_direction(dir),
            SnakeIntent::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            size: self.size,
            body: self.body.iter().copied().collect(),
            direction: self.direction,
            food: self.food,
            score: self.score,
            outcome: self.outcome,
        }
    }
}
