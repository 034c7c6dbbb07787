//! Tetris module - falling pieces, line clears and levels
//!
//! The engine ties together the board, piece matrices, RNG and scoring.
//! Gravity is driven by the host calling [`TetrisEngine::tick`] every
//! [`TetrisEngine::drop_interval_ms`]; the engine itself keeps no clock.

mod board;
mod pieces;
mod scoring;

pub use board::Board;
pub use pieces::{MinoOffset, Shape};
pub use scoring::{calculate_line_score, drop_interval_ms, level_for_score};

use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::rng::{pick_index, RandomSource, SimpleRng};
use crate::snapshot::{ActivePiece, TetrisSnapshot};
use crate::types::{IntentError, PieceKind, Rotation, TetrisIntent, TetrisOutcome, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// New piece at the top-centre spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::for_kind(kind);
        Self {
            kind,
            rotation: Rotation::North,
            shape,
            x: (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
        }
    }

    /// Absolute board positions of the filled cells.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.shape
            .minos()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Every filled cell within horizontal bounds, above the floor, and off
    /// locked cells.
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| board.accepts(x, y))
    }
}

/// What happened at the last lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
}

/// Tetris game state
#[derive(Debug, Clone)]
pub struct TetrisEngine<R = SimpleRng> {
    board: Board,
    active: Tetromino,
    score: u32,
    level: u32,
    lines: u32,
    outcome: TetrisOutcome,
    last_event: Option<LockEvent>,
    pieces_locked: u32,
    rng: R,
}

impl<R: RandomSource> TetrisEngine<R> {
    /// Empty board, one random piece at the spawn position.
    #[instrument(skip(rng))]
    pub fn new(mut rng: R) -> Self {
        let active = Tetromino::spawn(random_kind(&mut rng));
        debug!(kind = ?active.kind, "tetris game created");
        Self::from_parts(Board::new(), active, rng)
    }

    /// Resume from an explicit board and active piece.
    ///
    /// If the piece does not fit the board the game starts in `GameOver`.
    pub fn from_parts(board: Board, active: Tetromino, rng: R) -> Self {
        let outcome = if active.fits(&board) {
            TetrisOutcome::InProgress
        } else {
            TetrisOutcome::GameOver
        };
        Self {
            board,
            active,
            score: 0,
            level: 1,
            lines: 0,
            outcome,
            last_event: None,
            pieces_locked: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Rows cleared since the game started.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn outcome(&self) -> TetrisOutcome {
        self.outcome
    }

    pub fn paused(&self) -> bool {
        self.outcome == TetrisOutcome::Paused
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome == TetrisOutcome::GameOver
    }

    /// Gravity interval at the current level.
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Row the active piece would land on if hard dropped.
    pub fn ghost_y(&self) -> i8 {
        let mut piece = self.active;
        while piece.shifted(0, 1).fits(&self.board) {
            piece = piece.shifted(0, 1);
        }
        piece.y
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    fn ensure_playing(&self) -> Result<(), IntentError> {
        match self.outcome {
            TetrisOutcome::InProgress => Ok(()),
            TetrisOutcome::Paused => Err(IntentError::Paused),
            TetrisOutcome::GameOver => Err(IntentError::AlreadyTerminal),
        }
    }

    fn try_place(&mut self, candidate: Tetromino) -> Result<(), IntentError> {
        if !candidate.fits(&self.board) {
            return Err(IntentError::IllegalIntent);
        }
        self.active = candidate;
        Ok(())
    }

    /// Move one column left (`-1`) or right (`+1`).
    pub fn move_horizontal(&mut self, dx: i8) -> Result<(), IntentError> {
        self.ensure_playing()?;
        self.try_place(self.active.shifted(dx.signum(), 0))
    }

    /// Quarter turn clockwise in place.
    pub fn rotate(&mut self) -> Result<(), IntentError> {
        self.ensure_playing()?;
        self.try_place(self.active.rotated())
    }

    /// One row down. Never locks; locking is left to gravity.
    pub fn soft_drop(&mut self) -> Result<(), IntentError> {
        self.ensure_playing()?;
        self.try_place(self.active.shifted(0, 1))
    }

    /// Move to the lowest valid row. The piece locks on the next tick.
    pub fn hard_drop(&mut self) -> Result<(), IntentError> {
        self.ensure_playing()?;
        self.active.y = self.ghost_y();
        Ok(())
    }

    /// Suspend or resume gravity.
    pub fn toggle_pause(&mut self) -> Result<(), IntentError> {
        self.outcome = match self.outcome {
            TetrisOutcome::InProgress => TetrisOutcome::Paused,
            TetrisOutcome::Paused => TetrisOutcome::InProgress,
            TetrisOutcome::GameOver => return Err(IntentError::AlreadyTerminal),
        };
        debug!(paused = self.paused(), "tetris pause toggled");
        Ok(())
    }

    /// One gravity step. Returns `true` if the state changed.
    pub fn tick(&mut self) -> bool {
        if self.outcome != TetrisOutcome::InProgress {
            return false;
        }
        let down = self.active.shifted(0, 1);
        if down.fits(&self.board) {
            self.active = down;
        } else {
            self.lock_active();
        }
        true
    }

    fn lock_active(&mut self) {
        let piece = self.active;
        self.board.lock_cells(piece.cells(), piece.kind);
        self.pieces_locked += 1;

        let cleared = self.board.clear_full_rows().len();
        let points = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines += cleared as u32;
        self.level = level_for_score(self.score);
        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            points,
        });
        if cleared > 0 {
            debug!(cleared, points, score = self.score, level = self.level, "lines cleared");
        }

        self.active = Tetromino::spawn(random_kind(&mut self.rng));
        if !self.active.fits(&self.board) {
            self.outcome = TetrisOutcome::GameOver;
            info!(score = self.score, lines = self.lines, "tetris game over");
        }
    }

    /// Empty board, fresh piece, score 0, level 1.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = Tetromino::spawn(random_kind(&mut self.rng));
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.outcome = TetrisOutcome::InProgress;
        self.last_event = None;
        self.pieces_locked = 0;
        debug!("tetris restarted");
    }

    pub fn apply_intent(&mut self, intent: TetrisIntent) -> Result<(), IntentError> {
        match intent {
            TetrisIntent::MoveLeft => self.move_horizontal(-1),
            TetrisIntent::MoveRight => self.move_horizontal(1),
            TetrisIntent::Rotate => self.rotate(),
            TetrisIntent::SoftDrop => self.soft_drop(),
            TetrisIntent::HardDrop => self.hard_drop(),
            TetrisIntent::Pause => self.toggle_pause(),
            TetrisIntent::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    pub fn snapshot(&self) -> TetrisSnapshot {
        TetrisSnapshot {
            board: self.board.color_rows(),
            active: ActivePiece {
                kind: self.active.kind,
                rotation: self.active.rotation,
                x: self.active.x,
                y: self.active.y,
                cells: self.active.cells().to_vec(),
            },
            ghost_y: self.ghost_y(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            outcome: self.outcome,
            drop_interval_ms: self.drop_interval_ms(),
        }
    }
}

fn random_kind<R: RandomSource + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[pick_index(rng, PieceKind::ALL.len())]
}
