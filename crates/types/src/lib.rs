//! Shared types - constants, enums and the intent error taxonomy
//!
//! Everything here is plain data. The engines in `arcade-core` own the rules;
//! this crate only names things so every layer (core, session, input, terminal
//! views) speaks the same vocabulary.
//!
//! # Game Constants
//!
//! | Constant | Value | Game |
//! |----------|-------|------|
//! | `WORD_LENGTH` | 5 | word |
//! | `MAX_ATTEMPTS` | 6 | word |
//! | `SNAKE_BOARD_SIZE` | 8 | snake |
//! | `SNAKE_TICK_MS` | 200 | snake |
//! | `SNAKE_FOOD_SCORE` | 10 | snake |
//! | `BOARD_WIDTH` x `BOARD_HEIGHT` | 10 x 20 | tetris |
//! | `BASE_DROP_MS` | 1000 | tetris |
//! | `POINTS_PER_LEVEL` | 1000 | tetris |
//!
//! # Examples
//!
//! ```
//! use arcade_types::{Direction, PieceKind};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::Left.delta(), (0, -1));
//! assert_eq!(PieceKind::T.color_index(), 3);
//! assert_eq!(PieceKind::from_color_index(3), Some(PieceKind::T));
//! ```

use serde::{Deserialize, Serialize};

mod error;

pub use error::IntentError;

// --- Word game ---

/// Letters per word.
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed before the word game is lost.
pub const MAX_ATTEMPTS: usize = 6;

// --- Creature game ---

/// Relative tolerance for a numeric attribute to count as `close` (10% of the target).
pub const NUMERIC_CLOSE_RATIO: f64 = 0.1;

// --- Snake ---

/// Side length of the default snake board.
pub const SNAKE_BOARD_SIZE: u8 = 8;

/// Fixed interval between snake ticks.
pub const SNAKE_TICK_MS: u32 = 200;

/// Points per food eaten.
pub const SNAKE_FOOD_SCORE: u32 = 10;

/// Random probes made before food placement falls back to a scan.
pub const FOOD_PLACEMENT_ATTEMPTS: u32 = 64;

// --- Tetris ---

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1.
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level.
pub const DROP_STEP_MS: u32 = 50;

/// Fastest gravity interval.
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// Score needed per level.
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Line clear scoring table, indexed by rows cleared at once.
///
/// Points are multiplied by the (1-based) level at the time of the clear.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
///
/// Order matches the colour tags used on the board: I=1, O=2, T=3, S=4, Z=5, J=6, L=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in colour-tag order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Colour tag stored in board snapshots (1..=7, 0 is empty).
    pub fn color_index(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::color_index`].
    pub fn from_color_index(index: u8) -> Option<Self> {
        match index {
            1..=7 => Some(Self::ALL[(index - 1) as usize]),
            _ => None,
        }
    }
}

/// Rotation state of the active piece.
///
/// The cycle goes North → East → South → West → North, one step per clockwise
/// quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Grid direction for the snake.
///
/// Deltas are `(row, column)`; rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step as `(d_row, d_col)`.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Per-letter verdict for a word guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterFeedback {
    /// Right letter, right position.
    Correct,
    /// Letter occurs at another unused target position.
    Present,
    Absent,
}

/// Three-tier verdict for one creature attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Closeness {
    Correct,
    Close,
    Far,
}

/// Where the target value sits relative to the guessed value.
///
/// Rendered as arrows by hosts; never affects [`Closeness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Higher,
    Lower,
    Equal,
}

/// Outcome of a word game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordOutcome {
    InProgress,
    Won,
    Lost,
}

/// Outcome of a creature guessing game. There is no losing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureOutcome {
    InProgress,
    Won,
}

/// Outcome of a snake game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnakeOutcome {
    InProgress,
    GameOver,
    /// The snake covers every cell of the board.
    Won,
}

/// Outcome of a tetris game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TetrisOutcome {
    InProgress,
    /// Gravity suspended by the player; resumable.
    Paused,
    GameOver,
}

/// Intents accepted by the word engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordIntent {
    Guess(String),
    Hint,
    Restart,
}

/// Intents accepted by the creature guessing engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatureIntent {
    Guess(String),
    Restart,
}

/// Intents accepted by the snake engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeIntent {
    Turn(Direction),
    Restart,
}

/// Intents accepted by the tetris engine
///
/// Used by both keyboard input and scripted hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisIntent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Move piece one cell down
    SoftDrop,
    /// Move piece to the lowest valid row (locks on the next gravity tick)
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Restart the game
    Restart,
}

/// A cell on the tetris board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(WORD_LENGTH, 5);
        assert_eq!(MAX_ATTEMPTS, 6);
        assert_eq!(SNAKE_BOARD_SIZE, 8);
        assert_eq!(SNAKE_TICK_MS, 200);
        assert_eq!(SNAKE_FOOD_SCORE, 10);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_INTERVAL_MIN_MS, 50);
    }

    #[test]
    fn direction_opposites_cancel() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn piece_colors_are_one_based() {
        let colors: Vec<u8> = PieceKind::ALL.iter().map(|k| k.color_index()).collect();
        assert_eq!(colors, vec![1, 2, 3, 4, 5, 6, 7]);
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_color_index(kind.color_index()), Some(kind));
        }
        assert_eq!(PieceKind::from_color_index(0), None);
    }
}
