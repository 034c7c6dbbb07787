//! Core game logic - pure, deterministic, and testable
//!
//! Four self-contained engines, each a state value plus transitions. Nothing
//! here touches the terminal, the clock or a global RNG: randomness comes in
//! through [`RandomSource`], time through explicit `tick()` calls.
//!
//! # Module Structure
//!
//! - [`rng`]: randomness port, LCG and scripted sources
//! - [`corpus`]: word list and creature dex loading
//! - [`word`]: five-letter guessing with duplicate-safe feedback
//! - [`creature`]: creature guessing with per-attribute closeness
//! - [`snake`]: grid snake with growth and collision
//! - [`tetris`]: falling pieces, line clears and levels
//! - [`snapshot`]: read-only state views for hosts
//!
//! # Example
//!
//! ```
//! use arcade_core::{DictionaryPolicy, ScriptedRng, WordEngine, WordList};
//! use arcade_core::types::WordOutcome;
//!
//! let words = WordList::new(["CRANE", "SPEED", "PLANE"]);
//! let mut game = WordEngine::new(words, DictionaryPolicy::Permissive, ScriptedRng::picking(&[1], 3))
//!     .unwrap();
//!
//! game.submit_guess("crane").unwrap();
//! game.submit_guess("speed").unwrap();
//! assert_eq!(game.outcome(), WordOutcome::Won);
//! assert_eq!(game.reported_score(), Some(5));
//! ```

pub mod corpus;
pub mod creature;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod tetris;
pub mod word;

pub use arcade_types as types;

// Re-export commonly used types for convenience
pub use corpus::{CorpusError, Creature, CreatureDex, WordList};
pub use creature::{CreatureEngine, GuessResult, NumericVerdict};
pub use rng::{pick_index, RandomSource, ScriptedRng, SimpleRng};
pub use snake::{Point, SnakeEngine};
pub use snapshot::{ActivePiece, CreatureSnapshot, SnakeSnapshot, TetrisSnapshot, WordSnapshot};
pub use tetris::{Board, LockEvent, TetrisEngine, Tetromino};
pub use word::{evaluate_guess, Attempt, DictionaryPolicy, Feedback, Hint, WordEngine};
