//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into the intent enums from `arcade-types`.
//! Real-time games get one key per intent; the guessing games collect a line
//! of text in a [`TextEntry`] and turn it into a guess on Enter.

pub mod map;
pub mod text;

pub use arcade_types as types;

pub use map::{should_quit, snake_intent, tetris_intent};
pub use text::{EntryEvent, TextEntry};
