//! Terminal rendering for the arcade games.
//!
//! Views turn engine snapshots into a [`Frame`] of styled lines; the
//! [`TerminalRenderer`] flushes frames to the terminal, rewriting only the
//! lines that changed since the previous draw. Views are pure so they can be
//! tested without a terminal.

pub mod frame;
pub mod renderer;
pub mod views;

pub use arcade_core as core;
pub use arcade_types as types;

pub use frame::{Frame, Line, Rgb, Span, Style};
pub use renderer::{changed_lines, encode_diff_into, encode_full_into, TerminalRenderer};
pub use views::{creature_view, snake_view, tetris_view, word_view};
