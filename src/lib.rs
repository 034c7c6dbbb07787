//! Arcade (workspace facade crate).
//!
//! Re-exports the workspace crates as `arcade::{core,engine,input,term,types}` so
//! hosts and integration tests depend on a single package.

pub use arcade_core as core;
pub use arcade_engine as engine;
pub use arcade_input as input;
pub use arcade_term as term;
pub use arcade_types as types;
