//! Engine hosting layer
//!
//! Sits between the pure engines in `arcade-core` and a concrete host (the
//! terminal binary, tests, scripted drivers):
//!
//! - [`Engine`] / [`TimedEngine`]: one surface over all four games
//! - [`Session`]: intent queue plus tick clock for one running game
//! - [`HostConfig`]: environment-driven settings and corpus loading

pub mod clock;
pub mod config;
pub mod session;
pub mod traits;

pub use arcade_core as core;
pub use arcade_types as types;

pub use clock::TickClock;
pub use config::HostConfig;
pub use session::{Session, StepReport};
pub use traits::{Engine, TimedEngine};
