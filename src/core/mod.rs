//! Core building blocks: board geometry, input, RNG, configuration.
//!
//! Everything here is game-rule-agnostic; the engine layers the sliding and
//! matching rules on top.

pub mod action;
pub mod config;
pub mod position;
pub mod rng;

pub use action::{Direction, InputEvent};
pub use config::GameConfig;
pub use position::{Position, Vector};
pub use rng::GameRng;
