//! The move pipeline and game lifecycle.

pub mod manager;

pub use manager::{GameManager, MoveOutcome};
