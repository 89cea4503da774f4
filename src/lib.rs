//! # wordshift
//!
//! Rules engine for a sliding letter-tile word game.
//!
//! Tiles carry letters instead of numbers. A move slides every tile as far
//! as it goes in one direction; full rows and columns that spell a
//! dictionary word clear and score. Tiles never combine.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, input, or persistence built in. Display
//!    and storage are injected behind the `Actuator` and `Storage` traits.
//!
//! 2. **Deterministic**: All randomness flows through a seeded `GameRng`.
//!    The same seed and move sequence always produce the same game.
//!
//! 3. **Configuration Over Convention**: Board size, start tile count, and
//!    spawn probability come from `GameConfig`, not constants.
//!
//! ## Architecture
//!
//! - **Settle loop**: After the initial slide, matched lines clear and the
//!   remaining tiles re-slide until the board is stable.
//!
//! - **Pluggable dictionary**: Word lookup is a `WordSet` trait object, so
//!   games choose their own lexicon.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, RNG, configuration
//! - `board`: Grid and tile state
//! - `words`: Letter distribution, letter scores, dictionary lookup
//! - `io`: Actuator and storage seams plus serialized game state
//! - `engine`: The move pipeline and game lifecycle

pub mod core;
pub mod board;
pub mod words;
pub mod io;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Direction, InputEvent,
    GameConfig, GameRng,
    Position, Vector,
};

pub use crate::board::{Grid, SavedGrid, SavedTile, Tile};

pub use crate::words::{
    draw_letter, letter_for_roll, letter_points,
    Dictionary, WordSet,
};

pub use crate::io::{
    Actuator, NullActuator, Status,
    MemoryStorage, SavedGame, Storage,
};

pub use crate::engine::{GameManager, MoveOutcome};
