//! Engine edges: actuation and persistence.
//!
//! Both are injected capabilities. The engine drives them; it never knows
//! whether the other side is a browser, a terminal, or a test recorder.

pub mod actuator;
pub mod storage;

pub use actuator::{Actuator, NullActuator, Status};
pub use storage::{MemoryStorage, SavedGame, Storage};
