//! Actuation: pushing state snapshots to a display layer.

use serde::{Deserialize, Serialize};

use crate::board::Grid;

/// Status published alongside the board after every state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub score: u32,
    pub over: bool,
    pub won: bool,
    pub best_score: u32,
    pub terminated: bool,
    /// Last matched word, or `"none"` before the first match.
    pub word: String,
}

/// Display layer the engine pushes to.
///
/// The engine calls `actuate` exactly once per state-changing operation;
/// moves that shift nothing do not actuate at all.
pub trait Actuator: Send + Sync {
    /// Present the board and status.
    fn actuate(&mut self, grid: &Grid, status: &Status);

    /// Clear any terminal (won/lost) message.
    fn continue_game(&mut self);
}

/// Actuator that ignores everything. Useful for headless simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullActuator;

impl Actuator for NullActuator {
    fn actuate(&mut self, _grid: &Grid, _status: &Status) {}

    fn continue_game(&mut self) {}
}
