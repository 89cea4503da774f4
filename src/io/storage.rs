//! Persistence: the resumable game snapshot and the best score.

use serde::{Deserialize, Serialize};

use crate::board::SavedGrid;

/// Serialized game snapshot, shaped for JSON consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub grid: SavedGrid,
    pub score: u32,
    pub over: bool,
    pub won: bool,
    pub keep_playing: bool,
    pub word: String,
}

/// Synchronous persistence for the snapshot and best score.
///
/// Absence of a snapshot means "no game in progress"; the best score
/// defaults to zero.
pub trait Storage: Send + Sync {
    /// The saved game, if one exists.
    fn game_state(&self) -> Option<SavedGame>;

    /// Persist the snapshot.
    fn set_game_state(&mut self, state: &SavedGame);

    /// Forget the snapshot.
    fn clear_game_state(&mut self);

    /// Best score seen so far.
    fn best_score(&self) -> u32;

    /// Record a new best score.
    fn set_best_score(&mut self, score: u32);
}

/// In-memory storage. State lives as long as the value does.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    game_state: Option<SavedGame>,
    best_score: u32,
}

impl MemoryStorage {
    /// Empty storage: no snapshot, zero best score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage primed with a snapshot, as if a game had been saved.
    #[must_use]
    pub fn with_game_state(state: SavedGame) -> Self {
        Self {
            game_state: Some(state),
            best_score: 0,
        }
    }
}

impl Storage for MemoryStorage {
    fn game_state(&self) -> Option<SavedGame> {
        self.game_state.clone()
    }

    fn set_game_state(&mut self, state: &SavedGame) {
        self.game_state = Some(state.clone());
    }

    fn clear_game_state(&mut self) {
        self.game_state = None;
    }

    fn best_score(&self) -> u32 {
        self.best_score
    }

    fn set_best_score(&mut self, score: u32) {
        self.best_score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SavedGame {
        SavedGame {
            grid: SavedGrid {
                size: 4,
                cells: vec![vec![None; 4]; 4],
            },
            score: 700,
            over: false,
            won: false,
            keep_playing: false,
            word: "none".to_string(),
        }
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.game_state().is_none());
        assert_eq!(storage.best_score(), 0);

        storage.set_game_state(&snapshot());
        assert_eq!(storage.game_state().unwrap().score, 700);

        storage.clear_game_state();
        assert!(storage.game_state().is_none());
    }

    #[test]
    fn test_best_score() {
        let mut storage = MemoryStorage::new();
        storage.set_best_score(1500);
        assert_eq!(storage.best_score(), 1500);
    }

    #[test]
    fn test_with_game_state() {
        let storage = MemoryStorage::with_game_state(snapshot());
        assert_eq!(storage.game_state().unwrap().score, 700);
        assert_eq!(storage.best_score(), 0);
    }

    #[test]
    fn test_saved_game_json_uses_camel_case() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(json["keepPlaying"], false);
        assert!(json.get("keep_playing").is_none());
        assert_eq!(json["grid"]["size"], 4);
    }
}
