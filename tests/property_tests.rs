//! Property tests for the move pipeline invariants.
//!
//! Random boards and move sequences check the rules that must hold for
//! every game: determinism, tile conservation, score monotonicity, and
//! silent dead moves.

use proptest::collection::{hash_set, vec};
use proptest::prelude::*;

use wordshift::board::{SavedGrid, SavedTile};
use wordshift::core::{Direction, GameConfig, Position};
use wordshift::engine::GameManager;
use wordshift::io::{MemoryStorage, NullActuator, SavedGame};
use wordshift::words::{letter_points, Dictionary, WordSet};

fn lexicon(words: &[&str]) -> Box<dyn WordSet> {
    Box::new(Dictionary::from_words(words.iter().copied()))
}

/// Snapshot holding an 'a' tile at every listed cell.
fn a_board(cells: &std::collections::HashSet<(usize, usize)>) -> SavedGame {
    let mut matrix = vec![vec![None; 4]; 4];
    for &(x, y) in cells {
        matrix[x][y] = Some(SavedTile {
            position: Position::new(x, y),
            value: 'a',
            point: letter_points('a'),
        });
    }
    SavedGame {
        grid: SavedGrid {
            size: 4,
            cells: matrix,
        },
        score: 0,
        over: false,
        won: false,
        keep_playing: false,
        word: "none".to_string(),
    }
}

fn direction() -> impl Strategy<Value = Direction> {
    (0u8..4).prop_map(|d| Direction::from_u8(d).unwrap())
}

proptest! {
    /// The same seed and inputs always produce the same game.
    #[test]
    fn prop_same_seed_same_game(seed: u64, moves in vec(direction(), 1..16)) {
        let play = || {
            let mut manager = GameManager::new(
                GameConfig::default(),
                lexicon(&["tea", "eat", "rate", "ears"]),
                NullActuator,
                MemoryStorage::new(),
                seed,
            );
            for &direction in &moves {
                manager.apply_move(direction);
            }
            manager.serialize()
        };

        prop_assert_eq!(play(), play());
    }

    /// Tiles are only created by spawns and only destroyed by cleared
    /// lines; every move balances the books.
    #[test]
    fn prop_tile_conservation(seed: u64, moves in vec(direction(), 1..16)) {
        let mut manager = GameManager::new(
            GameConfig::default(),
            lexicon(&["tea", "eat", "rate", "ears"]),
            NullActuator,
            MemoryStorage::new(),
            seed,
        );

        for &direction in &moves {
            let before = manager.grid().tile_count();
            let outcome = manager.apply_move(direction);
            let expected =
                before + usize::from(outcome.spawned) - 4 * outcome.words.len();
            prop_assert_eq!(manager.grid().tile_count(), expected);
        }
    }

    /// The score only rises, and it rises exactly when words clear.
    #[test]
    fn prop_score_rises_only_on_words(
        cells in hash_set((0usize..4, 0usize..4), 1..12),
        moves in vec(direction(), 1..12),
    ) {
        let mut manager = GameManager::new(
            GameConfig::new(4).with_start_tiles(0).with_spawn_chance(0.0),
            lexicon(&["aaaa"]),
            NullActuator,
            MemoryStorage::with_game_state(a_board(&cells)),
            99,
        );

        for &direction in &moves {
            let before = manager.score();
            let outcome = manager.apply_move(direction);
            prop_assert_eq!(outcome.score_delta, manager.score() - before);
            if outcome.words.is_empty() {
                prop_assert_eq!(outcome.score_delta, 0);
            } else {
                // Four tiles per cleared line, at least one point each.
                prop_assert!(outcome.score_delta >= 400 * outcome.words.len() as u32);
            }
        }
    }

    /// A move that shifts nothing leaves the whole game untouched.
    #[test]
    fn prop_dead_move_changes_nothing(seed: u64, moves in vec(direction(), 1..16)) {
        let mut manager = GameManager::new(
            GameConfig::default(),
            lexicon(&[]),
            NullActuator,
            MemoryStorage::new(),
            seed,
        );

        for &direction in &moves {
            let before = manager.serialize();
            let outcome = manager.apply_move(direction);
            if !outcome.moved {
                prop_assert_eq!(manager.serialize(), before.clone());
                prop_assert_eq!(outcome.settle_passes, 0);
                prop_assert!(!outcome.spawned);
            } else {
                prop_assert!(outcome.settle_passes >= 1);
                // Settling past the first pass takes a cleared word.
                prop_assert!(
                    outcome.settle_passes as usize <= outcome.words.len() + 1
                );
            }
        }
    }

    /// Spawned tiles are always lowercase letters with matching points,
    /// and the board never overflows.
    #[test]
    fn prop_tiles_stay_well_formed(seed: u64, moves in vec(direction(), 1..16)) {
        let mut manager = GameManager::new(
            GameConfig::default(),
            lexicon(&[]),
            NullActuator,
            MemoryStorage::new(),
            seed,
        );

        for &direction in &moves {
            manager.apply_move(direction);
            prop_assert!(manager.grid().tile_count() <= 16);
            let mut well_formed = true;
            manager.grid().each_cell(|x, y, tile| {
                if let Some(tile) = tile {
                    well_formed &= tile.value.is_ascii_lowercase();
                    well_formed &= tile.point == letter_points(tile.value);
                    well_formed &= tile.position == Position::new(x, y);
                }
            });
            prop_assert!(well_formed);
        }
    }
}
