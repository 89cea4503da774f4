//! Game lifecycle and move resolution.
//!
//! `GameManager` owns the board and drives the full move pipeline:
//!
//! 1. Slide every tile as far as it goes in the chosen direction.
//! 2. Settle: clear matched words and re-slide until nothing moves.
//! 3. Maybe spawn a tile, then run one final match check.
//! 4. Detect game over, persist, and actuate.
//!
//! Moves that shift nothing have no side effects at all: no spawn, no
//! persistence, no actuation.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::board::{Grid, Tile};
use crate::core::{Direction, GameConfig, GameRng, InputEvent, Position, Vector};
use crate::io::{Actuator, SavedGame, Status, Storage};
use crate::words::{draw_letter, letter_points, WordSet};

/// Word shown before anything has matched.
const NO_WORD: &str = "none";

/// Per-line score multiplier applied to the summed letter points.
const LINE_SCORE_MULTIPLIER: u32 = 100;

/// Traversal order for one move: edge-nearest tiles go first so each tile's
/// path is already clear when its turn comes.
struct Traversals {
    x: SmallVec<[usize; 8]>,
    y: SmallVec<[usize; 8]>,
}

impl Traversals {
    fn build(size: usize, vector: Vector) -> Self {
        let mut x: SmallVec<[usize; 8]> = (0..size).collect();
        let mut y: SmallVec<[usize; 8]> = (0..size).collect();
        if vector.dx == 1 {
            x.reverse();
        }
        if vector.dy == 1 {
            y.reverse();
        }
        Self { x, y }
    }
}

/// Summary of one `apply_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Did any tile change cells?
    pub moved: bool,

    /// Score gained by this move.
    pub score_delta: u32,

    /// Words cleared, in the order they matched.
    pub words: Vec<String>,

    /// Settle iterations (match check plus re-slide) the move took.
    pub settle_passes: u32,

    /// Was a new tile spawned?
    pub spawned: bool,

    /// Is the game lost after this move?
    pub over: bool,
}

/// The rules engine for one game.
///
/// Collaborators are injected: the dictionary as a boxed predicate, the
/// actuator and storage as generics so callers keep concrete access to
/// what they passed in.
pub struct GameManager<A: Actuator, S: Storage> {
    config: GameConfig,
    words: Box<dyn WordSet>,
    actuator: A,
    storage: S,
    rng: GameRng,
    grid: Grid,
    score: u32,
    over: bool,
    won: bool,
    keep_playing: bool,
    word: String,
}

impl<A: Actuator, S: Storage> GameManager<A, S> {
    /// Create a manager and set up the first game.
    ///
    /// Resumes from `storage` when it holds a snapshot, otherwise starts
    /// fresh with `config.start_tiles` random tiles. Either way the
    /// actuator receives the initial state before this returns.
    ///
    /// Panics when `config` cannot host a game: size below 2, start tiles
    /// beyond board capacity, or a spawn chance outside `[0, 1]`.
    pub fn new(
        config: GameConfig,
        words: Box<dyn WordSet>,
        actuator: A,
        storage: S,
        seed: u64,
    ) -> Self {
        assert!(config.size >= 2, "Board size must be at least 2");
        assert!(
            config.start_tiles <= config.size * config.size,
            "Start tiles must fit on the board"
        );
        assert!(
            (0.0..=1.0).contains(&config.spawn_chance),
            "Spawn chance must be in [0, 1]"
        );

        let mut manager = Self {
            grid: Grid::new(config.size),
            config,
            words,
            actuator,
            storage,
            rng: GameRng::new(seed),
            score: 0,
            over: false,
            won: false,
            keep_playing: false,
            word: NO_WORD.to_string(),
        };
        manager.setup();
        manager
    }

    /// Start over: drop the saved game and set up fresh.
    pub fn restart(&mut self) {
        self.storage.clear_game_state();
        self.actuator.continue_game();
        self.setup();
    }

    /// Keep playing past a win. Clears the terminal message.
    pub fn keep_playing(&mut self) {
        self.keep_playing = true;
        self.actuator.continue_game();
    }

    /// Lost, or won without choosing to continue.
    #[must_use]
    pub fn is_game_terminated(&self) -> bool {
        self.over || (self.won && !self.keep_playing)
    }

    /// Dispatch an input event. Returns the outcome for `Move` events.
    pub fn handle(&mut self, event: InputEvent) -> Option<MoveOutcome> {
        match event {
            InputEvent::Move(direction) => Some(self.apply_move(direction)),
            InputEvent::Restart => {
                self.restart();
                None
            }
            InputEvent::KeepPlaying => {
                self.keep_playing();
                None
            }
        }
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Has the game been lost?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Last matched word, or `"none"`.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The injected actuator.
    #[must_use]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// The injected storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Snapshot of the whole game.
    #[must_use]
    pub fn serialize(&self) -> SavedGame {
        SavedGame {
            grid: self.grid.serialize(),
            score: self.score,
            over: self.over,
            won: self.won,
            keep_playing: self.keep_playing,
            word: self.word.clone(),
        }
    }

    /// Slide every tile toward `direction` and resolve the consequences.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();
        if self.is_game_terminated() {
            return outcome;
        }

        let vector = direction.vector();
        let traversals = Traversals::build(self.grid.size(), vector);

        self.prepare_tiles();
        outcome.moved = self.slide_pass(&traversals, vector);

        if outcome.moved {
            let score_before = self.score;

            // Settle: clear words, re-slide into the gaps, repeat until a
            // pass moves nothing.
            loop {
                outcome.words.extend(self.check_match());
                outcome.settle_passes += 1;
                if !self.slide_pass(&traversals, vector) {
                    break;
                }
            }

            // A spawned tile can complete a line; it gets one match check
            // but no further slide.
            if self.rng.gen_bool(self.config.spawn_chance) {
                outcome.spawned = self.add_random_tile();
                outcome.words.extend(self.check_match());
            }

            if !self.moves_available() {
                self.over = true;
                debug!("board full at score {}; game over", self.score);
            }

            outcome.score_delta = self.score - score_before;
            outcome.over = self.over;
            self.actuate();
        }

        outcome
    }

    fn setup(&mut self) {
        if let Some(previous) = self.storage.game_state() {
            self.grid = Grid::from_saved(&previous.grid);
            self.score = previous.score;
            self.over = previous.over;
            self.won = previous.won;
            self.keep_playing = previous.keep_playing;
            self.word = previous.word;
            debug!("resumed game at score {}", self.score);
        } else {
            self.grid = Grid::new(self.config.size);
            self.score = 0;
            self.over = false;
            self.won = false;
            self.keep_playing = false;
            self.word = NO_WORD.to_string();
            self.add_start_tiles();
            debug!("new game (seed {})", self.rng.seed());
        }
        self.actuate();
    }

    fn add_start_tiles(&mut self) {
        for _ in 0..self.config.start_tiles {
            self.add_random_tile();
        }
    }

    /// Spawn a frequency-weighted letter at a random empty cell.
    ///
    /// Returns false, and changes nothing, when the board is full.
    fn add_random_tile(&mut self) -> bool {
        let Some(cell) = self.grid.random_available_cell(&mut self.rng) else {
            return false;
        };
        let letter = draw_letter(&mut self.rng);
        trace!("spawn '{}' at {}", letter, cell);
        self.grid
            .insert_tile(Tile::new(cell, letter, letter_points(letter)));
        true
    }

    /// Snapshot positions and drop merge markers before a move.
    fn prepare_tiles(&mut self) {
        self.grid.for_each_tile_mut(|tile| {
            tile.merged_from = None;
            tile.save_position();
        });
    }

    /// One full slide pass. Returns whether any tile changed cells.
    fn slide_pass(&mut self, traversals: &Traversals, vector: Vector) -> bool {
        let mut moved = false;
        for &x in &traversals.x {
            for &y in &traversals.y {
                let cell = Position::new(x, y);
                if self.grid.cell_occupied(cell) {
                    let farthest = self.farthest_position(cell, vector);
                    if farthest != cell {
                        self.grid.move_tile(cell, farthest);
                        moved = true;
                    }
                }
            }
        }
        moved
    }

    /// Last empty cell reachable from `cell` along `vector`.
    fn farthest_position(&self, cell: Position, vector: Vector) -> Position {
        let mut farthest = cell;
        while let Some(next) = farthest.offset(vector, self.grid.size()) {
            if !self.grid.cell_available(next) {
                break;
            }
            farthest = next;
        }
        farthest
    }

    /// Clear full lines that spell dictionary words. Returns the matched
    /// words in scan order.
    ///
    /// Lines with a fixed `x` are scanned first, then lines with a fixed
    /// `y`. Removals apply immediately, so later lines see earlier clears.
    fn check_match(&mut self) -> Vec<String> {
        let size = self.grid.size();
        let mut matched = Vec::new();

        for x in 0..size {
            if let Some(word) = self.line_word(|y| Position::new(x, y)) {
                self.clear_line(&word, |y| Position::new(x, y));
                matched.push(word);
            }
        }
        for y in 0..size {
            if let Some(word) = self.line_word(|x| Position::new(x, y)) {
                self.clear_line(&word, |x| Position::new(x, y));
                matched.push(word);
            }
        }

        matched
    }

    /// The word a full line spells, when it is gap-free and in the
    /// dictionary. `line` maps an index along the line to a cell.
    ///
    /// Letters are read from index 0 up to the first gap; anything shorter
    /// than the full line is never a candidate.
    fn line_word<F: Fn(usize) -> Position>(&self, line: F) -> Option<String> {
        let size = self.grid.size();
        let mut candidate = String::with_capacity(size);
        for i in 0..size {
            match self.grid.cell_content(line(i)) {
                Some(tile) => candidate.push(tile.value),
                None => break,
            }
        }
        if candidate.len() < size {
            return None;
        }
        trace!("full line '{}'", candidate);
        if self.words.has(&candidate) {
            Some(candidate)
        } else {
            None
        }
    }

    /// Remove a matched line, credit its score, and record the word.
    fn clear_line<F: Fn(usize) -> Position>(&mut self, word: &str, line: F) {
        let size = self.grid.size();
        let mut points = 0;
        for i in 0..size {
            if let Some(tile) = self.grid.remove_tile(line(i)) {
                points += tile.point;
            }
        }
        let gained = points * LINE_SCORE_MULTIPLIER;
        self.score += gained;
        self.word = word.to_string();
        debug!("matched '{}' for {} points", word, gained);
    }

    /// Any legal state change left? With tile combining disabled this is
    /// exactly "is there an empty cell".
    fn moves_available(&self) -> bool {
        self.grid.cells_available()
    }

    /// Persist and publish the current state.
    ///
    /// The best score only rises. The snapshot is cleared on game over
    /// (losses are not resumable) and rewritten otherwise.
    fn actuate(&mut self) {
        if self.storage.best_score() < self.score {
            self.storage.set_best_score(self.score);
        }

        if self.over {
            self.storage.clear_game_state();
        } else {
            let snapshot = self.serialize();
            self.storage.set_game_state(&snapshot);
        }

        let status = Status {
            score: self.score,
            over: self.over,
            won: self.won,
            best_score: self.storage.best_score(),
            terminated: self.is_game_terminated(),
            word: self.word.clone(),
        };
        self.actuator.actuate(&self.grid, &status);
    }
}
