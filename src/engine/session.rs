//! One playthrough: grid, score, and game-over flag.
//!
//! ## Transitions
//!
//! - `new_game`: clear, reset score and flag, spawn the initial tiles
//! - `apply_move`: collapse every line, then spawn and re-check game-over
//!   if anything changed
//! - `spawn_tile`: place one tile in a uniformly chosen empty cell
//! - `check_game_over`: set the flag once no direction can change the board
//!
//! Transitions only mutate session state and queue `Effect`s. Call
//! `drain_effects` to hand them to the presentation layer.

use log::{debug, info};

use super::effect::Effect;
use crate::core::{
    is_tile_value, AfterGameOver, BoardConfig, CellUpdate, ConfigError, Direction, GameRng,
    GameRngState, Grid,
};
use crate::rules::collapse_line;

/// What a move command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Direction requested.
    pub direction: Direction,
    /// At least one cell changed.
    pub moved: bool,
    /// Score earned by merges in this move.
    pub gained: u64,
    /// Cell that received the new tile, if any.
    pub spawned: Option<(usize, usize)>,
    /// Session is over after this move.
    pub game_over: bool,
}

impl MoveOutcome {
    fn unmoved(direction: Direction, game_over: bool) -> Self {
        Self {
            direction,
            moved: false,
            gained: 0,
            spawned: None,
            game_over,
        }
    }
}

/// Active board state.
#[derive(Clone, Debug)]
pub struct Session {
    config: BoardConfig,
    grid: Grid,
    score: u64,
    game_over: bool,
    rng: GameRng,
    effects: Vec<Effect>,
}

impl Session {
    /// Start a session on a validated configuration.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, seed))
    }

    /// Start a session with the reference 4x4 configuration.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::start(BoardConfig::default(), seed)
    }

    fn start(config: BoardConfig, seed: u64) -> Self {
        let mut session = Self {
            grid: Grid::new(config.rows, config.columns),
            config,
            score: 0,
            game_over: false,
            rng: GameRng::new(seed),
            effects: Vec::new(),
        };
        session.new_game();
        session
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Capture the RNG position, for reproducing spawns.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Take every effect queued since the last drain.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // === Transitions ===

    /// Reset the board and score, then spawn the initial tiles.
    ///
    /// Queues a full redraw, a zero score, and a hidden game-over indicator.
    pub fn new_game(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.game_over = false;

        for _ in 0..self.config.initial_tiles {
            self.place_random_tile();
        }

        info!(
            "new {}x{} game (seed {})",
            self.config.rows,
            self.config.columns,
            self.rng.seed()
        );
        self.effects.push(Effect::GridRedrawn(self.grid.clone()));
        self.effects.push(Effect::ScoreChanged(0));
        self.effects.push(Effect::GameOverChanged(false));
    }

    /// Place one spawn tile in a uniformly chosen empty cell.
    ///
    /// Returns the cell, or `None` without any effect when the board is full.
    pub fn spawn_tile(&mut self) -> Option<(usize, usize)> {
        let (row, col) = self.place_random_tile()?;
        self.effects.push(Effect::CellsChanged(vec![CellUpdate {
            row,
            col,
            value: self.config.spawn_value,
        }]));
        Some((row, col))
    }

    fn place_random_tile(&mut self) -> Option<(usize, usize)> {
        let empties: Vec<(usize, usize)> = self.grid.empty_cells().collect();
        let (row, col) = empties[self.rng.choose_index(empties.len())?];
        self.grid.set(row, col, self.config.spawn_value);
        debug!("spawned {} at ({row}, {col})", self.config.spawn_value);
        Some((row, col))
    }

    /// Slide and merge every line toward `direction`.
    ///
    /// If nothing changed the session is left untouched: no spawn, no score,
    /// no effects. Otherwise the score grows by the merged values, one tile
    /// spawns, game-over is re-checked, and the new score is published.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.game_over && self.config.after_game_over == AfterGameOver::Reject {
            debug!("ignoring {direction} after game over");
            return MoveOutcome::unmoved(direction, true);
        }

        let before = self.grid.clone();
        let mut gained = 0u64;

        for index in 0..self.grid.line_count(direction) {
            let line = self.grid.line(direction, index);
            let collapse = collapse_line(&line);
            if collapse.changed(&line) {
                self.grid.write_line(direction, index, &collapse.line);
            }
            gained += collapse.gained;
        }

        let changed = self.grid.diff(&before);
        if changed.is_empty() {
            debug!("{direction} changed nothing");
            return MoveOutcome::unmoved(direction, self.game_over);
        }

        self.score += gained;
        debug!("{direction}: {} cells changed, +{gained}", changed.len());
        self.effects.push(Effect::CellsChanged(changed));

        let spawned = self.spawn_tile();
        let game_over = self.check_game_over();
        self.effects.push(Effect::ScoreChanged(self.score));

        MoveOutcome {
            direction,
            moved: true,
            gained,
            spawned,
            game_over,
        }
    }

    /// Would a move in `direction` change the board?
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        (0..self.grid.line_count(direction)).any(|index| {
            let line = self.grid.line(direction, index);
            collapse_line(&line).changed(&line)
        })
    }

    /// Set the game-over flag if the board is full and no adjacent pair
    /// can merge. Queues the indicator the first time it becomes true.
    pub fn check_game_over(&mut self) -> bool {
        if self.grid.has_empty() {
            return self.game_over;
        }
        if !self.game_over && !self.grid.has_adjacent_equal() {
            self.game_over = true;
            info!(
                "game over: score {}, best tile {}",
                self.score,
                self.grid.max_tile()
            );
            self.effects.push(Effect::GameOverChanged(true));
        }
        self.game_over
    }

    // === Scripted setup ===

    /// Overwrite one cell. For scripted positions and tests.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u32) {
        assert!(is_tile_value(value), "{value} is not a tile value");
        self.grid.set(row, col, value);
        self.effects.push(Effect::CellsChanged(vec![CellUpdate { row, col, value }]));
    }

    /// Replace the whole board, keeping score. Clears the game-over flag;
    /// call `check_game_over` to re-evaluate it.
    pub fn load_grid(&mut self, grid: Grid) {
        assert_eq!(
            (grid.rows(), grid.columns()),
            (self.config.rows, self.config.columns),
            "Grid shape does not match the session"
        );
        self.grid = grid;
        self.game_over = false;
        self.effects.push(Effect::GridRedrawn(self.grid.clone()));
    }
}
