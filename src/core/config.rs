//! Board configuration.
//!
//! Sessions are created from a `BoardConfig`:
//! - Board dimensions (fixed for the lifetime of a session)
//! - Value of newly spawned tiles
//! - Number of tiles placed when a session starts
//! - Whether moves are accepted once the board is finished
//!
//! The reference configuration is a 4x4 board that spawns `2` tiles and
//! starts with two of them.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// What a session does with move commands after game-over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AfterGameOver {
    /// Ignore the command. No cell changes, no effects.
    #[default]
    Reject,
    /// Run the move as usual. On a finished board no line can change,
    /// so this never spawns or scores.
    Allow,
}

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (>= 2).
    pub rows: usize,

    /// Number of columns (>= 2).
    pub columns: usize,

    /// Value written into a cell by a spawn.
    pub spawn_value: u32,

    /// Tiles spawned by `new_game`.
    pub initial_tiles: usize,

    /// Move policy once the session is over.
    pub after_game_over: AfterGameOver,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 4,
            spawn_value: 2,
            initial_tiles: 2,
            after_game_over: AfterGameOver::Reject,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with custom dimensions and reference defaults
    /// for everything else.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Set the value of spawned tiles.
    #[must_use]
    pub fn with_spawn_value(mut self, value: u32) -> Self {
        self.spawn_value = value;
        self
    }

    /// Set how many tiles a new session starts with.
    #[must_use]
    pub fn with_initial_tiles(mut self, tiles: usize) -> Self {
        self.initial_tiles = tiles;
        self
    }

    /// Set the move policy after game-over.
    #[must_use]
    pub fn with_after_game_over(mut self, policy: AfterGameOver) -> Self {
        self.after_game_over = policy;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Check the configuration can produce a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 || self.columns < 2 {
            return Err(ConfigError::TooSmall {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.spawn_value < 2 || !self.spawn_value.is_power_of_two() {
            return Err(ConfigError::InvalidSpawnValue(self.spawn_value));
        }
        if self.initial_tiles > self.cell_count() {
            return Err(ConfigError::TooManyInitialTiles {
                tiles: self.initial_tiles,
                cells: self.cell_count(),
            });
        }
        Ok(())
    }
}
