//! Core board types: grid, directions, RNG, configuration, errors.
//!
//! Everything here is plain data with no knowledge of sessions, scoring,
//! or presentation.

pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{AfterGameOver, BoardConfig};
pub use direction::Direction;
pub use error::{ConfigError, GridError, StoreError};
pub use grid::{is_tile_value, CellUpdate, Grid, Line};
pub use rng::{GameRng, GameRngState};
