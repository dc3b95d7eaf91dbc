//! # tile-merge
//!
//! Board engine for a single-player 2048-style puzzle: a fixed grid of
//! power-of-two tiles that slide and merge, a score, and game-over
//! detection.
//!
//! ## Design Principles
//!
//! 1. **Owned Sessions**: Grid, score, and game-over flag live in a
//!    `Session` value. No global state; any number of sessions can coexist.
//!
//! 2. **Pure Transitions, Separate Effects**: Sessions only mutate their own
//!    state and queue `Effect`s. Rendering and persistence happen afterwards
//!    in `Game`, against the `Presenter` and `BestScoreStore` traits.
//!
//! 3. **One Collapse**: All four directions reduce to collapsing lines toward
//!    index 0; Right and Down read their lines reversed.
//!
//! ## Example
//!
//! ```
//! use tile_merge::{Direction, Grid, Session};
//!
//! let mut session = Session::with_seed(7);
//! session.load_grid(Grid::from_rows(&[
//!     [2, 2, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]));
//!
//! let outcome = session.apply_move(Direction::Left);
//! assert!(outcome.moved);
//! assert_eq!(session.grid().get(0, 0), 4);
//! assert_eq!(session.score(), 4);
//! ```
//!
//! ## Modules
//!
//! - `core`: Grid, directions, RNG, configuration, errors
//! - `rules`: The line collapse
//! - `engine`: Sessions, effects, and the `Game` driver
//! - `store`: Best-score persistence
//! - `view`: Tile styling and presenters
//! - `input`: Key and command mapping

pub mod core;
pub mod engine;
pub mod input;
pub mod rules;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    is_tile_value, AfterGameOver, BoardConfig, CellUpdate, ConfigError, Direction, GameRng,
    GameRngState, Grid, GridError, StoreError,
};

pub use crate::rules::{collapse_line, collapse_line_reversed, Collapse};

pub use crate::engine::{Effect, Game, MoveOutcome, Session};

pub use crate::store::{BestScoreStore, JsonFileStore, MemoryStore};

pub use crate::view::{Presenter, RecordingPresenter, TextPresenter, TileClass};

pub use crate::input::{direction_for_key, parse_command, Command};
