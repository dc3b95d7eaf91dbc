//! Error types for the fallible edges of the engine.
//!
//! Board operations themselves are total. Only configuration validation,
//! decoding a serialized grid, and best-score persistence can fail.

use thiserror::Error;

/// Rejected board configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 2x2, got {rows}x{columns}")]
    TooSmall { rows: usize, columns: usize },
    #[error("spawn value {0} is not a power of two greater than 1")]
    InvalidSpawnValue(u32),
    #[error("{tiles} initial tiles do not fit on a board with {cells} cells")]
    TooManyInitialTiles { tiles: usize, cells: usize },
}

/// Serialized grid that breaks the grid invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one cell, got {rows}x{columns}")]
    Empty { rows: usize, columns: usize },
    #[error("{rows}x{columns} grid needs {expected} cells, got {actual}")]
    CellCount {
        rows: usize,
        columns: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{0} is not a tile value")]
    InvalidTile(u32),
}

/// Failure writing the best score.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("best score file I/O failed")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("best score could not be encoded")]
    Encode {
        #[from]
        source: serde_json::Error,
    },
}
