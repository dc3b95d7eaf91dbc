//! Effects produced by session state transitions.
//!
//! A session never renders or persists anything itself. Each transition
//! queues the effects an outside layer needs to apply, and the driver
//! drains them afterwards.

use crate::core::{CellUpdate, Grid};

/// Something the presentation or persistence layer should react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// The whole board was rebuilt. Carries a snapshot.
    GridRedrawn(Grid),
    /// Only these cells changed.
    CellsChanged(Vec<CellUpdate>),
    /// Current score after the transition.
    ScoreChanged(u64),
    /// Show (`true`) or hide (`false`) the game-over indicator.
    GameOverChanged(bool),
    /// A new best score was recorded.
    BestScoreChanged(u64),
}
