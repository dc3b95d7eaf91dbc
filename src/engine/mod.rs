//! Board engine: sessions, their effects, and the driver that applies them.
//!
//! - `Session` owns the grid, score, and game-over flag and performs the
//!   pure state transitions
//! - `Effect` describes what changed for outside layers
//! - `Game` forwards effects to a presenter and keeps the best score

pub mod effect;
pub mod game;
pub mod session;

pub use effect::Effect;
pub use game::Game;
pub use session::{MoveOutcome, Session};
