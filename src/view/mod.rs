//! Presentation side of the engine.
//!
//! Visual state is derived from cell values alone. A `Presenter` receives
//! every `Effect` the engine emits and decides how to show it.
//!
//! `tile_label` and `tile_classes` are the per-cell mapping for renderers
//! that draw their own cells; `TextPresenter` builds its rows from
//! `tile_label`.

use crate::core::Grid;
use crate::engine::Effect;

/// Largest value with its own style. Anything above shares `CAPPED_TILE`.
pub const MAX_STYLED_TILE: u32 = 4096;

/// Style category for tiles above `MAX_STYLED_TILE`.
pub const CAPPED_TILE: u32 = 8192;

/// Visual category of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileClass {
    Empty,
    Tile(u32),
}

impl TileClass {
    /// Category for a cell value.
    ///
    /// ```
    /// use tile_merge::view::TileClass;
    ///
    /// assert_eq!(TileClass::for_value(0), TileClass::Empty);
    /// assert_eq!(TileClass::for_value(64), TileClass::Tile(64));
    /// assert_eq!(TileClass::for_value(16384), TileClass::Tile(8192));
    /// ```
    #[must_use]
    pub fn for_value(value: u32) -> Self {
        match value {
            0 => TileClass::Empty,
            v if v <= MAX_STYLED_TILE => TileClass::Tile(v),
            _ => TileClass::Tile(CAPPED_TILE),
        }
    }

    /// Style class name, `x2`, `x4`, ... (none for empty cells).
    #[must_use]
    pub fn class_name(self) -> Option<String> {
        match self {
            TileClass::Empty => None,
            TileClass::Tile(v) => Some(format!("x{v}")),
        }
    }
}

/// Full class list for the cell at `(row, col)`.
#[must_use]
pub fn tile_classes(row: usize, col: usize, value: u32) -> Vec<String> {
    let mut classes = vec!["tile".to_string(), format!("row-{row}"), format!("col-{col}")];
    classes.extend(TileClass::for_value(value).class_name());
    classes
}

/// Text shown on a cell: the value, or nothing when empty.
#[must_use]
pub fn tile_label(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Receives engine effects.
pub trait Presenter {
    fn present(&mut self, effect: &Effect);
}

/// Keeps every effect in order. Useful for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    pub effects: Vec<Effect>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return what has been recorded so far.
    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, effect: &Effect) {
        self.effects.push(effect.clone());
    }
}

/// Mirrors the board from effects and renders it as text.
#[derive(Clone, Debug)]
pub struct TextPresenter {
    board: Grid,
    score: u64,
    best: u64,
    game_over: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            board: Grid::new(rows, columns),
            score: 0,
            best: 0,
            game_over: false,
        }
    }

    /// The board as last presented.
    #[must_use]
    pub fn board(&self) -> &Grid {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn best(&self) -> u64 {
        self.best
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Score line, board, and game-over banner.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("Score: {}   Best: {}\n", self.score, self.best);
        for r in 0..self.board.rows() {
            let cells: Vec<String> = self
                .board
                .row(r)
                .iter()
                .map(|&v| {
                    let label = tile_label(v);
                    format!("{:>5}", if label.is_empty() { "." } else { label.as_str() })
                })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        if self.game_over {
            out.push_str("GAME OVER (n to restart)\n");
        }
        out
    }
}

impl Presenter for TextPresenter {
    fn present(&mut self, effect: &Effect) {
        match effect {
            Effect::GridRedrawn(grid) => self.board = grid.clone(),
            Effect::CellsChanged(cells) => {
                for cell in cells {
                    self.board.set(cell.row, cell.col, cell.value);
                }
            }
            Effect::ScoreChanged(score) => self.score = *score,
            Effect::GameOverChanged(shown) => self.game_over = *shown,
            Effect::BestScoreChanged(best) => self.best = *best,
        }
    }
}
