//! The tile grid.
//!
//! A fixed R×C matrix of `u32` cells stored row-major. `0` is an empty
//! cell; every other value is a power of two of at least 2.
//!
//! ## Lines
//!
//! Moves work on lines: rows for Left/Right, columns for Up/Down. `line`
//! extracts a line in the order the collapse runs (reversed for Right and
//! Down) and `write_line` puts it back in spatial order, so every direction
//! shares the single toward-index-0 collapse.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;
use super::error::GridError;

/// A row or column pulled out of the grid.
pub type Line = SmallVec<[u32; 8]>;

/// Check a value is allowed in a cell.
#[must_use]
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// A single cell with its current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellUpdate {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// R×C board of tile values.
///
/// Deserializing checks the shape and every cell, so a decoded grid holds
/// the same invariants as one built through `set`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<u32>,
}

/// Unchecked wire form of a `Grid`.
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    columns: usize,
    cells: Vec<u32>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.rows == 0 || raw.columns == 0 {
            return Err(GridError::Empty {
                rows: raw.rows,
                columns: raw.columns,
            });
        }
        let expected = raw.rows * raw.columns;
        if raw.cells.len() != expected {
            return Err(GridError::CellCount {
                rows: raw.rows,
                columns: raw.columns,
                expected,
                actual: raw.cells.len(),
            });
        }
        if let Some(&bad) = raw.cells.iter().find(|&&v| !is_tile_value(v)) {
            return Err(GridError::InvalidTile(bad));
        }
        Ok(Self {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "Grid must have at least one cell");
        Self {
            rows,
            columns,
            cells: vec![0; rows * columns],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// ```
    /// use tile_merge::core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[2, 0], [0, 4]]);
    /// assert_eq!(grid.get(1, 1), 4);
    /// assert_eq!(grid.empty_count(), 2);
    /// ```
    #[must_use]
    pub fn from_rows<const N: usize>(rows: &[[u32; N]]) -> Self {
        assert!(!rows.is_empty(), "Grid must have at least one row");
        let mut grid = Self::new(rows.len(), N);
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                grid.set(r, c, value);
            }
        }
        grid
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "Cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.columns
        );
        row * self.columns + col
    }

    /// Value at a cell.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.index(row, col)]
    }

    /// Overwrite a cell.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        assert!(is_tile_value(value), "{value} is not a tile value");
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// One row in left-to-right order.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u32] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.columns]
    }

    /// Number of lines a move in `dir` processes.
    #[must_use]
    pub fn line_count(&self, dir: Direction) -> usize {
        if dir.is_horizontal() {
            self.rows
        } else {
            self.columns
        }
    }

    /// Length of each line for `dir`.
    #[must_use]
    pub fn line_len(&self, dir: Direction) -> usize {
        if dir.is_horizontal() {
            self.columns
        } else {
            self.rows
        }
    }

    /// Grid coordinates of the `pos`-th element of line `index`, in
    /// collapse order.
    fn line_cell(&self, dir: Direction, index: usize, pos: usize) -> (usize, usize) {
        let len = self.line_len(dir);
        let along = if dir.is_reversed() { len - 1 - pos } else { pos };
        if dir.is_horizontal() {
            (index, along)
        } else {
            (along, index)
        }
    }

    /// Extract line `index` for a move in `dir`, in collapse order.
    #[must_use]
    pub fn line(&self, dir: Direction, index: usize) -> Line {
        (0..self.line_len(dir))
            .map(|pos| {
                let (r, c) = self.line_cell(dir, index, pos);
                self.get(r, c)
            })
            .collect()
    }

    /// Write a line produced in collapse order back into the grid.
    pub fn write_line(&mut self, dir: Direction, index: usize, values: &[u32]) {
        assert_eq!(values.len(), self.line_len(dir), "Line length mismatch");
        for (pos, &value) in values.iter().enumerate() {
            let (r, c) = self.line_cell(dir, index, pos);
            self.set(r, c, value);
        }
    }

    /// Iterate over `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / columns, i % columns, v))
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(|&(_, _, v)| v == 0)
            .map(|(r, c, _)| (r, c))
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    #[must_use]
    pub fn has_empty(&self) -> bool {
        self.cells.contains(&0)
    }

    /// True if two horizontally or vertically adjacent cells hold the same
    /// value and can merge. Empty cells and the largest `u32` tile never do.
    #[must_use]
    pub fn has_adjacent_equal(&self) -> bool {
        for (r, c, v) in self.cells() {
            if v == 0 || v.checked_mul(2).is_none() {
                continue;
            }
            if c + 1 < self.columns && self.get(r, c + 1) == v {
                return true;
            }
            if r + 1 < self.rows && self.get(r + 1, c) == v {
                return true;
            }
        }
        false
    }

    /// True if at least one direction can change the grid.
    #[must_use]
    pub fn can_move(&self) -> bool {
        self.has_empty() || self.has_adjacent_equal()
    }

    /// Largest tile on the board (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Cells whose value differs from `previous`, with their new values.
    #[must_use]
    pub fn diff(&self, previous: &Grid) -> Vec<CellUpdate> {
        assert_eq!(
            (self.rows, self.columns),
            (previous.rows, previous.columns),
            "Cannot diff grids of different shapes"
        );
        self.cells()
            .zip(previous.cells.iter().copied())
            .filter_map(|((row, col, value), before)| {
                (value != before).then_some(CellUpdate { row, col, value })
            })
            .collect()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries((0..self.rows).map(|r| self.row(r)))
            .finish()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for (c, v) in self.row(r).iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if *v == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{v:>5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
