//! Core domain types: marks, cells, and the board.

use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// X (moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell claimed by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board, cells in row-major order.
///
/// The board is the only owner of its cells. Cells move from
/// [`Cell::Empty`] to [`Cell::Occupied`] exactly once; the only way
/// back is [`Board::reset`]. Invalid writes (occupied cell, index out
/// of range) are silent no-ops rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns all nine cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cell at `index`, or `None` out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places `mark` at `index` if the cell is empty and in range.
    ///
    /// Occupied cells and out-of-range indices are left untouched.
    pub fn set(&mut self, index: usize, mark: Mark) {
        if self.is_empty(index) {
            self.cells[index] = Cell::Occupied(mark);
        }
    }

    /// Clears all nine cells.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Checks if the cell at `index` is empty. Out of range is not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based number so a player can pick one.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => out.push_str(&(index + 1).to_string()),
                    Cell::Occupied(mark) => out.push_str(&mark.to_string()),
                }
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
