//! Win detection over the fixed set of winning lines.

use crate::types::{Board, Cell, Mark};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// [`winner`] checks them in this order. Two simultaneous winning
/// lines can only belong to the same mark, so the order never changes
/// the result, only which line is found first.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark holding a complete line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        if let Some(Cell::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Cell::Occupied(mark))
            && board.get(c) == Some(Cell::Occupied(mark))
        {
            return Some(mark);
        }
    }
    None
}
