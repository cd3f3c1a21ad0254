//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Symbol};
use tracing::instrument;

/// The eight winning lines as (row, col) pairs.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn cell_at(board: &Board, (row, col): (usize, usize)) -> Cell {
    board.rows()[row][col]
}

/// Checks whether `symbol` fills any row, column or diagonal.
#[instrument(skip(board))]
pub fn check_win(board: &Board, symbol: Symbol) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&rc| cell_at(board, rc) == Cell::Mark(symbol)))
}

/// Returns the first player with a completed line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    <Symbol as strum::IntoEnumIterator>::iter().find(|symbol| check_win(board, *symbol))
}
