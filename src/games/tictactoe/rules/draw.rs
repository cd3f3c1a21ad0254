//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.cells().all(|c| c != Cell::Empty)
}

/// A full board with no completed line.
///
/// Wins take priority: a move that both fills the board and completes a line
/// is a win.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    check_draw(board) && check_winner(board).is_none()
}
