//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, MatchState};
use super::Invariant;

/// Invariant: Board cells are write-once.
///
/// Replaying the move log onto an empty board must never hit a marked cell
/// and must reproduce the live board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchState> for MonotonicBoardInvariant {
    fn holds(state: &MatchState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.coord) {
                return false;
            }
            reconstructed.apply(mov.coord, mov.symbol);
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are write-once"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Coord, Move, Symbol};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&MatchState::default()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut state = MatchState::default();
        for (symbol, idx) in [(Symbol::X, 0), (Symbol::O, 4), (Symbol::X, 8), (Symbol::O, 2)] {
            state.play(symbol, Coord::ALL[idx]);
        }
        assert!(MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut state = MatchState::default();
        state.play(Symbol::X, Coord::ALL[4]);
        state.board.cells_mut_for_test()[1][1] = Cell::Mark(Symbol::O);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut state = MatchState::default();
        state.play(Symbol::X, Coord::ALL[4]);
        state.history.push(Move::new(Symbol::O, Coord::ALL[4]));
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
