//! The mutable match state guarded by the monitor.

use super::rules::{check_draw, check_win};
use super::{Board, Coord, GameResult, Move, MoveOutcome, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board, turn, result and move log of one match.
///
/// Only [`GameMonitor`](super::GameMonitor) mutates this, always under its lock.
/// Callers get copies through [`GameMonitor::snapshot`](super::GameMonitor::snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) board: Board,
    pub(crate) turn: Symbol,
    pub(crate) opening: Symbol,
    pub(crate) result: GameResult,
    pub(crate) history: Vec<Move>,
    pub(crate) resigned: Option<Symbol>,
}

impl MatchState {
    /// Creates a fresh match with `opening` to move.
    pub fn new(opening: Symbol) -> Self {
        Self {
            board: Board::new(),
            turn: opening,
            opening,
            result: GameResult::InProgress,
            history: Vec::new(),
            resigned: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol whose turn it is.
    pub fn turn(&self) -> Symbol {
        self.turn
    }

    /// Symbol that owned the first turn.
    pub fn opening(&self) -> Symbol {
        self.opening
    }

    /// Current result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Symbol that resigned, if the match ended that way.
    pub fn resigned(&self) -> Option<Symbol> {
        self.resigned
    }

    /// True once the result is terminal.
    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Whether `symbol` may proceed past the turn gate.
    pub(crate) fn gate_open_for(&self, symbol: Symbol) -> bool {
        self.turn == symbol || self.is_over()
    }

    /// Applies a move for the symbol holding the turn.
    ///
    /// Win is evaluated before draw. The turn flips only while the game is
    /// still in progress.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub(crate) fn play(&mut self, symbol: Symbol, coord: Coord) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::GameOver;
        }
        debug_assert_eq!(self.turn, symbol, "played out of turn");
        if !self.board.is_empty(coord) {
            return MoveOutcome::Occupied;
        }

        self.board.apply(coord, symbol);
        self.history.push(Move::new(symbol, coord));

        if check_win(&self.board, symbol) {
            self.result = GameResult::Win(symbol);
        } else if check_draw(&self.board) {
            self.result = GameResult::Draw;
        } else {
            self.turn = symbol.opponent();
        }
        debug!(result = ?self.result, moves = self.history.len(), "Move applied");
        MoveOutcome::Placed
    }

    /// Ends an in-progress match as a win for the opponent of `symbol`.
    pub(crate) fn resign(&mut self, symbol: Symbol) -> bool {
        if self.is_over() {
            return false;
        }
        self.result = GameResult::Win(symbol.opponent());
        self.resigned = Some(symbol);
        true
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(Symbol::X)
    }
}
