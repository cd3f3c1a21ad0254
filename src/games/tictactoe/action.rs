//! Move records and outcomes.
//!
//! A [`Move`] is only recorded once the monitor has accepted it, so the
//! history is a log of domain events rather than of proposals.

use super::{Coord, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An accepted move: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub symbol: Symbol,
    /// Where the mark was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(symbol: Symbol, coord: Coord) -> Self {
        Self { symbol, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.coord)
    }
}

/// What happened to a proposal once the caller held the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed; the turn passed (or the game ended).
    Placed,
    /// The cell was taken. Nothing changed and the caller keeps the turn.
    Occupied,
    /// The game had already ended. Nothing changed.
    GameOver,
}

impl MoveOutcome {
    /// True if the proposal mutated the board.
    pub fn is_placed(self) -> bool {
        self == MoveOutcome::Placed
    }
}

/// Contract violations when proposing a move.
///
/// An occupied cell is not an error: see [`MoveOutcome::Occupied`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
