//! Tic-tac-toe: board, rules, invariants and the turn-gated monitor.

mod action;
mod coord;
pub mod invariants;
mod monitor;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use coord::{Coord, SIZE};
pub use monitor::{BoardObserver, GameMonitor};
pub use state::MatchState;
pub use types::{Board, Cell, GameResult, Symbol};
