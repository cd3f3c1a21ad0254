//! Strictly Turns library - turn-gated tic-tac-toe
//!
//! Two actors on separate threads share one board through a monitor: a mutex
//! around the match state plus a condition variable acting as the turn gate.
//! Moves alternate strictly no matter how the threads are scheduled.
//!
//! # Architecture
//!
//! - **Games**: board, rules, invariants and the [`GameMonitor`]
//! - **Players**: [`Actor`]s driven by pluggable [`Policy`] implementations
//! - **Driver**: [`run_match`] wires a monitor to two actors and reports
//!
//! # Example
//!
//! ```
//! use strictly_turns::{GameMonitor, GameResult, MatchConfig, Scripted, Sequential, Symbol, play};
//!
//! let monitor = GameMonitor::new();
//! let config = MatchConfig::default().with_show_board(false);
//! let report = play(&monitor, Sequential::new(), Scripted::from_indices([4, 8, 5, 7]), &config)
//!     .expect("match completes");
//! assert_eq!(*report.result(), GameResult::Win(Symbol::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod games;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Driver
pub use driver::{MatchError, MatchReport, play, run_match};

// Crate-level exports - Players
pub use players::{
    Actor, ActorReport, Exhaustion, Policy, PolicyKind, RandomCells, Scripted, Sequential,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MatchInvariants, MonotonicBoardInvariant,
};
pub use games::tictactoe::rules::{check_draw, check_win, check_winner, is_draw};
pub use games::tictactoe::{
    Board, BoardObserver, Cell, Coord, GameMonitor, GameResult, MatchState, Move, MoveError,
    MoveOutcome, Symbol,
};
