//! Turn-gated monitor around the shared match state.
//!
//! One mutex guards the board, the turn and the result. One condition
//! variable (the turn gate) parks whichever actor is waiting for its turn.
//! Every accepted move broadcasts on the gate; rejected proposals change
//! nothing and so wake nobody.

use super::invariants::{InvariantSet, MatchInvariants};
use super::{Board, Coord, GameResult, MatchState, Move, MoveError, MoveOutcome, Symbol};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Callback run with the board after every accepted move.
///
/// It runs while the monitor's lock is held, so it sees exactly the board the
/// move produced. It must not call back into the monitor.
pub type BoardObserver = Box<dyn Fn(&Board) + Send + Sync>;

/// The single synchronized owner of a match.
///
/// Actors borrow it; nothing outside the lock ever touches the state.
pub struct GameMonitor {
    state: Mutex<MatchState>,
    turn_gate: Condvar,
    observer: Option<BoardObserver>,
}

impl GameMonitor {
    /// Creates a monitor with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Symbol::X)
    }

    /// Creates a monitor with `opening` owning the first turn.
    #[instrument]
    pub fn starting_with(opening: Symbol) -> Self {
        Self {
            state: Mutex::new(MatchState::new(opening)),
            turn_gate: Condvar::new(),
            observer: None,
        }
    }

    /// Registers a callback invoked under the lock after each accepted move.
    pub fn with_observer(mut self, observer: impl Fn(&Board) + Send + Sync + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    // A panic inside a critical section can only happen between whole-field
    // writes, so the state behind a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, MatchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Proposes `(row, col)` for `symbol`.
    ///
    /// Blocks until it is `symbol`'s turn or the game is over. Returns `true`
    /// if the mark was placed, `false` if the cell was occupied or the game
    /// had ended. Off-board coordinates fail immediately without blocking.
    #[instrument(skip(self))]
    pub fn attempt_move(&self, symbol: Symbol, row: usize, col: usize) -> Result<bool, MoveError> {
        let coord = Coord::new(row, col)?;
        Ok(self.submit(symbol, coord).is_placed())
    }

    /// Proposes `coord` for `symbol`, reporting exactly what happened.
    ///
    /// The gate predicate is "my turn, or the game is over": once the match
    /// ends every waiter is released and sees [`MoveOutcome::GameOver`].
    #[instrument(skip(self))]
    pub fn submit(&self, symbol: Symbol, coord: Coord) -> MoveOutcome {
        let guard = self.lock();
        let mut state = self
            .turn_gate
            .wait_while(guard, |state| !state.gate_open_for(symbol))
            .unwrap_or_else(PoisonError::into_inner);

        let outcome = state.play(symbol, coord);
        match outcome {
            MoveOutcome::Placed => {
                debug_assert!(
                    MatchInvariants::check_all(&*state).is_ok(),
                    "match invariants violated after {symbol} -> {coord}"
                );
                if let Some(observer) = &self.observer {
                    observer(state.board());
                }
                if state.is_over() {
                    info!(result = %state.result(), "Match finished");
                }
                drop(state);
                self.turn_gate.notify_all();
            }
            MoveOutcome::Occupied => debug!("Cell occupied, turn retained"),
            MoveOutcome::GameOver => debug!("Game already over"),
        }
        outcome
    }

    /// Ends the match as a win for `symbol`'s opponent.
    ///
    /// Returns `false` if the match was already over. Wakes every waiter.
    #[instrument(skip(self))]
    pub fn resign(&self, symbol: Symbol) -> bool {
        let mut state = self.lock();
        let resigned = state.resign(symbol);
        drop(state);
        if resigned {
            warn!(%symbol, "Player resigned");
            self.turn_gate.notify_all();
        }
        resigned
    }

    /// Whether the result is terminal. Never blocks on the turn gate.
    pub fn is_game_over(&self) -> bool {
        self.lock().is_over()
    }

    /// Current result. Meaningful once [`is_game_over`](Self::is_game_over) is true.
    pub fn result(&self) -> GameResult {
        self.lock().result()
    }

    /// Symbol whose turn it is.
    pub fn current_turn(&self) -> Symbol {
        self.lock().turn()
    }

    /// Accepted moves so far.
    pub fn history(&self) -> Vec<Move> {
        self.lock().history().to_vec()
    }

    /// Renders the board as one consistent snapshot.
    pub fn render(&self) -> String {
        self.lock().board().render()
    }

    /// Copy of the whole match state.
    pub fn snapshot(&self) -> MatchState {
        self.lock().clone()
    }
}

impl Default for GameMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameMonitor")
            .field("state", &*self.lock())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
