//! An actor plays one symbol against the shared monitor.

use super::{Exhaustion, Policy};
use crate::games::tictactoe::{Coord, GameMonitor, MoveOutcome, Symbol};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Summary of one actor's part in a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ActorReport {
    /// Symbol played.
    symbol: Symbol,
    /// Policy name.
    policy: String,
    /// Proposals that placed a mark.
    placed: usize,
    /// Proposals rejected because the cell was taken.
    rejected: usize,
    /// Times the policy was rewound.
    restarts: usize,
    /// Whether this actor ended the match by resigning.
    resigned: bool,
}

impl ActorReport {
    fn new(symbol: Symbol, policy: impl Into<String>) -> Self {
        Self {
            symbol,
            policy: policy.into(),
            placed: 0,
            rejected: 0,
            restarts: 0,
            resigned: false,
        }
    }
}

/// One player: a symbol, a policy and a borrowed monitor.
#[derive(Debug)]
pub struct Actor<'m, P> {
    monitor: &'m GameMonitor,
    symbol: Symbol,
    policy: P,
    exhaustion: Exhaustion,
    placed_at_restart: usize,
}

impl<'m, P: Policy> Actor<'m, P> {
    /// Creates an actor that resigns when its policy runs dry.
    pub fn new(monitor: &'m GameMonitor, symbol: Symbol, policy: P) -> Self {
        Self {
            monitor,
            symbol,
            policy,
            exhaustion: Exhaustion::default(),
            placed_at_restart: 0,
        }
    }

    /// Sets the exhaustion behavior.
    pub fn on_exhaustion(mut self, exhaustion: Exhaustion) -> Self {
        self.exhaustion = exhaustion;
        self
    }

    /// Symbol this actor plays.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Proposes moves until the game is over.
    ///
    /// The game-over check at the top of each iteration is the only way out
    /// besides resigning; `submit` itself returns immediately once the game
    /// has ended, so the actor never parks on a finished match.
    #[instrument(skip(self), fields(symbol = %self.symbol, policy = self.policy.name()))]
    pub fn run(mut self) -> ActorReport {
        let mut report = ActorReport::new(self.symbol, self.policy.name());

        loop {
            if self.monitor.is_game_over() {
                break;
            }

            let Some(coord) = self.next_candidate(&mut report) else {
                report.resigned = self.monitor.resign(self.symbol);
                break;
            };

            match self.monitor.submit(self.symbol, coord) {
                MoveOutcome::Placed => {
                    debug!(%coord, "Placed");
                    report.placed += 1;
                }
                MoveOutcome::Occupied => {
                    debug!(%coord, "Rejected");
                    report.rejected += 1;
                }
                MoveOutcome::GameOver => break,
            }
        }

        info!(placed = report.placed, rejected = report.rejected, "Actor finished");
        report
    }

    /// Next proposal, applying the exhaustion rule when the policy runs dry.
    ///
    /// A restart is only allowed if the previous pass placed something, so a
    /// script whose every cell is taken resigns instead of spinning on its turn.
    fn next_candidate(&mut self, report: &mut ActorReport) -> Option<Coord> {
        if let Some(coord) = self.policy.next_proposal() {
            return Some(coord);
        }

        if self.exhaustion == Exhaustion::Restart
            && report.placed > self.placed_at_restart
            && self.policy.restart()
        {
            self.placed_at_restart = report.placed;
            report.restarts += 1;
            debug!(restarts = report.restarts, "Policy restarted");
            return self.policy.next_proposal();
        }

        warn!(exhaustion = %self.exhaustion, "Policy exhausted before the game ended");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameResult;
    use crate::players::{Scripted, Sequential};

    #[test]
    fn test_actor_stops_on_finished_game() {
        let monitor = GameMonitor::new();
        monitor.resign(Symbol::O);
        let report = Actor::new(&monitor, Symbol::X, Sequential::new()).run();
        assert_eq!(*report.placed(), 0);
        assert!(!*report.resigned());
    }

    #[test]
    fn test_exhausted_script_resigns() {
        let monitor = GameMonitor::new();
        let report = Actor::new(&monitor, Symbol::X, Scripted::from_indices([4])).run();
        assert_eq!(*report.placed(), 1);
        assert!(*report.resigned());
        assert_eq!(monitor.result(), GameResult::Win(Symbol::O));
    }

    #[test]
    fn test_restart_without_progress_resigns() {
        let monitor = GameMonitor::new();
        monitor.attempt_move(Symbol::X, 1, 1).expect("in range");
        let report = Actor::new(&monitor, Symbol::O, Scripted::from_indices([4]))
            .on_exhaustion(Exhaustion::Restart)
            .run();
        assert_eq!(*report.rejected(), 1);
        assert_eq!(*report.restarts(), 0);
        assert!(*report.resigned());
        assert_eq!(monitor.result(), GameResult::Win(Symbol::X));
    }
}
