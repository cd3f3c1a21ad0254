//! Runs one match: a monitor, two actors on their own threads, a report.

use crate::config::MatchConfig;
use crate::games::tictactoe::{Board, GameMonitor, GameResult, Move, Symbol};
use crate::players::{Actor, ActorReport, Policy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument, warn};

/// Everything known about a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MatchReport {
    /// Final result.
    result: GameResult,
    /// Accepted moves in order.
    moves: Vec<Move>,
    /// Final board.
    board: Board,
    /// X's summary.
    first: ActorReport,
    /// O's summary.
    second: ActorReport,
}

/// Failure while running a match.
#[derive(Debug, Clone, Display, Error)]
pub enum MatchError {
    /// An actor thread panicked.
    #[display("Actor for {} panicked", _0)]
    ActorPanicked(#[error(not(source))] Symbol),
}

/// Plays a match between two policies on a fresh monitor.
///
/// Each actor gets its own scoped thread and borrows the monitor; both are
/// joined before the result is read.
#[instrument(skip(monitor, first, second))]
pub fn play(
    monitor: &GameMonitor,
    first: impl Policy,
    second: impl Policy,
    config: &MatchConfig,
) -> Result<MatchReport, MatchError> {
    let exhaustion = *config.on_exhaustion();
    let opening = monitor.current_turn();
    let x = Actor::new(monitor, opening, first).on_exhaustion(exhaustion);
    let o = Actor::new(monitor, opening.opponent(), second).on_exhaustion(exhaustion);

    let (first, second) = std::thread::scope(|s| {
        let x_handle = s.spawn(move || x.run());
        let o_handle = s.spawn(move || o.run());
        let first = x_handle.join().map_err(|_| MatchError::ActorPanicked(opening));
        let second = o_handle
            .join()
            .map_err(|_| MatchError::ActorPanicked(opening.opponent()));
        (first, second)
    });
    let (first, second) = (first?, second?);

    // Actors only return once the game is over or after resigning, which ends it.
    let state = monitor.snapshot();
    debug_assert!(state.is_over(), "both actors returned mid-game");
    info!(result = %state.result(), moves = state.history().len(), "Match complete");

    Ok(MatchReport {
        result: state.result(),
        moves: state.history().to_vec(),
        board: state.board().clone(),
        first,
        second,
    })
}

/// Builds the monitor and policies described by `config` and plays the match.
///
/// With `show_board` on, the board is printed to stdout after every accepted
/// move, from inside the monitor's critical section.
#[instrument(skip(config))]
pub fn run_match(config: &MatchConfig) -> Result<MatchReport, MatchError> {
    let mut monitor = GameMonitor::new();
    if *config.show_board() {
        monitor = monitor.with_observer(|board: &Board| {
            echo_board(&mut std::io::stdout().lock(), board);
        });
    }

    let first = config.first_policy().build(config.seed_for(true));
    let second = config.second_policy().build(config.seed_for(false));
    info!(
        first = first.name(),
        second = second.name(),
        seed = ?config.seed(),
        "Starting match"
    );
    play(&monitor, first, second, config)
}

/// Writes the rendered board to `out`. A failed write loses the display only.
fn echo_board(out: &mut impl Write, board: &Board) {
    if let Err(e) = out
        .write_all(board.render().as_bytes())
        .and_then(|()| out.flush())
    {
        warn!(error = %e, "Failed to print board");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Coord;
    use crate::players::{PolicyKind, Scripted, Sequential};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_echo_board_writes_render() {
        let mut board = Board::new();
        board.apply(Coord::ALL[4], Symbol::X);
        let mut out = Vec::new();
        echo_board(&mut out, &board);
        assert_eq!(String::from_utf8(out).expect("utf8"), board.render());
    }

    #[test]
    fn test_echo_board_survives_closed_output() {
        let board = Board::new();
        echo_board(&mut ClosedPipe, &board);
    }

    #[test]
    fn test_run_match_with_board_echo() {
        let config = MatchConfig::default()
            .with_first_policy(PolicyKind::Sequential)
            .with_second_policy(PolicyKind::Sequential)
            .with_show_board(true);
        let report = run_match(&config).expect("match completes");
        assert!(report.result().is_over());
    }

    #[test]
    fn test_scripted_match_wins_top_row() {
        let monitor = GameMonitor::new();
        let config = MatchConfig::default().with_show_board(false);
        let report = play(
            &monitor,
            Scripted::from_indices([0, 1, 2]),
            Scripted::from_indices([3, 4, 8]),
            &config,
        )
        .expect("match completes");
        assert_eq!(*report.result(), GameResult::Win(Symbol::X));
        assert_eq!(report.moves().len(), 5);
        assert!(!*report.second().resigned());
    }

    #[test]
    fn test_sequential_mirror_match() {
        let monitor = GameMonitor::new();
        let config = MatchConfig::default().with_show_board(false);
        // Both scan row-major; O is always rejected where X just played.
        let report = play(&monitor, Sequential::new(), Sequential::new(), &config)
            .expect("match completes");
        // X: 0, 2, 4, 6 -> diagonal 2-4-6 completes on X's fourth move.
        assert_eq!(*report.result(), GameResult::Win(Symbol::X));
        assert_eq!(report.moves().len(), 7);
    }
}
