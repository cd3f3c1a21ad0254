//! Concurrency tests for the turn-gated monitor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use strictly_turns::{
    Board, Cell, Coord, Exhaustion, GameMonitor, GameResult, InvariantSet, MatchConfig,
    MatchInvariants, Move, MoveError, RandomCells, Scripted, Sequential, Symbol, play, run_match,
};

fn quiet() -> MatchConfig {
    MatchConfig::default().with_show_board(false)
}

fn boards_after_each_move(moves: &[Move]) -> Vec<Board> {
    let mut board = Board::new();
    let mut boards = vec![board.clone()];
    for mov in moves {
        board.apply(mov.coord, mov.symbol);
        boards.push(board.clone());
    }
    boards
}

#[test]
fn test_forced_top_row_win() {
    let monitor = GameMonitor::new();
    let report = play(
        &monitor,
        Scripted::from_indices([0, 1, 2]),
        Scripted::from_indices([3, 4, 8]),
        &quiet(),
    )
    .expect("match completes");

    assert_eq!(*report.result(), GameResult::Win(Symbol::X));
    assert_eq!(report.board().rows()[0], [Cell::Mark(Symbol::X); 3]);
}

#[test]
fn test_forced_draw() {
    let monitor = GameMonitor::new();
    // X O X / X O O / O X X
    let report = play(
        &monitor,
        Scripted::from_indices([0, 2, 3, 7, 8]),
        Scripted::from_indices([1, 4, 5, 6, 8]),
        &quiet(),
    )
    .expect("match completes");

    assert_eq!(*report.result(), GameResult::Draw);
    assert_eq!(report.moves().len(), 9);
    assert!(!*report.first().resigned());
    assert!(!*report.second().resigned());
}

#[test]
fn test_strict_alternation_under_contention() {
    for seed in 0..50 {
        let monitor = GameMonitor::new();
        let report = play(
            &monitor,
            RandomCells::seeded(seed),
            RandomCells::seeded(seed ^ 0xFFFF),
            &quiet(),
        )
        .expect("match completes");

        let moves = report.moves();
        assert_eq!(moves[0].symbol, Symbol::X);
        assert!(moves.windows(2).all(|w| w[0].symbol != w[1].symbol));
        assert!(report.result().is_over());
        assert!(MatchInvariants::check_all(&monitor.snapshot()).is_ok());
    }
}

#[test]
fn test_render_never_tears() {
    let monitor = GameMonitor::new();
    let done = AtomicBool::new(false);
    let renders = Mutex::new(Vec::new());

    let report = std::thread::scope(|s| {
        s.spawn(|| {
            while !done.load(Ordering::SeqCst) {
                let render = monitor.render();
                renders.lock().expect("renders lock").push(render);
            }
        });
        let report = play(&monitor, Sequential::new(), RandomCells::seeded(3), &quiet());
        done.store(true, Ordering::SeqCst);
        report
    })
    .expect("match completes");

    let legal: Vec<String> = boards_after_each_move(report.moves())
        .iter()
        .map(Board::render)
        .collect();
    for render in renders.into_inner().expect("renders lock") {
        assert!(legal.contains(&render), "torn render:\n{render}");
    }
}

#[test]
fn test_observer_sees_write_once_progression() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let monitor = GameMonitor::new().with_observer(move |board| {
        sink.lock().expect("sink lock").push(board.clone());
    });

    let report = play(&monitor, RandomCells::seeded(11), Sequential::new(), &quiet())
        .expect("match completes");

    let seen = seen.lock().expect("seen lock");
    assert_eq!(seen.len(), report.moves().len());
    for pair in seen.windows(2) {
        for coord in Coord::ALL {
            if pair[0].get(coord) != Cell::Empty {
                assert_eq!(pair[0].get(coord), pair[1].get(coord));
            }
        }
        assert_eq!(pair[1].occupied(), pair[0].occupied() + 1);
    }
}

#[test]
fn test_result_is_final() {
    let monitor = GameMonitor::new();
    let report = play(&monitor, Sequential::new(), RandomCells::seeded(5), &quiet())
        .expect("match completes");
    let before = monitor.snapshot();

    for coord in Coord::ALL {
        for symbol in [Symbol::X, Symbol::O] {
            assert_eq!(monitor.attempt_move(symbol, coord.row(), coord.col()), Ok(false));
        }
    }
    assert!(!monitor.resign(Symbol::X));
    assert_eq!(monitor.snapshot(), before);
    assert_eq!(monitor.result(), *report.result());
}

#[test]
fn test_exhausted_policy_does_not_strand_opponent() {
    let monitor = GameMonitor::new();
    let report = play(
        &monitor,
        Scripted::from_indices([4]),
        RandomCells::seeded(1),
        &quiet(),
    )
    .expect("match completes");

    assert_eq!(*report.result(), GameResult::Win(Symbol::O));
    assert!(*report.first().resigned());
    assert_eq!(monitor.snapshot().resigned(), Some(Symbol::X));
}

#[test]
fn test_restart_keeps_playing() {
    let monitor = GameMonitor::new();
    let config = quiet().with_on_exhaustion(Exhaustion::Restart);
    // X's two-cell script runs dry on its third turn. It rewinds once, finds
    // both cells taken, and resigns rather than spinning on its turn.
    let report = play(
        &monitor,
        Scripted::from_indices([0, 1]),
        Scripted::from_indices([6, 7, 3, 4, 5, 8]),
        &config,
    )
    .expect("match completes");

    assert_eq!(*report.first().restarts(), 1);
    assert_eq!(*report.first().rejected(), 2);
    assert!(*report.first().resigned());
    assert_eq!(*report.result(), GameResult::Win(Symbol::O));
    assert!(MatchInvariants::check_all(&monitor.snapshot()).is_ok());
}

#[test]
fn test_out_of_range_is_rejected_from_any_thread() {
    let monitor = GameMonitor::new();
    let err = std::thread::scope(|s| {
        s.spawn(|| monitor.attempt_move(Symbol::O, 5, 5))
            .join()
            .expect("thread panicked")
    });
    assert_eq!(err, Err(MoveError::OutOfBounds { row: 5, col: 5 }));
}

#[test]
fn test_run_match_with_seed_is_reproducible() {
    let config = quiet().with_seed(2024);
    let a = run_match(&config).expect("match completes");
    let b = run_match(&config).expect("match completes");
    assert_eq!(a.moves(), b.moves());
    assert_eq!(a.result(), b.result());
}
