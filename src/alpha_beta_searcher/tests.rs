use std::collections::HashMap;

use super::*;
use crate::board::game_move::Move;
use crate::evaluate::{self, HeuristicEvaluator};
use crate::reversi_position;

const INF: f64 = f64::INFINITY;

fn context_with(horizon: u8, mtdf_mode: MtdfMode) -> SearchContext {
    SearchContext::new(SearchConfig {
        horizon,
        mtdf_mode,
        ..SearchConfig::default()
    })
}

// Applies the first legal move `plies` times, to reach a less symmetric position.
fn play_first_moves(board: &mut Board, plies: usize) {
    for _ in 0..plies {
        let next = board.playable_moves()[0];
        board.push(next).unwrap();
    }
}

// Every position reachable from `board` within `depth` plies, root included,
// keyed by fingerprint.
fn reachable_positions(board: &mut Board, depth: u8, positions: &mut HashMap<u64, Board>) {
    positions.insert(board.fingerprint(), board.snapshot());
    if depth == 0 {
        return;
    }
    for game_move in board.playable_moves() {
        board.push(game_move).unwrap();
        reachable_positions(board, depth - 1, positions);
        board.pop().unwrap();
    }
}

#[test]
fn test_full_window_agrees_with_plain_negamax() {
    let evaluator = HeuristicEvaluator;

    for plies in 0..3 {
        let mut board = Board::new(4).unwrap();
        play_first_moves(&mut board, plies);

        for horizon in 0..=4 {
            let (expected, _) = negamax(&mut board, &evaluator, horizon).unwrap();

            let mut context = SearchContext::default();
            let (value, _) =
                alpha_beta_memo(&mut context, &mut board, &evaluator, -INF, INF, horizon).unwrap();

            assert_eq!(
                value, expected,
                "mismatch at horizon {} after {} plies",
                horizon, plies
            );
        }
    }
}

#[test]
fn test_bounded_table_still_agrees_with_negamax() {
    let evaluator = HeuristicEvaluator;
    let mut board = Board::new(6).unwrap();
    let (expected, _) = negamax(&mut board, &evaluator, 3).unwrap();

    let mut context = SearchContext::new(SearchConfig {
        tt_capacity: Some(8),
        ..SearchConfig::default()
    });
    let (value, _) = alpha_beta_memo(&mut context, &mut board, &evaluator, -INF, INF, 3).unwrap();

    assert_eq!(value, expected);
    assert!(context.transposition_table().len() <= 8);
}

#[test]
fn test_search_leaves_the_board_untouched() {
    let evaluator = HeuristicEvaluator;
    let mut board = Board::new(6).unwrap();
    play_first_moves(&mut board, 2);
    let before = board.clone();

    let mut context = SearchContext::default();
    alpha_beta_memo(&mut context, &mut board, &evaluator, -INF, INF, 3).unwrap();
    assert_eq!(before, board);
    assert_eq!(before.ply(), board.ply());

    let mut context = context_with(3, MtdfMode::Converge);
    mtdf(&mut context, &mut board, &evaluator).unwrap();
    assert_eq!(before, board);
    assert_eq!(before.ply(), board.ply());
}

#[test]
fn test_stored_bounds_are_sound() {
    let evaluator = HeuristicEvaluator;
    let mut board = Board::new(4).unwrap();
    let horizon = 4;

    // null-window probes leave a mix of lower, upper and exact entries behind
    let mut context = context_with(horizon, MtdfMode::Converge);
    mtdf(&mut context, &mut board, &evaluator).unwrap();

    let table = context.transposition_table();
    assert!(!table.is_empty());
    assert!(table.hits() > 0);
    assert!(context.stats().leaf_count > 0);
    assert!(context.stats().position_count > context.stats().leaf_count);

    let mut positions = HashMap::new();
    reachable_positions(&mut board, horizon, &mut positions);

    for (fingerprint, entry) in table.iter() {
        assert!(entry.lower <= entry.upper, "inverted entry {:?}", entry);

        let position = positions
            .get_mut(&fingerprint)
            .expect("every stored position is reachable from the root");
        let (value, _) = negamax(position, &evaluator, entry.horizon).unwrap();
        assert!(
            entry.lower <= value && value <= entry.upper,
            "value {} outside {:?} for\n{}",
            value,
            entry,
            position
        );
    }
}

#[test]
fn test_horizon_one_picks_the_best_immediate_move() {
    let evaluator = HeuristicEvaluator;
    let mut board = Board::new(8).unwrap();

    let mut best_immediate = f64::NEG_INFINITY;
    for game_move in board.legal_moves() {
        board.push(game_move).unwrap();
        best_immediate = best_immediate.max(-evaluate::score(&board, Color::White));
        board.pop().unwrap();
    }

    let mut context = SearchContext::default();
    let (value, best_move) =
        alpha_beta_memo(&mut context, &mut board, &evaluator, -INF, INF, 1).unwrap();
    assert_eq!(value, best_immediate);

    let best_move = best_move.unwrap();
    assert!(board.legal_moves().contains(&best_move));
    board.push(best_move).unwrap();
    assert_eq!(-evaluate::score(&board, Color::White), best_immediate);
}

#[test]
fn test_single_probe_stops_after_one_probe() {
    let evaluator = HeuristicEvaluator;
    let mut board = Board::new(8).unwrap();
    let mut context = context_with(2, MtdfMode::SingleProbe);

    let report = mtdf(&mut context, &mut board, &evaluator).unwrap();

    assert_eq!(report.probes, 1);
    assert!(!report.converged);
    assert!(board.legal_moves().contains(&report.best_move));
}

#[test]
fn test_converged_mtdf_finds_the_minimax_value() {
    let evaluator = HeuristicEvaluator;

    for plies in 0..3 {
        let mut board = Board::new(4).unwrap();
        play_first_moves(&mut board, plies);

        for horizon in 1..=4 {
            let (expected, _) = negamax(&mut board, &evaluator, horizon).unwrap();

            let mut context = context_with(horizon, MtdfMode::Converge);
            let report = mtdf(&mut context, &mut board, &evaluator).unwrap();

            assert!(report.converged);
            assert!(report.probes >= 2);
            assert_eq!(report.value, expected);
            assert!(board.playable_moves().contains(&report.best_move));
        }
    }
}

#[test]
fn test_converge_stops_at_the_probe_cap() {
    let evaluator = HeuristicEvaluator;
    let mut board = Board::new(6).unwrap();
    let mut context = SearchContext::new(SearchConfig {
        horizon: 3,
        mtdf_mode: MtdfMode::Converge,
        first_guess: 500.,
        max_probes: 1,
        ..SearchConfig::default()
    });

    let report = mtdf(&mut context, &mut board, &evaluator).unwrap();

    assert_eq!(report.probes, 1);
    assert!(!report.converged);
    assert!(board.playable_moves().contains(&report.best_move));
}

#[test]
fn test_converge_from_a_distant_first_guess() {
    let evaluator = HeuristicEvaluator;
    let mut board = Board::new(4).unwrap();
    let (expected, _) = negamax(&mut board, &evaluator, 4).unwrap();

    for &first_guess in [500., -500.].iter() {
        let mut context = SearchContext::new(SearchConfig {
            horizon: 4,
            mtdf_mode: MtdfMode::Converge,
            first_guess,
            max_probes: 1_000,
            ..SearchConfig::default()
        });

        let report = mtdf(&mut context, &mut board, &evaluator).unwrap();

        assert!(report.converged, "no convergence from {}", first_guess);
        assert!(report.probes >= 2);
        assert_eq!(report.value, expected);
        assert!(board.playable_moves().contains(&report.best_move));
    }
}

#[test]
fn test_mtdf_leaves_no_root_entry_behind() {
    let evaluator = HeuristicEvaluator;
    let mut board = Board::new(6).unwrap();
    let root = board.fingerprint();

    for &mode in [MtdfMode::SingleProbe, MtdfMode::Converge].iter() {
        let mut context = context_with(3, mode);
        context
            .transposition_table_mut()
            .store(root, TranspositionEntry::exact(12345., 9));

        let report = mtdf(&mut context, &mut board, &evaluator).unwrap();

        assert_ne!(report.value, 12345.);
        assert!(context.transposition_table().peek(root).is_none());
    }
}

#[test]
fn test_mtdf_rejects_zero_horizon() {
    let mut board = Board::new(8).unwrap();
    let mut context = context_with(0, MtdfMode::SingleProbe);

    assert!(matches!(
        mtdf(&mut context, &mut board, &HeuristicEvaluator),
        Err(SearchError::HorizonTooLow)
    ));
}

#[test]
fn test_mtdf_without_moves_fails() {
    let mut board = reversi_position! {
        BBBB
        BBBB
        BBWW
        WWWW
    };
    let mut context = SearchContext::default();

    assert!(matches!(
        mtdf(&mut context, &mut board, &HeuristicEvaluator),
        Err(SearchError::NoAvailableMoves)
    ));
}

#[test]
fn test_blocked_side_passes() {
    let mut board = reversi_position! {
        BBBB
        BBBB
        BWW.
        BBBB
    };
    board.set_turn(Color::White);

    let mut context = context_with(3, MtdfMode::Converge);
    let report = mtdf(&mut context, &mut board, &HeuristicEvaluator).unwrap();

    assert_eq!(report.best_move, Move::Pass(Color::White));
    // black takes the last square and wins 16 to 0
    assert_eq!(report.value, -evaluate::WIN_SCORE);
}

#[test]
fn test_terminal_leaf_uses_the_side_to_move() {
    let mut board = reversi_position! {
        BBBB
        BBBB
        BBWW
        WWWW
    };
    let mut context = SearchContext::default();

    let (value, best_move) =
        alpha_beta_memo(&mut context, &mut board, &HeuristicEvaluator, -INF, INF, 3).unwrap();
    assert_eq!(value, evaluate::WIN_SCORE);
    assert_eq!(best_move, None);

    board.set_turn(Color::White);
    let mut context = SearchContext::default();
    let (value, _) =
        alpha_beta_memo(&mut context, &mut board, &HeuristicEvaluator, -INF, INF, 3).unwrap();
    assert_eq!(value, -evaluate::WIN_SCORE);
}

#[test]
fn test_mtdf_mode_parsing() {
    assert_eq!("single-probe".parse::<MtdfMode>(), Ok(MtdfMode::SingleProbe));
    assert_eq!("converge".parse::<MtdfMode>(), Ok(MtdfMode::Converge));
    assert!("forever".parse::<MtdfMode>().is_err());
    assert_eq!(MtdfMode::default(), MtdfMode::SingleProbe);
    assert_eq!(MtdfMode::Converge.to_string(), "converge");
}
