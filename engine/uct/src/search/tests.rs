//! Tests for UCT move selection.

use std::collections::HashMap;
use std::time::Duration;

use super::*;
use crate::test_boards::{Counter, CounterBoard, PayoffBoard, Step, WinRule};

fn instant_config() -> UctConfig {
    UctConfig::for_testing()
        .with_time(Duration::ZERO)
        .with_max_moves(5)
}

fn depth_one(player: u8, step: Step) -> NodeKey<u8, Counter> {
    NodeKey::new(
        player,
        Counter {
            count: 1,
            opened_with: Some(step),
        },
    )
}

#[test]
fn test_empty_history() {
    let mut search = UctSearch::new(CounterBoard::new(WinRule::Reach(3)), instant_config()).unwrap();

    assert!(matches!(search.get_play(&[]), Err(SearchError::EmptyHistory)));
    assert!(matches!(search.run_simulation(&[]), Err(SearchError::EmptyHistory)));
}

#[test]
fn test_invalid_config_rejected() {
    let config = instant_config().with_exploration(-1.0);
    let result = UctSearch::new(CounterBoard::new(WinRule::Reach(3)), config);

    assert!(matches!(
        result,
        Err(SearchError::InvalidConfig(ConfigError::InvalidExploration(_)))
    ));
}

#[test]
fn test_no_legal_moves_returns_none() {
    // Already decided at the root
    let board = CounterBoard::new(WinRule::Reach(0));
    let history = vec![board.initial()];
    let mut search = UctSearch::new(board, instant_config()).unwrap();

    assert_eq!(search.get_play(&history).unwrap(), None);
    assert!(search.store().is_empty());
    assert!(search.last_stats().is_none());
}

#[test]
fn test_forced_move_skips_search() {
    let board = CounterBoard::new(WinRule::Reach(3)).with_moves(vec![Step::B]);
    let history = vec![board.initial()];
    let config = instant_config().with_time(Duration::from_secs(60));
    let mut search = UctSearch::new(board, config).unwrap();

    // Would block for a minute if any playout loop ran
    assert_eq!(search.get_play(&history).unwrap(), Some(Step::B));
    assert_eq!(search.board().next_state_calls.get(), 0);
    assert!(search.store().is_empty());
    assert!(search.last_stats().is_none());
}

#[test]
fn test_zero_budget_runs_exactly_one_playout() {
    let board = CounterBoard::new(WinRule::Reach(3));
    let history = vec![board.initial()];
    let mut search = UctSearch::new(board, instant_config()).unwrap();

    let play = search.get_play(&history).unwrap();

    let stats = search.last_stats().unwrap();
    assert_eq!(stats.games, 1);
    assert_eq!(stats.max_depth, 1);
    assert_eq!(stats.moves.len(), 2);
    assert_eq!(search.store().len(), 1);
    assert!(play.is_some());
}

#[test]
fn test_always_win_path_has_full_credit() {
    // Player 1 wins on every path after three moves
    let board = CounterBoard::new(WinRule::Reach(3));
    let history = vec![board.initial()];
    let mut search = UctSearch::new(board, instant_config()).unwrap();

    search.get_play(&history).unwrap();

    let full_credit_at_depth_one = search.store().iter().any(|(key, record)| {
        key.state.count == 1 && record.visits > 0 && record.outcome == record.visits as f64
    });
    assert!(full_credit_at_depth_one);

    for _ in 0..50 {
        search.run_simulation(&history).unwrap();
    }
    for step in [Step::A, Step::B] {
        if let Some(record) = search.store().get(&depth_one(1, step)) {
            assert_eq!(record.outcome, record.visits as f64);
        }
    }
}

#[test]
fn test_unwinnable_branch_has_partial_credit() {
    // Only games opened with A can be won
    let board = CounterBoard::new(WinRule::ReachAfter(3, Step::A));
    let history = vec![board.initial()];
    let mut search = UctSearch::new(board, instant_config()).unwrap();

    for _ in 0..300 {
        search.run_simulation(&history).unwrap();
    }

    let winning = search.store().get(&depth_one(1, Step::A)).unwrap();
    let losing = search.store().get(&depth_one(1, Step::B)).unwrap();

    assert_eq!(winning.outcome, winning.visits as f64);
    assert!(losing.visits > 0);
    assert!(losing.outcome < losing.visits as f64);
}

#[test]
fn test_selects_winnable_branch() {
    let board = CounterBoard::new(WinRule::ReachAfter(3, Step::A));
    let history = vec![board.initial()];
    let config = instant_config().with_time(Duration::from_millis(50));
    let mut search = UctSearch::win_rate(board, config).unwrap();

    assert_eq!(search.get_play(&history).unwrap(), Some(Step::A));

    let stats = search.last_stats().unwrap();
    let best = stats.best().unwrap();
    assert_eq!(best.play, Step::A);
    assert!((best.score - 100.0).abs() < 1e-9);
    assert_eq!(best.label, "A");
}

#[test]
fn test_value_search_selects_highest_payoff() {
    let board = PayoffBoard::new(&[0.2, 0.9, 0.5]);
    let config = instant_config().with_time(Duration::from_millis(30));
    let mut search = UctSearch::value(board, config).unwrap();

    assert_eq!(search.get_play(&[PayoffBoard::ROOT]).unwrap(), Some(1));

    let stats = search.last_stats().unwrap();
    assert_eq!(stats.strategy, Strategy::Value);
    let scores: Vec<f64> = stats.moves.iter().map(|m| m.score).collect();
    assert!((scores[0] - 0.9).abs() < 1e-9);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_identical_seeds_give_identical_stores() {
    let run = || {
        let board = CounterBoard::new(WinRule::ReachAfter(4, Step::B));
        let history = vec![board.initial()];
        let config = instant_config().with_max_moves(8).with_seed(1234);
        let mut search = UctSearch::new(board, config).unwrap();
        for _ in 0..200 {
            search.run_simulation(&history).unwrap();
        }
        search.store().clone()
    };

    let first = run();
    let second = run();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_score_unchanged_by_playouts_elsewhere() {
    let board = CounterBoard::new(WinRule::ReachAfter(3, Step::A));
    let history = vec![board.initial()];
    let mut search = UctSearch::new(board, instant_config()).unwrap();

    for _ in 0..20 {
        let before: HashMap<Step, (f64, u32)> = search
            .rank_moves(&history)
            .unwrap()
            .into_iter()
            .map(|m| (m.play, (m.score, m.visits)))
            .collect();

        search.run_simulation(&history).unwrap();

        for m in search.rank_moves(&history).unwrap() {
            let (score, visits) = before[&m.play];
            if m.visits == visits {
                assert_eq!(m.score, score);
            }
        }
    }
}

#[test]
fn test_unsearched_ranking_keeps_legal_order() {
    let board = PayoffBoard::new(&[0.1, 0.2, 0.3]);
    let search = UctSearch::value(board, instant_config()).unwrap();

    let order: Vec<usize> = search
        .rank_moves(&[PayoffBoard::ROOT])
        .unwrap()
        .into_iter()
        .map(|m| m.play)
        .collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_win_rate_statistics_persist_across_turns() {
    let board = CounterBoard::new(WinRule::Reach(3));
    let history = vec![board.initial()];
    let mut search = UctSearch::win_rate(board, instant_config()).unwrap();

    search.get_play(&history).unwrap();
    search.get_play(&history).unwrap();

    assert_eq!(search.store().len(), 2);

    search.reset();
    assert!(search.store().is_empty());
    assert_eq!(search.max_depth(), 0);
}

#[test]
fn test_value_statistics_reset_each_turn() {
    let board = CounterBoard::new(WinRule::Reach(3));
    let history = vec![board.initial()];
    let mut search = UctSearch::value(board, instant_config()).unwrap();

    search.get_play(&history).unwrap();
    search.get_play(&history).unwrap();

    assert_eq!(search.store().len(), 1);
}

#[test]
fn test_retention_override() {
    let board = CounterBoard::new(WinRule::Reach(3));
    let history = vec![board.initial()];
    let config = instant_config().with_retention(Retention::AcrossTurns);
    let mut search = UctSearch::value(board, config).unwrap();

    search.get_play(&history).unwrap();
    search.get_play(&history).unwrap();

    assert_eq!(search.store().len(), 2);
}

#[test]
fn test_presentation_passthrough() {
    let board = CounterBoard::new(WinRule::Reach(3));
    let state = board.initial();
    let search = UctSearch::new(board, instant_config()).unwrap();

    assert_eq!(search.display(&state, &Step::B), "B");
    assert_eq!(search.winner_message("Player 1 wins"), "Player 1 wins");
}
