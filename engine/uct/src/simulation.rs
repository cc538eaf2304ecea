//! Single randomized playout with statistics update.
//!
//! One playout runs in four phases:
//! 1. Selection: UCB1 over the current siblings once all of them have visits,
//!    uniform random choice otherwise
//! 2. Expansion: the first untracked node reached gets a record (one per playout)
//! 3. Rollout: keep moving until a winner is decided, no move is legal or
//!    `max_moves` is reached
//! 4. Backpropagation: every tracked node visited gets one visit and its
//!    mover's outcome credit

use std::collections::{HashMap, HashSet};

use board_core::{Board, NodeKey};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::config::{Strategy, UctConfig};
use crate::search::SearchError;
use crate::stats::StatsStore;

/// What happened during one playout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayoutReport<P> {
    /// Moves played before the playout stopped
    pub steps: u32,

    /// Step index at which a node was added to the store, if any
    pub expanded_depth: Option<u32>,

    /// Decided winner, `None` on truncation or an undecided terminal
    pub winner: Option<P>,
}

/// Run one playout from the end of `history` and update `store`.
///
/// `history` is copied; the caller's sequence is never modified.
pub fn simulate<B, R>(
    board: &B,
    store: &mut StatsStore<B::Player, B::State>,
    history: &[B::State],
    config: &UctConfig,
    rng: &mut R,
) -> Result<PlayoutReport<B::Player>, SearchError>
where
    B: Board,
    R: Rng + ?Sized,
{
    let mut states = history.to_vec();
    let mut state = states.last().cloned().ok_or(SearchError::EmptyHistory)?;
    // The player acting from `state`; keys below pair it with the state it moves into
    let mut player = board.current_player(&state);

    let mut visited: HashSet<NodeKey<B::Player, B::State>> = HashSet::new();
    let mut expand = true;
    let mut expanded_depth = None;
    let mut winner = None;
    let mut steps = 0;

    for t in 1..=config.max_moves {
        let legal = board.legal_plays(&states);
        if legal.is_empty() {
            break;
        }

        let next_states: Vec<B::State> = legal
            .iter()
            .map(|play| board.next_state(&state, play))
            .collect();

        let chosen = match select_ucb1(store, player, &next_states, config.exploration) {
            Some(index) => next_states[index].clone(),
            // Some sibling has no statistics yet, so make an arbitrary decision
            None => match next_states.choose(rng) {
                Some(next) => next.clone(),
                None => break,
            },
        };

        states.push(chosen.clone());
        steps = t;

        let key = NodeKey::new(player, chosen.clone());
        if expand && store.expand(key.clone()) {
            expand = false;
            expanded_depth = Some(t);
        }
        visited.insert(key);

        player = board.current_player(&chosen);
        state = chosen;

        winner = board.winner(&states);
        if winner.is_some() {
            break;
        }
    }

    backpropagate(board, store, &states, &visited, config.strategy, winner);

    trace!(
        steps,
        expanded = ?expanded_depth,
        visited = visited.len(),
        decided = winner.is_some(),
        "Playout complete"
    );

    Ok(PlayoutReport {
        steps,
        expanded_depth,
        winner,
    })
}

/// Pick the sibling with the highest UCB1 score.
///
/// Returns `None` unless every sibling already has a nonzero visit count.
/// Ties go to the first sibling in legal-move order.
fn select_ucb1<P, S>(
    store: &StatsStore<P, S>,
    player: P,
    next_states: &[S],
    c: f64,
) -> Option<usize>
where
    P: Copy + Eq + std::hash::Hash,
    S: Clone + Eq + std::hash::Hash,
{
    let mut records = Vec::with_capacity(next_states.len());
    for next in next_states {
        let record = store.get(&NodeKey::new(player, next.clone()))?;
        if record.visits == 0 {
            return None;
        }
        records.push(*record);
    }

    let total: u64 = records.iter().map(|r| u64::from(r.visits)).sum();
    let log_total = (total as f64).ln();

    let mut best: Option<(usize, f64)> = None;
    for (index, record) in records.iter().enumerate() {
        let score = record.ucb1(log_total, c);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// Credit every tracked node visited during the playout.
///
/// Each distinct key gets exactly one visit. The outcome for a mover is
/// computed once and reused for all of that mover's nodes.
fn backpropagate<B: Board>(
    board: &B,
    store: &mut StatsStore<B::Player, B::State>,
    states: &[B::State],
    visited: &HashSet<NodeKey<B::Player, B::State>>,
    strategy: Strategy,
    winner: Option<B::Player>,
) {
    let mut outcomes: HashMap<B::Player, Option<f64>> = HashMap::new();

    for key in visited {
        if !store.contains(key) {
            // Reached only during the random tail after expansion
            continue;
        }
        let outcome = *outcomes
            .entry(key.player)
            .or_insert_with(|| player_outcome(board, states, strategy, winner, key.player));
        store.credit(key, outcome);
    }
}

/// Outcome credit for `player` at the end of a playout.
fn player_outcome<B: Board>(
    board: &B,
    states: &[B::State],
    strategy: Strategy,
    winner: Option<B::Player>,
    player: B::Player,
) -> Option<f64> {
    match strategy {
        Strategy::WinRate => (winner == Some(player)).then_some(1.0),
        Strategy::Value => board.end_value(states, player),
    }
}
