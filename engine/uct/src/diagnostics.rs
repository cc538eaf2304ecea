//! Per-search diagnostics: playout count, timing, depth and the move ranking.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::Strategy;
use crate::stats::StatRecord;

/// Statistics for one candidate move at the root.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveStats<M> {
    pub play: M,

    /// `Board::display` rendering of the move
    pub label: String,

    /// Win percentage (win rate) or mean payoff (value)
    pub score: f64,

    /// Raw accumulated outcome
    pub outcome: f64,

    /// Recorded visits, 0 when the node is untracked
    pub visits: u32,
}

impl<M> MoveStats<M> {
    pub(crate) fn new(
        play: M,
        label: String,
        strategy: Strategy,
        record: Option<StatRecord>,
        floored: StatRecord,
    ) -> Self {
        Self {
            play,
            label,
            score: score(strategy, floored),
            outcome: floored.outcome,
            visits: record.map_or(0, |r| r.visits),
        }
    }
}

/// Diagnostics of the last `get_play` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats<M> {
    pub strategy: Strategy,

    /// Number of playouts run
    pub games: u64,

    pub elapsed: Duration,

    /// Deepest step at which a node was added
    pub max_depth: u32,

    /// Candidate moves, best first
    pub moves: Vec<MoveStats<M>>,
}

impl<M> SearchStats<M> {
    /// The top-ranked move, if any.
    pub fn best(&self) -> Option<&MoveStats<M>> {
        self.moves.first()
    }

    /// Emit the report through tracing.
    pub fn log(&self) {
        info!(
            games = self.games,
            elapsed_ms = self.elapsed.as_millis() as u64,
            max_depth = self.max_depth,
            strategy = %self.strategy,
            "Search complete"
        );
        for m in &self.moves {
            match self.strategy {
                Strategy::WinRate => debug!(
                    "{}: {:.2}% ({} / {})",
                    m.label, m.score, m.outcome, m.visits
                ),
                Strategy::Value => debug!(
                    "{}: {:.1} ({} / {})",
                    m.label, m.score, m.outcome, m.visits
                ),
            }
        }
    }
}

/// Score of a record under `strategy`.
pub fn score(strategy: Strategy, record: StatRecord) -> f64 {
    match strategy {
        Strategy::WinRate => 100.0 * record.mean(),
        Strategy::Value => record.mean(),
    }
}

/// Sort moves by (score, visits) descending.
///
/// The sort is stable, so moves that tie on both keep their first-seen order.
pub fn rank<M>(moves: &mut [MoveStats<M>]) {
    moves.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.visits.cmp(&a.visits))
    });
}
