//! UCT move selection.
//!
//! `UctSearch` owns the board, the statistics store and the RNG. Each
//! `get_play` call runs playouts back-to-back until the time budget is
//! spent, then ranks the legal moves by their resulting node's statistics.

use std::fmt;
use std::time::Instant;

use board_core::{Board, NodeKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, Retention, Strategy, UctConfig};
use crate::diagnostics::{rank, MoveStats, SearchStats};
use crate::simulation::{simulate, PlayoutReport};
use crate::stats::StatsStore;

/// Errors that can occur during UCT search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("State history is empty")]
    EmptyHistory,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// UCT search state for one artificial player.
pub struct UctSearch<B: Board> {
    board: B,
    store: StatsStore<B::Player, B::State>,
    config: UctConfig,
    rng: ChaCha20Rng,
    max_depth: u32,
    last_stats: Option<SearchStats<B::Move>>,
}

impl<B: Board> fmt::Debug for UctSearch<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UctSearch")
            .field("config", &self.config)
            .field("nodes", &self.store.len())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl<B: Board> UctSearch<B> {
    /// Create a search with an empty statistics store.
    pub fn new(board: B, config: UctConfig) -> Result<Self, SearchError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };

        Ok(Self {
            board,
            store: StatsStore::new(),
            config,
            rng,
            max_depth: 0,
            last_stats: None,
        })
    }

    /// Win-rate search: statistics persist across turns unless configured otherwise.
    pub fn win_rate(board: B, config: UctConfig) -> Result<Self, SearchError> {
        Self::new(board, config.with_strategy(Strategy::WinRate))
    }

    /// Value search: a fresh store per turn unless configured otherwise.
    pub fn value(board: B, config: UctConfig) -> Result<Self, SearchError> {
        Self::new(board, config.with_strategy(Strategy::Value))
    }

    /// Choose a move for the player acting at the end of `history`.
    ///
    /// Returns `Ok(None)` when there is no legal move and the single legal
    /// move without searching when there is no real choice. Otherwise runs
    /// at least one playout, keeps going until `calculation_time` has
    /// elapsed (checked between playouts), and returns the move with the
    /// best (score, visits); remaining ties go to the first legal move.
    pub fn get_play(&mut self, history: &[B::State]) -> Result<Option<B::Move>, SearchError> {
        let state = history.last().ok_or(SearchError::EmptyHistory)?;

        self.max_depth = 0;
        self.last_stats = None;
        if self.config.effective_retention() == Retention::PerTurn {
            self.store.reset();
        }

        let legal = self.board.legal_plays(history);
        if legal.len() <= 1 {
            debug!(legal = legal.len(), "No real choice to be made, skipping search");
            return Ok(legal.into_iter().next());
        }

        let begin = Instant::now();
        let mut games: u64 = 0;
        loop {
            self.run_simulation(history)?;
            games += 1;
            if begin.elapsed() >= self.config.calculation_time {
                break;
            }
        }
        let elapsed = begin.elapsed();

        let mut moves = self.score_moves(state, legal);
        rank(&mut moves);

        let stats = SearchStats {
            strategy: self.config.strategy,
            games,
            elapsed,
            max_depth: self.max_depth,
            moves,
        };
        stats.log();

        let play = stats.best().map(|m| m.play.clone());
        self.last_stats = Some(stats);
        Ok(play)
    }

    /// Run one playout from the end of `history` and update the store.
    pub fn run_simulation(
        &mut self,
        history: &[B::State],
    ) -> Result<PlayoutReport<B::Player>, SearchError> {
        let report = simulate(
            &self.board,
            &mut self.store,
            history,
            &self.config,
            &mut self.rng,
        )?;
        if let Some(depth) = report.expanded_depth {
            self.max_depth = self.max_depth.max(depth);
        }
        Ok(report)
    }

    /// Current ranking of the legal moves at the end of `history`, without searching.
    pub fn rank_moves(&self, history: &[B::State]) -> Result<Vec<MoveStats<B::Move>>, SearchError> {
        let state = history.last().ok_or(SearchError::EmptyHistory)?;
        let legal = self.board.legal_plays(history);
        let mut moves = self.score_moves(state, legal);
        rank(&mut moves);
        Ok(moves)
    }

    fn score_moves(&self, state: &B::State, legal: Vec<B::Move>) -> Vec<MoveStats<B::Move>> {
        let player = self.board.current_player(state);
        legal
            .into_iter()
            .map(|play| {
                let key = NodeKey::new(player, self.board.next_state(state, &play));
                let label = self.board.display(state, &play);
                MoveStats::new(
                    play,
                    label,
                    self.config.strategy,
                    self.store.get(&key).copied(),
                    self.store.floored(&key),
                )
            })
            .collect()
    }

    /// Drop all accumulated statistics.
    pub fn reset(&mut self) {
        self.store.reset();
        self.max_depth = 0;
        self.last_stats = None;
    }

    pub fn store(&self) -> &StatsStore<B::Player, B::State> {
        &self.store
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn config(&self) -> &UctConfig {
        &self.config
    }

    /// Deepest expansion since the last `get_play` started.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Diagnostics of the last searched `get_play`; `None` after a fast path.
    pub fn last_stats(&self) -> Option<&SearchStats<B::Move>> {
        self.last_stats.as_ref()
    }

    pub fn display(&self, state: &B::State, play: &B::Move) -> String {
        self.board.display(state, play)
    }

    pub fn winner_message(&self, msg: &str) -> String {
        self.board.winner_message(msg)
    }
}

#[cfg(test)]
mod tests;
