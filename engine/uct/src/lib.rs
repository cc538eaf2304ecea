//! Upper Confidence Tree (UCT) search for turn-based, multi-player board games.
//!
//! This crate provides a game-agnostic Monte Carlo search that works with any
//! game implementing the `board-core` Board trait. It picks the next move for
//! an artificial player after a bounded amount of randomized lookahead.
//!
//! # Overview
//!
//! Every playout starts from the current state and runs:
//!
//! 1. **Selection**: UCB1 over the siblings once all of them have statistics,
//!    uniform random choice otherwise
//! 2. **Expansion**: the first untracked (player, state) node reached is added
//!    to the statistics store, at most one per playout
//! 3. **Rollout**: random play continues until a winner is decided, no move
//!    is legal, or `max_moves` is reached
//! 4. **Backpropagation**: each tracked node visited gets one visit and its
//!    mover's outcome (a win, or a terminal payoff)
//!
//! The search tree is implicit: the store maps (player, state) keys to
//! statistics and children are enumerated through the board on demand.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use games_tictactoe::TicTacToe;
//! use uct::{UctConfig, UctSearch};
//!
//! let board = TicTacToe::new();
//! let history = vec![TicTacToe::initial()];
//!
//! let config = UctConfig::default()
//!     .with_time(Duration::from_millis(200))
//!     .with_seed(42);
//! let mut search = UctSearch::win_rate(board, config).unwrap();
//!
//! if let Some(play) = search.get_play(&history).unwrap() {
//!     println!("Best move: {play}");
//! }
//! let stats = search.last_stats().unwrap();
//! println!("{} playouts, max depth {}", stats.games, stats.max_depth);
//! ```
//!
//! # Configuration
//!
//! The [`UctConfig`] struct controls search behavior:
//!
//! - `calculation_time`: Wall-clock budget per move (default: 30s)
//! - `max_moves`: Playout length cap (default: 1000)
//! - `exploration`: UCB1 constant C (default: 1.4)
//! - `strategy`: [`Strategy::WinRate`] or [`Strategy::Value`]
//! - `retention`: keep statistics across turns or clear them per turn;
//!   defaults to across turns for win rate and per turn for value
//!
//! A [`UctConfig`] can also be built from a loaded `uct_config::SearchConfig`
//! with `UctConfig::try_from`.
//!
//! # Architecture
//!
//! ```text
//! +-----------------------------------------------------------+
//! |                        UctSearch                          |
//! |  (policy selector: time budget, ranking, diagnostics)     |
//! +-----------------------------------------------------------+
//! |   +--------------+   +-------------+   +---------------+  |
//! |   |  StatsStore  |   |    Board    |   |  ChaCha20Rng  |  |
//! |   | (player,     |   | (legality,  |   | (random       |  |
//! |   |  state) keys |   |  scoring)   |   |  choices)     |  |
//! |   +------+-------+   +------+------+   +-------+-------+  |
//! |          |                  |                  |          |
//! |          v                  v                  v          |
//! |   +---------------------------------------------------+   |
//! |   |   simulate: select -> expand -> roll out ->       |   |
//! |   |             backpropagate                         |   |
//! |   +---------------------------------------------------+   |
//! +-----------------------------------------------------------+
//! ```

pub mod config;
pub mod diagnostics;
pub mod player;
pub mod search;
pub mod simulation;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_boards;

// Re-export main types
pub use board_core::{Board, NodeKey};
pub use config::{parse_retention, ConfigError, Retention, Strategy, UctConfig};
pub use diagnostics::{MoveStats, SearchStats};
pub use player::UctPlayer;
pub use search::{SearchError, UctSearch};
pub use simulation::{simulate, PlayoutReport};
pub use stats::{StatRecord, StatsStore};
