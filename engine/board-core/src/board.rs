//! Board capability trait consumed by the search engine
//!
//! A board owns the rules of one game. The search treats it as an opaque,
//! enumerable state-transition system: it asks which moves are legal, which
//! state a move leads to, who acts where, and how a finished game scored.

use std::fmt::Debug;
use std::hash::Hash;

/// Capability interface for a turn-based, multi-player game
///
/// # Player convention
///
/// `current_player(state)` returns the player who acts *from* `state`.
/// The search keys the state produced by a move with the player who made
/// that move, so for a transition `state --move--> next` the statistics
/// entry is `(current_player(state), next)`. `winner` and `end_value` are
/// compared against that same mover.
///
/// # Type Parameters
///
/// * `State` - Immutable game state; equal states must compare and hash equal
/// * `Move` - One legal transition, no ordering required
/// * `Player` - Player identifier, small and copyable
///
/// # Example
///
/// ```rust
/// use board_core::Board;
///
/// /// Players alternately add one or two; whoever reaches ten wins.
/// #[derive(Debug)]
/// struct RaceToTen;
///
/// impl Board for RaceToTen {
///     type State = (u8, u8); // (total, player to act)
///     type Move = u8;
///     type Player = u8;
///
///     fn legal_plays(&self, history: &[Self::State]) -> Vec<Self::Move> {
///         match history.last() {
///             Some(&(total, _)) if total < 10 => vec![1, 2],
///             _ => Vec::new(),
///         }
///     }
///
///     fn next_state(&self, state: &Self::State, play: &Self::Move) -> Self::State {
///         ((state.0 + play).min(10), 3 - state.1)
///     }
///
///     fn current_player(&self, state: &Self::State) -> Self::Player {
///         state.1
///     }
///
///     fn winner(&self, history: &[Self::State]) -> Option<Self::Player> {
///         // The player who reached ten is the one no longer to act
///         history.last().filter(|s| s.0 >= 10).map(|s| 3 - s.1)
///     }
///
///     fn end_value(&self, history: &[Self::State], player: Self::Player) -> Option<f64> {
///         self.winner(history).map(|w| if w == player { 1.0 } else { 0.0 })
///     }
/// }
///
/// let board = RaceToTen;
/// assert_eq!(board.legal_plays(&[(0, 1)]), vec![1, 2]);
/// assert_eq!(board.winner(&[(9, 1), (10, 2)]), Some(1));
/// ```
pub trait Board {
    /// Game state type - cloned into histories and statistics keys
    type State: Clone + Eq + Hash + Debug;

    /// Move type - identifies one legal transition
    type Move: Clone + Debug;

    /// Player identifier type
    type Player: Copy + Eq + Hash + Debug;

    /// Legal moves from the last state of `history`.
    ///
    /// Returns an empty list when the game is over or nobody can act.
    fn legal_plays(&self, history: &[Self::State]) -> Vec<Self::Move>;

    /// Deterministic transition: the state reached by playing `play` from `state`.
    fn next_state(&self, state: &Self::State, play: &Self::Move) -> Self::State;

    /// The player who acts from `state`.
    fn current_player(&self, state: &Self::State) -> Self::Player;

    /// The decided winner of the game described by `history`, if any.
    fn winner(&self, history: &[Self::State]) -> Option<Self::Player>;

    /// Terminal payoff for `player`, or `None` while undecided.
    fn end_value(&self, history: &[Self::State], player: Self::Player) -> Option<f64>;

    /// Human-readable description of `play` made from `state`.
    ///
    /// Presentation only; the search uses it to label diagnostics.
    fn display(&self, _state: &Self::State, play: &Self::Move) -> String {
        format!("{play:?}")
    }

    /// Human-readable announcement of a result.
    fn winner_message(&self, msg: &str) -> String {
        msg.to_string()
    }
}
