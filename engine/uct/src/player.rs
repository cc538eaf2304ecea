//! An artificial player that tracks the game it is taking part in.
//!
//! The caller feeds every state the game passes through via `update`, and
//! asks for a move with `get_play` whenever it is this player's turn.

use board_core::Board;
use tracing::debug;

use crate::search::{SearchError, UctSearch};

/// UCT search bound to the running game history.
#[derive(Debug)]
pub struct UctPlayer<B: Board> {
    search: UctSearch<B>,
    states: Vec<B::State>,
}

impl<B: Board> UctPlayer<B> {
    /// Start tracking a game at `initial`.
    pub fn new(search: UctSearch<B>, initial: B::State) -> Self {
        Self {
            search,
            states: vec![initial],
        }
    }

    /// Append the state the game has moved to.
    pub fn update(&mut self, state: B::State) {
        self.states.push(state);
    }

    /// Choose a move from the latest state.
    pub fn get_play(&mut self) -> Result<Option<B::Move>, SearchError> {
        let play = self.search.get_play(&self.states)?;
        debug!(turn = self.states.len(), play = ?play, "Player chose move");
        Ok(play)
    }

    /// Every state seen so far, oldest first.
    pub fn history(&self) -> &[B::State] {
        &self.states
    }

    pub fn search(&self) -> &UctSearch<B> {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut UctSearch<B> {
        &mut self.search
    }

    pub fn display(&self, state: &B::State, play: &B::Move) -> String {
        self.search.display(state, play)
    }

    pub fn winner_message(&self, msg: &str) -> String {
        self.search.winner_message(msg)
    }
}
