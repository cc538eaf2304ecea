//! TicTacToe board for the UCT search engine
//!
//! A small, fully enumerable reference implementation of the `Board` trait,
//! used to exercise and benchmark the search.
//!
//! # Usage
//!
//! ```rust
//! use board_core::Board;
//! use games_tictactoe::{State, TicTacToe};
//!
//! let board = TicTacToe::new();
//! let history = vec![State::new()];
//! assert_eq!(board.legal_plays(&history).len(), 9);
//! ```

use board_core::Board;

/// Marker for X, who moves first
pub const X: u8 = 1;
/// Marker for O
pub const O: u8 = 2;
/// `State::winner` value for a drawn game
pub const DRAW: u8 = 3;

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// current player, and winner information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    pub board: [u8; 9],
    /// Player to move: 1=X, 2=O
    pub current_player: u8,
    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    pub winner: u8,
}

impl State {
    /// Create a new initial game state
    pub fn new() -> Self {
        Self {
            board: [0; 9],
            current_player: X,
            winner: 0,
        }
    }

    /// Build a position from a board, deriving the player to move and the result.
    ///
    /// X moves whenever both sides have placed the same number of pieces.
    pub fn from_board(board: [u8; 9]) -> Self {
        let xs = board.iter().filter(|&&c| c == X).count();
        let os = board.iter().filter(|&&c| c == O).count();
        Self {
            board,
            current_player: if xs <= os { X } else { O },
            winner: Self::check_winner(&board),
        }
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.winner != 0
    }

    /// Get legal moves (empty positions)
    pub fn legal_moves(&self) -> Vec<u8> {
        if self.is_done() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == 0)
            .collect()
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: u8) -> State {
        if self.is_done() || position >= 9 || self.board[position as usize] != 0 {
            return *self; // Invalid move, return unchanged state
        }

        let mut new_state = *self;
        new_state.board[position as usize] = self.current_player;
        new_state.winner = Self::check_winner(&new_state.board);
        new_state.current_player = other(self.current_player);

        new_state
    }

    /// Check for winner on the board
    fn check_winner(board: &[u8; 9]) -> u8 {
        // Winning positions (rows, columns, diagonals)
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8], // rows
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8], // columns
            [0, 4, 8],
            [2, 4, 6], // diagonals
        ];

        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != 0 && board[a] == board[b] && board[b] == board[c] {
                return board[a];
            }
        }

        if board.iter().all(|&cell| cell != 0) {
            return DRAW;
        }

        0
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

fn other(player: u8) -> u8 {
    if player == X {
        O
    } else {
        X
    }
}

fn mark(player: u8) -> char {
    match player {
        X => 'X',
        O => 'O',
        _ => '.',
    }
}

/// TicTacToe rules as a board capability.
///
/// Payoffs: 1.0 for a win, 0.5 for a draw, 0.0 for a loss.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl TicTacToe {
    pub fn new() -> Self {
        Self
    }

    /// Empty-board starting state.
    pub fn initial() -> State {
        State::new()
    }
}

impl Board for TicTacToe {
    type State = State;
    type Move = u8;
    type Player = u8;

    fn legal_plays(&self, history: &[State]) -> Vec<u8> {
        history
            .last()
            .map(State::legal_moves)
            .unwrap_or_default()
    }

    fn next_state(&self, state: &State, play: &u8) -> State {
        state.make_move(*play)
    }

    fn current_player(&self, state: &State) -> u8 {
        state.current_player
    }

    fn winner(&self, history: &[State]) -> Option<u8> {
        history
            .last()
            .map(|s| s.winner)
            .filter(|&w| w == X || w == O)
    }

    fn end_value(&self, history: &[State], player: u8) -> Option<f64> {
        let last = history.last().filter(|s| s.is_done())?;
        Some(match last.winner {
            DRAW => 0.5,
            w if w == player => 1.0,
            _ => 0.0,
        })
    }

    fn display(&self, state: &State, play: &u8) -> String {
        format!("{} at {} ({}, {})", mark(state.current_player), play, play / 3, play % 3)
    }

    fn winner_message(&self, msg: &str) -> String {
        format!("Game over: {msg}")
    }
}
