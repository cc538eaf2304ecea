//! Small deterministic boards used as test doubles.

use std::cell::Cell;

use board_core::Board;

/// Move in the counter game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Counter {
    pub count: u32,
    /// First move of the game, fixed once played
    pub opened_with: Option<Step>,
}

/// When player 1 is declared the winner.
#[derive(Debug, Clone, Copy)]
pub enum WinRule {
    /// As soon as the counter reaches the threshold on any path
    Reach(u32),
    /// Only on paths that opened with the given step
    ReachAfter(u32, Step),
}

/// Every move increments a counter; players alternate (1 on even counts).
///
/// Counts `next_state` calls so tests can tell whether a search ran.
#[derive(Debug)]
pub struct CounterBoard {
    pub rule: WinRule,
    pub moves: Vec<Step>,
    pub next_state_calls: Cell<usize>,
}

impl CounterBoard {
    pub fn new(rule: WinRule) -> Self {
        Self {
            rule,
            moves: vec![Step::A, Step::B],
            next_state_calls: Cell::new(0),
        }
    }

    pub fn with_moves(mut self, moves: Vec<Step>) -> Self {
        self.moves = moves;
        self
    }

    pub fn initial(&self) -> Counter {
        Counter {
            count: 0,
            opened_with: None,
        }
    }
}

impl Board for CounterBoard {
    type State = Counter;
    type Move = Step;
    type Player = u8;

    fn legal_plays(&self, history: &[Counter]) -> Vec<Step> {
        if self.winner(history).is_some() {
            return Vec::new();
        }
        self.moves.clone()
    }

    fn next_state(&self, state: &Counter, play: &Step) -> Counter {
        self.next_state_calls.set(self.next_state_calls.get() + 1);
        Counter {
            count: state.count + 1,
            opened_with: state.opened_with.or(Some(*play)),
        }
    }

    fn current_player(&self, state: &Counter) -> u8 {
        if state.count % 2 == 0 {
            1
        } else {
            2
        }
    }

    fn winner(&self, history: &[Counter]) -> Option<u8> {
        let last = history.last()?;
        let decided = match self.rule {
            WinRule::Reach(n) => last.count >= n,
            WinRule::ReachAfter(n, step) => last.count >= n && last.opened_with == Some(step),
        };
        decided.then_some(1)
    }

    fn end_value(&self, history: &[Counter], player: u8) -> Option<f64> {
        self.winner(history)
            .map(|w| if w == player { 1.0 } else { 0.0 })
    }
}

/// Two states flipping back and forth forever; one player, no winner.
#[derive(Debug)]
pub struct CyclingBoard;

impl Board for CyclingBoard {
    type State = u8;
    type Move = u8;
    type Player = u8;

    fn legal_plays(&self, _history: &[u8]) -> Vec<u8> {
        vec![0, 1]
    }

    fn next_state(&self, state: &u8, _play: &u8) -> u8 {
        (state + 1) % 2
    }

    fn current_player(&self, _state: &u8) -> u8 {
        1
    }

    fn winner(&self, _history: &[u8]) -> Option<u8> {
        None
    }

    fn end_value(&self, _history: &[u8], _player: u8) -> Option<f64> {
        None
    }
}

/// One move from the root to a terminal state with a fixed payoff.
///
/// States are `0` (root) and `i + 1` for move `i`.
#[derive(Debug)]
pub struct PayoffBoard {
    payoffs: Vec<Option<f64>>,
}

impl PayoffBoard {
    pub const ROOT: usize = 0;

    pub fn new(payoffs: &[f64]) -> Self {
        Self {
            payoffs: payoffs.iter().copied().map(Some).collect(),
        }
    }

    /// `moves` terminal states, none of which ever scores.
    pub fn undecided(moves: usize) -> Self {
        Self {
            payoffs: vec![None; moves],
        }
    }

    pub fn payoff(&self, state: usize) -> Option<f64> {
        state.checked_sub(1).and_then(|i| self.payoffs.get(i).copied().flatten())
    }
}

impl Board for PayoffBoard {
    type State = usize;
    type Move = usize;
    type Player = u8;

    fn legal_plays(&self, history: &[usize]) -> Vec<usize> {
        match history.last() {
            Some(&Self::ROOT) => (0..self.payoffs.len()).collect(),
            _ => Vec::new(),
        }
    }

    fn next_state(&self, _state: &usize, play: &usize) -> usize {
        play + 1
    }

    fn current_player(&self, _state: &usize) -> u8 {
        1
    }

    fn winner(&self, _history: &[usize]) -> Option<u8> {
        None
    }

    fn end_value(&self, history: &[usize], _player: u8) -> Option<f64> {
        history.last().and_then(|&state| self.payoff(state))
    }
}
