//! Statistics store: the implicit search tree.
//!
//! Nodes are never linked to each other. Each tracked (player, state) pair
//! owns one record, and a node's children are whatever states the board
//! reports as reachable when the simulation asks.

use std::collections::HashMap;
use std::hash::Hash;

use board_core::NodeKey;

/// Visit statistics for one node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatRecord {
    /// Number of playouts that passed through this node
    pub visits: u32,

    /// Accumulated outcome: win count or summed payoff
    pub outcome: f64,
}

impl StatRecord {
    /// Mean outcome per visit. Returns 0.0 if never visited.
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.outcome / self.visits as f64
        }
    }

    /// UCB1 score: mean + c * sqrt(ln(N_siblings) / n).
    ///
    /// `log_total` is the natural log of the summed sibling visits,
    /// computed once per selection.
    #[inline]
    pub fn ucb1(&self, log_total: f64, c: f64) -> f64 {
        self.mean() + c * (log_total / self.visits as f64).sqrt()
    }
}

/// Mapping from node key to statistics, owned by one search instance.
#[derive(Debug, Clone)]
pub struct StatsStore<P, S> {
    records: HashMap<NodeKey<P, S>, StatRecord>,
}

impl<P, S> Default for StatsStore<P, S> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<P: Eq + Hash, S: Eq + Hash> StatsStore<P, S> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &NodeKey<P, S>) -> Option<&StatRecord> {
        self.records.get(key)
    }

    #[inline]
    pub fn contains(&self, key: &NodeKey<P, S>) -> bool {
        self.records.contains_key(key)
    }

    /// Visit count, 0 when the node is untracked.
    #[inline]
    pub fn visits(&self, key: &NodeKey<P, S>) -> u32 {
        self.records.get(key).map_or(0, |r| r.visits)
    }

    /// Start tracking `key` with an empty record.
    /// Returns false (and changes nothing) if it is already tracked.
    pub fn expand(&mut self, key: NodeKey<P, S>) -> bool {
        if self.records.contains_key(&key) {
            return false;
        }
        self.records.insert(key, StatRecord::default());
        true
    }

    /// Count one visit and add `outcome` if there is one.
    /// Untracked keys are ignored; returns whether the key was tracked.
    pub fn credit(&mut self, key: &NodeKey<P, S>, outcome: Option<f64>) -> bool {
        match self.records.get_mut(key) {
            Some(record) => {
                record.visits += 1;
                if let Some(outcome) = outcome {
                    record.outcome += outcome;
                }
                true
            }
            None => false,
        }
    }

    /// Record used for scoring a candidate move.
    ///
    /// Untracked nodes read as 1 visit and no outcome so a score can be
    /// computed without dividing by zero. Nothing is written back.
    pub fn floored(&self, key: &NodeKey<P, S>) -> StatRecord {
        self.records.get(key).copied().unwrap_or(StatRecord {
            visits: 1,
            outcome: 0.0,
        })
    }

    /// Drop every record.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeKey<P, S>, &StatRecord)> {
        self.records.iter()
    }
}

impl<P: Eq + Hash, S: Eq + Hash> PartialEq for StatsStore<P, S> {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}
