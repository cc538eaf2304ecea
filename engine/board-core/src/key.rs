//! Statistics key for search nodes.
//!
//! The implicit search tree is a table of statistics indexed by this key,
//! not an explicit graph. Two players reaching an identical state are
//! distinct nodes.

/// Composite node identity: the player who moved and the state they produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey<P, S> {
    /// Player whose move produced `state`
    pub player: P,

    /// Resulting game state
    pub state: S,
}

impl<P, S> NodeKey<P, S> {
    pub fn new(player: P, state: S) -> Self {
        Self { player, state }
    }
}
