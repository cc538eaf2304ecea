//! Core traits and types shared between boards and the UCT search engine
//!
//! This crate provides the narrow capability interface the search consumes:
//! - `Board`: legality, transition, termination and scoring queries over opaque states
//! - `NodeKey`: the (acting player, resulting state) identity used to index statistics
//!
//! Games are conforming `Board` implementations; the search never inspects
//! a state beyond equality and hashing.

pub mod board;
pub mod key;

// Re-export main types for convenience
pub use board::Board;
pub use key::NodeKey;
