//! Best-effort one-to-one mapping between two relational schemas' column
//! names.
//!
//! The engine normalizes names, scores every (source, target) pair with a
//! weighted combination of token and character-level signals, and assigns
//! targets greedily under a minimum-score threshold. It is pure and
//! synchronous: no I/O, no shared state, deterministic for a given input
//! order.

pub mod engine;
pub mod normalize;
mod score;
pub mod sequence;
pub mod vocabulary;

pub use engine::{DEFAULT_THRESHOLD, MatchEngine};
pub use vocabulary::Vocabulary;
