//! Time-bounded adversarial search.
//!
//! Two move-selection strategies over the same [`GameState`] contract: plain
//! fixed-depth minimax and iterative-deepening alpha-beta. Both are
//! constrained by a per-decision [`TimeBudget`] and wrapped by [`MovePolicy`],
//! which guarantees a legal move is returned whenever one exists.

pub mod alpha_beta;
pub mod budget;
pub mod minimax;
pub mod policy;
pub mod traits;

#[cfg(test)]
mod tests;

pub use alpha_beta::AlphaBetaSearcher;
pub use budget::{SearchInterrupted, TimeBudget};
pub use minimax::MinimaxSearcher;
pub use policy::MovePolicy;
pub use traits::{
    Evaluator, GameState, MoveList, Score, SearchOutcome, Searcher, LOSS_SCORE, WIN_SCORE,
};
