//! Move-selection policy: opening shortcut and forfeit avoidance.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::budget::TimeBudget;
use super::traits::{GameState, Searcher};

/// Wraps a searcher with the two safety nets every agent needs: a fixed
/// opening move on the empty board, and a random-legal-move fallback so a
/// decision never forfeits while a legal move exists.
///
/// The RNG is injected and seedable so fallback behavior is reproducible.
pub struct MovePolicy<T> {
    searcher: T,
    rng: StdRng,
}

impl<T> MovePolicy<T> {
    pub fn new(searcher: T) -> Self {
        Self {
            searcher,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(searcher: T, seed: u64) -> Self {
        Self {
            searcher,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn searcher(&self) -> &T {
        &self.searcher
    }

    /// Decides a move for the active player within the given budget.
    ///
    /// Returns `None` only when the position is terminal (no legal moves).
    /// Otherwise the returned move is always in the current legal-move set,
    /// regardless of how the search ended.
    pub fn decide_move<S>(&mut self, state: &S, budget: &TimeBudget) -> Option<S::Move>
    where
        S: GameState,
        T: Searcher<S>,
    {
        // Opening shortcut: the center is a fixed, cheap, empirically strong
        // first move; skip tree search entirely.
        if state.move_count() == 0 {
            return Some(state.center_move());
        }

        let chosen = match self.searcher.search(state, budget) {
            Ok(outcome) => {
                debug!(
                    "search finished: move {:?}, value {:?}, depth {:?}",
                    outcome.best_move, outcome.value, outcome.completed_depth
                );
                outcome.best_move
            }
            Err(interrupted) => {
                debug!("{}; no completed result to use", interrupted);
                None
            }
        };

        let legal_moves = state.legal_moves();
        match chosen {
            Some(mv) if legal_moves.contains(&mv) => Some(mv),
            _ => {
                let fallback = legal_moves.choose(&mut self.rng).copied();
                if fallback.is_some() {
                    debug!("falling back to a random legal move");
                }
                fallback
            }
        }
    }
}
