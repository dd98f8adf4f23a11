//! Fixed-depth minimax search.

use log::debug;

use super::budget::{SearchInterrupted, TimeBudget};
use super::traits::{Evaluator, GameState, Score, SearchOutcome, Searcher, LOSS_SCORE, WIN_SCORE};

/// Explores the game tree to an exact ply limit and returns the move that
/// maximizes the searching player's worst-case outcome.
///
/// Ties are broken in favor of the move encountered first in generation
/// order. The searcher checks the time budget at the top of every recursive
/// call; a breach unwinds as `Err(SearchInterrupted)` through all active
/// frames.
pub struct MinimaxSearcher<E> {
    search_depth: u8,
    evaluator: E,
}

impl<E> MinimaxSearcher<E> {
    /// Creates a searcher exploring exactly `search_depth` plies.
    /// `search_depth` must be at least 1.
    pub fn new(search_depth: u8, evaluator: E) -> Self {
        assert!(search_depth >= 1, "search depth must be at least 1");
        Self {
            search_depth,
            evaluator,
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    /// Evaluates every legal root move to the configured depth.
    ///
    /// Completes with `best_move: None` and `value: Some(-inf)` when every
    /// branch backs up a proven loss: no move is better than any other at
    /// this depth, and the caller decides what to play. This is distinct from
    /// `Err(SearchInterrupted)`, which means the answer was cut short by the
    /// clock rather than computed.
    pub fn search<S>(
        &self,
        state: &S,
        budget: &TimeBudget,
    ) -> Result<SearchOutcome<S::Move>, SearchInterrupted>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        budget.checkpoint()?;

        let player = state.active_player();
        let mut best_move = None;
        let mut best_value = LOSS_SCORE;

        for mv in state.legal_moves() {
            let value = self.min_value(&state.forecast_move(mv), player, 1, budget)?;
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            debug!(
                "minimax depth {}: no surviving branch (value {})",
                self.search_depth, best_value
            );
        }

        Ok(SearchOutcome {
            best_move,
            value: Some(best_value),
            completed_depth: Some(self.search_depth),
        })
    }

    /// MAX layer: the searching player is to move.
    fn max_value<S>(
        &self,
        state: &S,
        player: S::Player,
        ply: u8,
        budget: &TimeBudget,
    ) -> Result<Score, SearchInterrupted>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        budget.checkpoint()?;

        if ply == self.search_depth {
            return Ok(self.evaluator.score(state, player));
        }

        // No legal moves means the searching player is to move and has lost.
        let mut value = LOSS_SCORE;
        for mv in state.legal_moves() {
            let child = self.min_value(&state.forecast_move(mv), player, ply + 1, budget)?;
            value = value.max(child);
        }
        Ok(value)
    }

    /// MIN layer: the opponent is to move.
    fn min_value<S>(
        &self,
        state: &S,
        player: S::Player,
        ply: u8,
        budget: &TimeBudget,
    ) -> Result<Score, SearchInterrupted>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        budget.checkpoint()?;

        if ply == self.search_depth {
            return Ok(self.evaluator.score(state, player));
        }

        // No legal moves means the opponent is to move and has lost.
        let mut value = WIN_SCORE;
        for mv in state.legal_moves() {
            let child = self.max_value(&state.forecast_move(mv), player, ply + 1, budget)?;
            value = value.min(child);
        }
        Ok(value)
    }
}

impl<S, E> Searcher<S> for MinimaxSearcher<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn search(
        &self,
        state: &S,
        budget: &TimeBudget,
    ) -> Result<SearchOutcome<S::Move>, SearchInterrupted> {
        MinimaxSearcher::search(self, state, budget)
    }
}
