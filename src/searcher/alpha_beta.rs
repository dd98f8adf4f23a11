//! Iterative-deepening alpha-beta search.
//!
//! The remaining time budget is unknown in advance and varies per move, so
//! the searcher must be anytime: it repeats a full alpha-beta pass at depth
//! limits 0, 1, 2, ... and always holds the move from the last depth that
//! finished entirely. When the clock interrupts a pass, the partial result is
//! discarded and the previous depth's answer stands. Deepening stops at the
//! number of blank cells, since no line of play can be longer than that.

use log::debug;

use super::budget::{SearchInterrupted, TimeBudget};
use super::traits::{Evaluator, GameState, Score, SearchOutcome, Searcher, LOSS_SCORE, WIN_SCORE};

/// Anytime searcher: fail-hard alpha-beta passes at increasing depth limits.
pub struct AlphaBetaSearcher<E> {
    evaluator: E,
}

impl<E> AlphaBetaSearcher<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Deepens until the budget is exhausted, keeping the best move from the
    /// last fully completed depth. Never fails: with no time at all the
    /// outcome simply carries no move.
    pub fn search<S>(&self, state: &S, budget: &TimeBudget) -> SearchOutcome<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let mut outcome = SearchOutcome::none();
        let max_depth = state.blank_space_count() as u8;

        for depth_limit in 0..max_depth {
            match self.search_to_depth(state, depth_limit, budget) {
                Ok((value, best_move)) => {
                    outcome = SearchOutcome {
                        best_move,
                        value: Some(value),
                        completed_depth: Some(depth_limit),
                    };
                }
                Err(SearchInterrupted) => {
                    debug!(
                        "deepening interrupted at limit {}; keeping depth {:?}",
                        depth_limit, outcome.completed_depth
                    );
                    break;
                }
            }
        }

        outcome
    }

    /// One fresh alpha-beta pass with window (-inf, +inf) at a fixed depth
    /// limit. Exposed separately so a single pass can be exercised directly.
    pub fn search_to_depth<S>(
        &self,
        state: &S,
        depth_limit: u8,
        budget: &TimeBudget,
    ) -> Result<(Score, Option<S::Move>), SearchInterrupted>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let player = state.active_player();
        self.max_node(state, player, LOSS_SCORE, WIN_SCORE, 0, depth_limit, budget)
    }

    /// MAX node: picks the strictly greatest child value, cutting off the
    /// remaining siblings as soon as the running value reaches beta.
    #[allow(clippy::too_many_arguments)]
    fn max_node<S>(
        &self,
        state: &S,
        player: S::Player,
        mut alpha: Score,
        beta: Score,
        ply: u8,
        depth_limit: u8,
        budget: &TimeBudget,
    ) -> Result<(Score, Option<S::Move>), SearchInterrupted>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        budget.checkpoint()?;

        if ply >= depth_limit {
            return Ok((self.evaluator.score(state, player), None));
        }

        let mut value = LOSS_SCORE;
        let mut best_move = None;

        for mv in state.legal_moves() {
            let (child_value, _) = self.min_node(
                &state.forecast_move(mv),
                player,
                alpha,
                beta,
                ply + 1,
                depth_limit,
                budget,
            )?;
            if child_value > value {
                value = child_value;
                best_move = Some(mv);
            }
            if value >= beta {
                return Ok((value, best_move));
            }
            alpha = alpha.max(value);
        }

        Ok((value, best_move))
    }

    /// MIN node: symmetric, cutting off once the running value falls to alpha.
    #[allow(clippy::too_many_arguments)]
    fn min_node<S>(
        &self,
        state: &S,
        player: S::Player,
        alpha: Score,
        mut beta: Score,
        ply: u8,
        depth_limit: u8,
        budget: &TimeBudget,
    ) -> Result<(Score, Option<S::Move>), SearchInterrupted>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        budget.checkpoint()?;

        if ply >= depth_limit {
            return Ok((self.evaluator.score(state, player), None));
        }

        let mut value = WIN_SCORE;
        let mut best_move = None;

        for mv in state.legal_moves() {
            let (child_value, _) = self.max_node(
                &state.forecast_move(mv),
                player,
                alpha,
                beta,
                ply + 1,
                depth_limit,
                budget,
            )?;
            if child_value < value {
                value = child_value;
                best_move = Some(mv);
            }
            if value <= alpha {
                return Ok((value, best_move));
            }
            beta = beta.min(value);
        }

        Ok((value, best_move))
    }
}

impl<S, E> Searcher<S> for AlphaBetaSearcher<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn search(
        &self,
        state: &S,
        budget: &TimeBudget,
    ) -> Result<SearchOutcome<S::Move>, SearchInterrupted> {
        // The deepening loop is the recovery boundary for interruption, so
        // this strategy never surfaces the error itself.
        Ok(AlphaBetaSearcher::search(self, state, budget))
    }
}
