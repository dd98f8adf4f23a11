//! Core traits for time-bounded adversarial search.

use std::fmt::Debug;

use smallvec::SmallVec;

/// Numeric evaluation of a position. Finite values are heuristic estimates;
/// the infinities are reserved for decided positions.
pub type Score = f64;

/// Sentinel score for a position the evaluated player has won.
pub const WIN_SCORE: Score = f64::INFINITY;

/// Sentinel score for a position the evaluated player has lost.
pub const LOSS_SCORE: Score = f64::NEG_INFINITY;

/// Legal moves in generation order. Eight inline slots cover the knight
/// directions; first-ply move lists spill to the heap.
pub type MoveList<M> = SmallVec<[M; 8]>;

/// Represents one immutable snapshot of a two-player zero-sum game.
///
/// Transitions are pure: `forecast_move` builds the successor position and
/// leaves the receiver untouched, so every recursive search frame owns its
/// own state and no undo bookkeeping is needed.
pub trait GameState: Clone {
    type Move: Copy + Eq + Debug;
    type Player: Copy + Eq + Debug;

    /// The player whose turn it is in this position.
    fn active_player(&self) -> Self::Player;

    /// The other player.
    fn opponent(&self, player: Self::Player) -> Self::Player;

    /// Legal moves for the given player, in a deterministic generation order.
    /// The order is observable: searchers break ties in favor of the move
    /// encountered first.
    fn legal_moves_for(&self, player: Self::Player) -> MoveList<Self::Move>;

    /// Legal moves for the active player.
    fn legal_moves(&self) -> MoveList<Self::Move> {
        self.legal_moves_for(self.active_player())
    }

    /// Returns the position reached by playing `mv`. Precondition: `mv` is in
    /// the active player's legal-move set.
    fn forecast_move(&self, mv: Self::Move) -> Self;

    fn is_winner(&self, player: Self::Player) -> bool;

    fn is_loser(&self, player: Self::Player) -> bool;

    /// Total number of moves played since the initial position.
    fn move_count(&self) -> usize;

    /// Number of unoccupied cells. Bounds iterative deepening: no line of
    /// play can be longer than the blank space remaining.
    fn blank_space_count(&self) -> usize;

    /// The geometric center of the board, played as the opening shortcut.
    fn center_move(&self) -> Self::Move;
}

/// Evaluates a position from one player's perspective.
///
/// Implementations must return [`WIN_SCORE`] exactly when the player has won
/// and [`LOSS_SCORE`] exactly when the player has lost; every other value must
/// be finite. The searchers treat evaluators as opaque strategies and never
/// depend on any particular heuristic.
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: S::Player) -> Score;
}

impl<S: GameState, E: Evaluator<S> + ?Sized> Evaluator<S> for Box<E> {
    #[inline]
    fn score(&self, state: &S, player: S::Player) -> Score {
        (**self).score(state, player)
    }
}

/// The result of one search attempt. Transient: created and discarded within
/// a single move decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome<M> {
    /// The best move found, if any branch survived the search.
    pub best_move: Option<M>,
    /// The backed-up value of `best_move`, when known.
    pub value: Option<Score>,
    /// The deepest ply limit that completed without interruption.
    pub completed_depth: Option<u8>,
}

impl<M> SearchOutcome<M> {
    /// An outcome carrying no usable move.
    pub fn none() -> Self {
        Self {
            best_move: None,
            value: None,
            completed_depth: None,
        }
    }
}

/// A move-search strategy constrained by a wall-clock budget.
///
/// `Err(SearchInterrupted)` is the expected termination path when the budget
/// runs out mid-search, not a failure; callers recover by falling back to a
/// previously known result or a random legal move.
pub trait Searcher<S: GameState> {
    fn search(
        &self,
        state: &S,
        budget: &crate::searcher::budget::TimeBudget,
    ) -> Result<SearchOutcome<S::Move>, crate::searcher::budget::SearchInterrupted>;
}

impl<S: GameState, T: Searcher<S> + ?Sized> Searcher<S> for Box<T> {
    #[inline]
    fn search(
        &self,
        state: &S,
        budget: &crate::searcher::budget::TimeBudget,
    ) -> Result<SearchOutcome<S::Move>, crate::searcher::budget::SearchInterrupted> {
        (**self).search(state, budget)
    }
}
