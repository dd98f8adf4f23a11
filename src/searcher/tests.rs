use std::time::Duration;

use super::alpha_beta::AlphaBetaSearcher;
use super::budget::{SearchInterrupted, TimeBudget};
use super::minimax::MinimaxSearcher;
use super::policy::MovePolicy;
use super::traits::{Evaluator, GameState, Score, LOSS_SCORE, WIN_SCORE};
use crate::board::{Board, Move, Player};
use crate::evaluate::MobilityEvaluator;
use crate::isolation_position;

fn generous_budget() -> TimeBudget {
    TimeBudget::new(Duration::from_secs(30))
}

fn expired_budget() -> TimeBudget {
    TimeBudget::new(Duration::ZERO)
}

/// Full-width minimax oracle with no pruning: the reference value of a
/// position for the given player, explored `remaining` plies further.
fn oracle_value(board: &Board, player: Player, remaining: u8) -> Score {
    if remaining == 0 {
        return MobilityEvaluator.score(board, player);
    }
    let moves = board.legal_moves();
    if moves.is_empty() {
        return if board.active_player() == player {
            LOSS_SCORE
        } else {
            WIN_SCORE
        };
    }
    let children = moves
        .iter()
        .map(|&mv| oracle_value(&board.forecast_move(mv), player, remaining - 1));
    if board.active_player() == player {
        children.fold(LOSS_SCORE, Score::max)
    } else {
        children.fold(WIN_SCORE, Score::min)
    }
}

/// The backed-up value of playing `mv` from `board`, searched to `depth`.
fn oracle_move_value(board: &Board, mv: Move, depth: u8) -> Score {
    let player = board.active_player();
    oracle_value(&board.forecast_move(mv), player, depth - 1)
}

/// A midgame 5x5 position with both players placed.
fn midgame_board() -> Board {
    isolation_position! {
        5 x 5;
        . . x . .
        . 1 . . .
        . . x . .
        . . . 2 .
        x . . . .
    }
}

#[test]
fn test_pruning_never_changes_the_decision_value() {
    let board = midgame_board();
    let minimax_eval = MobilityEvaluator;
    let alpha_beta = AlphaBetaSearcher::new(MobilityEvaluator);

    for depth in 1..=3 {
        let minimax = MinimaxSearcher::new(depth, minimax_eval);
        let mm_move = minimax
            .search(&board, &generous_budget())
            .unwrap()
            .best_move
            .expect("minimax should find a move");
        let (_, ab_move) = alpha_beta
            .search_to_depth(&board, depth, &generous_budget())
            .unwrap();
        let ab_move = ab_move.expect("alpha-beta should find a move");

        assert_eq!(
            oracle_move_value(&board, mm_move, depth),
            oracle_move_value(&board, ab_move, depth),
            "depth {} decision values diverge",
            depth
        );
    }
}

#[test]
fn test_alpha_beta_pass_agrees_with_oracle_root_value() {
    let board = midgame_board();
    let alpha_beta = AlphaBetaSearcher::new(MobilityEvaluator);
    let player = board.active_player();

    for depth in 1..=3 {
        let (value, _) = alpha_beta
            .search_to_depth(&board, depth, &generous_budget())
            .unwrap();
        assert_eq!(value, oracle_value(&board, player, depth));
    }
}

#[test]
fn test_deepening_keeps_last_completed_depth() {
    // Seven blank cells: a generous budget completes every limit 0..=6.
    let board = isolation_position! {
        4 x 4;
        x x 1 x
        . 2 . .
        . x . .
        . x x x
    };
    let searcher = AlphaBetaSearcher::new(MobilityEvaluator);
    let outcome = searcher.search(&board, &generous_budget());

    assert_eq!(outcome.completed_depth, Some(6));
    assert_eq!(outcome.best_move, Some(Move::new(1, 0)));
    assert_eq!(outcome.value, Some(WIN_SCORE));
}

#[test]
fn test_deeper_fixed_depth_search_never_returns_a_worse_move() {
    // Depth 1 falls for the trap move (2, 3); depth 2 and beyond choose
    // (1, 0), which wins. True values are exact at seven remaining plies.
    let board = isolation_position! {
        4 x 4;
        x x 1 x
        . 2 . .
        . x . .
        . x x x
    };
    let exact = board.blank_space_count() as u8;

    let mut previous = LOSS_SCORE;
    for depth in 1..=4 {
        let searcher = MinimaxSearcher::new(depth, MobilityEvaluator);
        let mv = searcher
            .search(&board, &generous_budget())
            .unwrap()
            .best_move
            .expect("position is not lost at the root");
        let true_value = oracle_move_value(&board, mv, exact);
        assert!(
            true_value >= previous,
            "depth {} returned a move with a lower true value",
            depth
        );
        previous = true_value;
    }
}

#[test]
fn test_minimax_distinguishes_guaranteed_loss_from_timeout() {
    // Both legal moves are proven losses at depth 2: the search completes
    // with no surviving branch, which is not the same as being interrupted.
    let board = isolation_position! {
        3 x 3;
        . 1 .
        x . x
        . 2 .
    };
    let searcher = MinimaxSearcher::new(2, MobilityEvaluator);

    let outcome = searcher.search(&board, &generous_budget()).unwrap();
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.value, Some(LOSS_SCORE));
    assert!(!board.legal_moves().is_empty());

    let interrupted = searcher.search(&board, &expired_budget());
    assert_eq!(interrupted, Err(SearchInterrupted));
}

#[test]
fn test_decide_move_returns_none_only_at_terminal_positions() {
    // Player 1 is to move with no knight jump available.
    let board = isolation_position! {
        3 x 3;
        1 . 2
        . . x
        . x .
    };
    assert!(board.legal_moves().is_empty());

    let mut policy = MovePolicy::with_seed(AlphaBetaSearcher::new(MobilityEvaluator), 11);
    assert_eq!(policy.decide_move(&board, &generous_budget()), None);
}

#[test]
fn test_decide_move_plays_center_on_empty_board() {
    let board = Board::new(7, 7);
    let mut policy = MovePolicy::with_seed(MinimaxSearcher::new(3, MobilityEvaluator), 11);

    // The opening shortcut fires before any search, even with no time left.
    assert_eq!(policy.decide_move(&board, &expired_budget()), Some(Move::new(3, 3)));
}

#[test]
fn test_expired_budget_still_yields_a_legal_move() {
    let board = midgame_board();
    let legal_moves = board.legal_moves();

    let mut minimax_policy = MovePolicy::with_seed(MinimaxSearcher::new(3, MobilityEvaluator), 17);
    let mv = minimax_policy
        .decide_move(&board, &expired_budget())
        .expect("legal moves exist, the policy must not forfeit");
    assert!(legal_moves.contains(&mv));

    let mut alpha_beta_policy = MovePolicy::with_seed(AlphaBetaSearcher::new(MobilityEvaluator), 17);
    let mv = alpha_beta_policy
        .decide_move(&board, &expired_budget())
        .expect("legal moves exist, the policy must not forfeit");
    assert!(legal_moves.contains(&mv));
}

#[test]
fn test_fallback_is_reproducible_with_equal_seeds() {
    let board = midgame_board();

    let mut first = MovePolicy::with_seed(AlphaBetaSearcher::new(MobilityEvaluator), 99);
    let mut second = MovePolicy::with_seed(AlphaBetaSearcher::new(MobilityEvaluator), 99);

    assert_eq!(
        first.decide_move(&board, &expired_budget()),
        second.decide_move(&board, &expired_budget())
    );
}

#[test]
fn test_guaranteed_loss_falls_back_to_a_legal_move() {
    let board = isolation_position! {
        3 x 3;
        . 1 .
        x . x
        . 2 .
    };
    let legal_moves = board.legal_moves();
    let mut policy = MovePolicy::with_seed(MinimaxSearcher::new(2, MobilityEvaluator), 5);

    let mv = policy
        .decide_move(&board, &generous_budget())
        .expect("a lost position with legal moves is still played out");
    assert!(legal_moves.contains(&mv));
}

#[test]
fn test_first_ply_scenario_on_small_board() {
    // One cell occupied by the opponent's opening; the active player has not
    // been placed yet and may claim any of the 8 blank cells.
    let board = isolation_position! {
        3 x 3;
        . . .
        . . .
        . 2 .
    };
    let legal_moves = board.legal_moves();
    assert_eq!(legal_moves.len(), 8);
    assert!(!legal_moves.contains(&Move::new(2, 1)));

    let mut policy = MovePolicy::with_seed(MinimaxSearcher::new(1, MobilityEvaluator), 11);
    let mv = policy
        .decide_move(&board, &generous_budget())
        .expect("eight legal moves exist");
    assert!(legal_moves.contains(&mv));
    assert_ne!(mv, Move::new(2, 1));
}
