//! Heuristic evaluation of Isolation positions.
//!
//! Every evaluator honors the same terminal contract: exactly +inf for a won
//! position, exactly -inf for a lost one, a finite estimate otherwise. The
//! searchers treat them as opaque strategies; which heuristic is strongest is
//! a tuning question, not an engine question.

use crate::board::{Board, Player};
use crate::searcher::{Evaluator, GameState, Score, LOSS_SCORE, WIN_SCORE};

/// Terminal check shared by all evaluators. Returns the sentinel score for a
/// decided position, `None` while the game is still open.
fn terminal_score<S: GameState>(state: &S, player: S::Player) -> Option<Score> {
    if state.is_loser(player) {
        Some(LOSS_SCORE)
    } else if state.is_winner(player) {
        Some(WIN_SCORE)
    } else {
        None
    }
}

/// Own mobility against twice the opponent's: favors positions that keep
/// options open while shutting the opponent in.
#[derive(Clone, Copy, Debug, Default)]
pub struct MobilityEvaluator;

impl<S: GameState> Evaluator<S> for MobilityEvaluator {
    fn score(&self, state: &S, player: S::Player) -> Score {
        if let Some(score) = terminal_score(state, player) {
            return score;
        }
        let own_moves = state.legal_moves_for(player).len() as Score;
        let opponent_moves = state.legal_moves_for(state.opponent(player)).len() as Score;
        own_moves - 2.0 * opponent_moves
    }
}

fn squared_distance(a: (u8, u8), b: (u8, u8)) -> Score {
    let dr = a.0 as Score - b.0 as Score;
    let dc = a.1 as Score - b.1 as Score;
    dr * dr + dc * dc
}

/// Mobility plus the squared distance between the players: prefers keeping
/// away from the opponent while retaining options.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistanceEvaluator;

impl Evaluator<Board> for DistanceEvaluator {
    fn score(&self, state: &Board, player: Player) -> Score {
        if let Some(score) = terminal_score(state, player) {
            return score;
        }
        let own_moves = state.legal_moves_for(player).len() as Score;
        let opponent_moves = state.legal_moves_for(player.opponent()).len() as Score;
        let mobility = own_moves - 2.0 * opponent_moves;

        match (
            state.player_location(player),
            state.player_location(player.opponent()),
        ) {
            (Some(own), Some(other)) => {
                mobility + squared_distance((own.row, own.col), (other.row, other.col))
            }
            _ => mobility,
        }
    }
}

/// Mobility minus the squared distance from the board's center: penalizes
/// drifting toward the edges, where mobility collapses late in the game.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterEvaluator;

impl Evaluator<Board> for CenterEvaluator {
    fn score(&self, state: &Board, player: Player) -> Score {
        if let Some(score) = terminal_score(state, player) {
            return score;
        }
        let own_moves = state.legal_moves_for(player).len() as Score;
        let opponent_moves = state.legal_moves_for(player.opponent()).len() as Score;
        let mobility = own_moves - 2.0 * opponent_moves;

        match state.player_location(player) {
            Some(own) => {
                let center = state.center();
                mobility - squared_distance((own.row, own.col), (center.row, center.col))
            }
            None => mobility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;
    use crate::isolation_position;

    #[test]
    fn test_lost_position_scores_negative_infinity() {
        let board = isolation_position! {
            3 x 3;
            1 . 2
            . . x
            . x .
        };
        assert_eq!(MobilityEvaluator.score(&board, Player::One), LOSS_SCORE);
        assert_eq!(DistanceEvaluator.score(&board, Player::One), LOSS_SCORE);
        assert_eq!(CenterEvaluator.score(&board, Player::One), LOSS_SCORE);
    }

    #[test]
    fn test_won_position_scores_positive_infinity() {
        let board = isolation_position! {
            3 x 3;
            1 . 2
            . . x
            . x .
        };
        assert_eq!(MobilityEvaluator.score(&board, Player::Two), WIN_SCORE);
        assert_eq!(DistanceEvaluator.score(&board, Player::Two), WIN_SCORE);
        assert_eq!(CenterEvaluator.score(&board, Player::Two), WIN_SCORE);
    }

    #[test]
    fn test_mobility_arithmetic() {
        let mut board = Board::new(5, 5);
        board.place_player(Player::One, Move::new(2, 2)); // 8 jumps
        board.place_player(Player::Two, Move::new(0, 0)); // (1, 2) and (2, 1)
        board.set_active_player(Player::One);

        assert_eq!(MobilityEvaluator.score(&board, Player::One), 8.0 - 2.0 * 2.0);
        assert_eq!(MobilityEvaluator.score(&board, Player::Two), 2.0 - 2.0 * 8.0);
    }

    #[test]
    fn test_open_position_scores_are_finite() {
        let mut board = Board::new(5, 5);
        board.place_player(Player::One, Move::new(2, 2));
        board.place_player(Player::Two, Move::new(0, 0));

        for player in [Player::One, Player::Two].iter().copied() {
            assert!(MobilityEvaluator.score(&board, player).is_finite());
            assert!(DistanceEvaluator.score(&board, player).is_finite());
            assert!(CenterEvaluator.score(&board, player).is_finite());
        }
    }
}
