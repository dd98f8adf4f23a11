//! Match runner: plays two agents against each other to completion.

use std::time::Duration;

use log::{debug, info};

use crate::board::{Board, BoardError, Move, Player};
use crate::searcher::{MovePolicy, Searcher, TimeBudget};

/// Per-decision clock settings for a match. Each agent gets a fresh budget
/// for every move it makes; time does not carry over between moves.
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub time_limit: Duration,
    pub timeout_threshold: Duration,
}

impl Default for MatchConfig {
    /// Tournament timing: 150 ms per move with a 10 ms safety margin.
    fn default() -> Self {
        Self {
            time_limit: Duration::from_millis(150),
            timeout_threshold: TimeBudget::DEFAULT_THRESHOLD,
        }
    }
}

/// The result of a finished match.
#[derive(Debug)]
pub struct MatchOutcome {
    pub winner: Player,
    pub history: Vec<Move>,
    pub final_board: Board,
}

/// Plays a match from `board` until one side cannot produce a move.
///
/// `first` decides for player 1 and `second` for player 2. The observer is
/// called after every applied move, with the updated board; renderers hook in
/// here without the loop knowing about terminals.
///
/// A policy returning `None` concedes the game, which by construction only
/// happens at a terminal position. A policy returning an illegal move is a
/// bug and surfaces as `BoardError::IllegalMove`.
pub fn play_match<A, B, F>(
    mut board: Board,
    first: &mut MovePolicy<A>,
    second: &mut MovePolicy<B>,
    config: &MatchConfig,
    mut observer: F,
) -> Result<MatchOutcome, BoardError>
where
    A: Searcher<Board>,
    B: Searcher<Board>,
    F: FnMut(&Board, Move),
{
    let mut history = Vec::new();

    loop {
        let budget = TimeBudget::with_threshold(config.time_limit, config.timeout_threshold);
        let active = board.active_player();
        let decision = match active {
            Player::One => first.decide_move(&board, &budget),
            Player::Two => second.decide_move(&board, &budget),
        };

        let mv = match decision {
            Some(mv) => mv,
            None => {
                let winner = active.opponent();
                info!("{} has no moves; {} wins", active, winner);
                return Ok(MatchOutcome {
                    winner,
                    history,
                    final_board: board,
                });
            }
        };

        board.apply_move(mv)?;
        debug!("{} plays {}", active, mv);
        history.push(mv);
        observer(&board, mv);
    }
}
