//! Watch command - watch two engine agents play against each other.

use std::str::FromStr;
use std::time::Duration;

use structopt::StructOpt;

use crate::board::Board;
use crate::evaluate::{CenterEvaluator, DistanceEvaluator, MobilityEvaluator};
use crate::game::{play_match, MatchConfig};
use crate::searcher::{AlphaBetaSearcher, Evaluator, MinimaxSearcher, MovePolicy, Searcher};

use super::Command;

type ParseError = &'static str;

/// Which search strategy drives one side of the match.
#[derive(Clone, Copy, Debug)]
pub enum AgentKind {
    Minimax,
    AlphaBeta,
}

impl FromStr for AgentKind {
    type Err = ParseError;
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "minimax" => Ok(AgentKind::Minimax),
            "alphabeta" => Ok(AgentKind::AlphaBeta),
            _ => Err("invalid agent; options are: minimax, alphabeta"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum EvaluatorKind {
    Mobility,
    Distance,
    Center,
}

impl FromStr for EvaluatorKind {
    type Err = ParseError;
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "mobility" => Ok(EvaluatorKind::Mobility),
            "distance" => Ok(EvaluatorKind::Distance),
            "center" => Ok(EvaluatorKind::Center),
            _ => Err("invalid evaluator; options are: mobility, distance, center"),
        }
    }
}

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long, default_value = "7")]
    pub width: u8,
    #[structopt(long, default_value = "7")]
    pub height: u8,
    #[structopt(
        long = "time-limit-ms",
        default_value = "150",
        help = "Time budget per move in milliseconds"
    )]
    pub time_limit_ms: u64,
    #[structopt(
        long = "timeout-threshold-ms",
        default_value = "10",
        help = "Safety margin: search aborts once less than this remains"
    )]
    pub timeout_threshold_ms: u64,
    #[structopt(
        short,
        long,
        default_value = "3",
        help = "Ply limit for fixed-depth minimax agents"
    )]
    pub depth: u8,
    #[structopt(long, default_value = "alphabeta")]
    pub first: AgentKind,
    #[structopt(long, default_value = "minimax")]
    pub second: AgentKind,
    #[structopt(long, default_value = "mobility")]
    pub evaluator: EvaluatorKind,
    #[structopt(long, help = "Seed for the fallback RNG, for reproducible games")]
    pub seed: Option<u64>,
    #[structopt(long, help = "Only print the final result")]
    pub quiet: bool,
}

impl Command for WatchArgs {
    fn execute(self) {
        if self.width as usize * self.height as usize > 64 {
            eprintln!("board too large: at most 64 cells are supported");
            std::process::exit(1);
        }

        let board = Board::new(self.width, self.height);
        let config = MatchConfig {
            time_limit: Duration::from_millis(self.time_limit_ms),
            timeout_threshold: Duration::from_millis(self.timeout_threshold_ms),
        };

        let mut first = self.build_agent(self.first);
        let mut second = self.build_agent(self.second);

        let quiet = self.quiet;
        let mut move_number = 0usize;
        let result = play_match(board, &mut first, &mut second, &config, |board, mv| {
            move_number += 1;
            if !quiet {
                // The turn has already passed to the other side.
                let mover = board.active_player().opponent();
                println!("move {}: {} plays {}", move_number, mover, mv);
                println!("{}", board);
            }
        });

        match result {
            Ok(outcome) => {
                println!("{} wins after {} moves", outcome.winner, outcome.history.len());
            }
            Err(error) => {
                eprintln!("error: {}", error);
                std::process::exit(1);
            }
        }
    }
}

impl WatchArgs {
    fn build_evaluator(&self) -> Box<dyn Evaluator<Board>> {
        match self.evaluator {
            EvaluatorKind::Mobility => Box::new(MobilityEvaluator),
            EvaluatorKind::Distance => Box::new(DistanceEvaluator),
            EvaluatorKind::Center => Box::new(CenterEvaluator),
        }
    }

    fn build_agent(&self, kind: AgentKind) -> MovePolicy<Box<dyn Searcher<Board>>> {
        let evaluator = self.build_evaluator();
        let searcher: Box<dyn Searcher<Board>> = match kind {
            AgentKind::Minimax => Box::new(MinimaxSearcher::new(self.depth, evaluator)),
            AgentKind::AlphaBeta => Box::new(AlphaBetaSearcher::new(evaluator)),
        };
        match self.seed {
            Some(seed) => MovePolicy::with_seed(searcher, seed),
            None => MovePolicy::new(searcher),
        }
    }
}
