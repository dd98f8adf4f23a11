//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::watch::WatchArgs;

#[derive(StructOpt)]
#[structopt(
    name = "isolation",
    about = "A time-bounded adversarial search engine for the game of Isolation"
)]
pub enum Isolation {
    #[structopt(
        name = "watch",
        about = "Watch two engine agents play against each other. Pick the search strategy per side with `--first` and `--second` (minimax or alphabeta), the heuristic with `--evaluator`, and the per-move clock with `--time-limit-ms`."
    )]
    Watch(WatchArgs),
}

impl crate::cli::commands::Command for Isolation {
    fn execute(self) {
        match self {
            Self::Watch(cmd) => cmd.execute(),
        }
    }
}
