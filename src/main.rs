use structopt::StructOpt;

use isolation::cli::commands::Command;
use isolation::cli::Isolation;

fn main() {
    env_logger::init();
    Isolation::from_args().execute();
}
