//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, compare::CompareArgs, play::PlayArgs};

#[derive(StructOpt)]
#[structopt(
    name = "reversi",
    about = "Alpha-beta and Monte Carlo tree search engines for reversi on an N×N board"
)]
pub enum Reversi {
    #[structopt(
        name = "play",
        about = "Play one game between two engines, chosen with `--black` (default: uct) and `--white` (default: alpha-beta), on a `--size` board (default: 10). Set RUST_LOG=debug to watch every move."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "best-move",
        about = "Ask one engine (`--strategy`, default: alpha-beta) for black's first move on an empty `--size` board and print it as `row col`."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "compare",
        about = "Play `--games` games (default: 10) between two engines in parallel and report wins, draws, average tiles and average thinking time for each side."
    )]
    Compare(CompareArgs),
}

impl crate::cli::commands::Command for Reversi {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            BestMove(cmd),
            Compare(cmd),
        }
    }
}
