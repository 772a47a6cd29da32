//! Compare command - many games between two engines, played in parallel.

use reversi::game::{compare, ComparisonConfig};
use reversi::player::Strategy;
use structopt::StructOpt;

use super::{Command, EngineArgs};

#[derive(StructOpt)]
pub struct CompareArgs {
    #[structopt(long, default_value = "uct")]
    pub black: Strategy,
    #[structopt(long, default_value = "alpha-beta")]
    pub white: Strategy,
    #[structopt(short, long, default_value = "10")]
    pub games: usize,
    #[structopt(flatten)]
    pub engine: EngineArgs,
}

impl Command for CompareArgs {
    fn execute(self) {
        let config = ComparisonConfig {
            game: self.engine.game_config(),
            search: self.engine.search_config(),
            mcts: self.engine.mcts_config(),
        };

        match compare(self.black, self.white, self.games, &config) {
            Ok(summary) => println!("{}", summary),
            Err(err) => eprintln!("The comparison was aborted: {}", err),
        }
    }
}
