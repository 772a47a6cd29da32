//! Play command - one game between two engines.

use reversi::game::run_local_game;
use reversi::player::Strategy;
use structopt::StructOpt;

use super::{Command, EngineArgs};

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(long, default_value = "uct")]
    pub black: Strategy,
    #[structopt(long, default_value = "alpha-beta")]
    pub white: Strategy,
    #[structopt(flatten)]
    pub engine: EngineArgs,
}

impl Command for PlayArgs {
    fn execute(self) {
        let search = self.engine.search_config();
        let mcts = self.engine.mcts_config();
        let size = self.engine.size;
        let mut black = self.black.player(size, &search, &mcts);
        let mut white = self.white.player(size, &search, &mcts);

        match run_local_game(black.as_mut(), white.as_mut(), &self.engine.game_config()) {
            Ok(outcome) => {
                match outcome.winner {
                    Some(winner) => println!("winner: {}", winner),
                    None => println!("draw"),
                }
                println!(
                    "black ({}): {} tiles, {:?} thinking",
                    self.black, outcome.black_tiles, outcome.black_time
                );
                println!(
                    "white ({}): {} tiles, {:?} thinking",
                    self.white, outcome.white_tiles, outcome.white_time
                );
                println!("{} moves", outcome.moves);
            }
            Err(err) => eprintln!("The game was aborted: {}", err),
        }
    }
}
