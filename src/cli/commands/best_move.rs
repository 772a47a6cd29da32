//! Best move command - ask one engine for the opening move.

use reversi::board::color::Color;
use reversi::player::{Player, Strategy};
use structopt::StructOpt;

use super::{Command, EngineArgs};

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: Strategy,
    #[structopt(flatten)]
    pub engine: EngineArgs,
}

fn opening_move(player: &mut dyn Player) -> Result<Option<(usize, usize)>, String> {
    player.new_game(Color::Black).map_err(|err| err.to_string())?;
    player.get_player_move().map_err(|err| err.to_string())
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut player = self.strategy.player(
            self.engine.size,
            &self.engine.search_config(),
            &self.engine.mcts_config(),
        );

        match opening_move(player.as_mut()) {
            Ok(Some((row, col))) => println!("{} {}", row, col),
            Ok(None) => println!("pass"),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
