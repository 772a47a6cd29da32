//! CLI command implementations.

use structopt::StructOpt;

use reversi::alpha_beta_searcher::{MtdfMode, SearchConfig};
use reversi::board::DEFAULT_BOARD_SIZE;
use reversi::game::GameConfig;
use reversi::mcts::{ExpansionPolicy, MctsConfig};

pub trait Command {
    fn execute(self);
}

pub mod best_move;
pub mod compare;
pub mod play;

/// Engine settings shared by every command.
#[derive(StructOpt)]
pub struct EngineArgs {
    #[structopt(long, default_value = "10")]
    pub size: usize,
    /// Alpha-beta search depth.
    #[structopt(long, default_value = "5")]
    pub horizon: u8,
    /// `single-probe` or `converge`.
    #[structopt(long, default_value = "single-probe")]
    pub mtdf_mode: MtdfMode,
    /// Cap on the transposition table; unbounded when omitted.
    #[structopt(long)]
    pub tt_capacity: Option<usize>,
    /// UCT iterations per move.
    #[structopt(long, default_value = "100")]
    pub budget: usize,
    #[structopt(long, default_value = "0.7071067811865476")]
    pub exploration: f64,
    /// `first-visit` or `full`.
    #[structopt(long, default_value = "first-visit")]
    pub expansion: ExpansionPolicy,
    /// Seed for the uct and random players.
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl EngineArgs {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            board_size: self.size,
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            horizon: self.horizon,
            mtdf_mode: self.mtdf_mode,
            tt_capacity: self.tt_capacity,
            ..SearchConfig::default()
        }
    }

    pub fn mcts_config(&self) -> MctsConfig {
        MctsConfig {
            computational_budget: self.budget,
            exploration: self.exploration,
            expansion: self.expansion,
            seed: self.seed,
        }
    }
}
