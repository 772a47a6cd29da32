use std::fmt;
use std::str::FromStr;

use crate::alpha_beta_searcher::SearchConfig;
use crate::mcts::MctsConfig;

use super::{AlphaBetaPlayer, MctsPlayer, Player, RandomPlayer};

/// The engines a player can be built around.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    AlphaBeta,
    Uct,
    Random,
}

impl Strategy {
    /// Builds a player for this strategy. The random player reuses the MCTS
    /// seed so a seeded run is reproducible end to end.
    pub fn player(
        self,
        board_size: usize,
        search: &SearchConfig,
        mcts: &MctsConfig,
    ) -> Box<dyn Player> {
        match self {
            Strategy::AlphaBeta => {
                Box::new(AlphaBetaPlayer::alpha_beta(search.clone(), board_size))
            }
            Strategy::Uct => Box::new(MctsPlayer::mcts(mcts.clone(), board_size)),
            Strategy::Random => Box::new(RandomPlayer::random(mcts.seed, board_size)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AlphaBeta => write!(f, "alpha-beta"),
            Strategy::Uct => write!(f, "uct"),
            Strategy::Random => write!(f, "random"),
        }
    }
}

// used for parsing cli args
impl FromStr for Strategy {
    type Err = &'static str;
    fn from_str(strategy: &str) -> Result<Self, Self::Err> {
        match strategy {
            "alpha-beta" => Ok(Strategy::AlphaBeta),
            "uct" => Ok(Strategy::Uct),
            "random" => Ok(Strategy::Random),
            _ => Err("invalid strategy; options are: alpha-beta, uct, random"),
        }
    }
}
