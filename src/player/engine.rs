use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::alpha_beta_searcher::{mtdf, SearchConfig, SearchContext, SearchError};
use crate::board::color::Color;
use crate::board::game_move::Move;
use crate::board::Board;
use crate::evaluate::HeuristicEvaluator;
use crate::mcts::{uct_search, MctsConfig};

/// Picks a move for `color` on a board where `color` is to move. The board
/// must be left as it was found.
pub trait Engine: Send {
    fn name(&self) -> &'static str;
    fn choose_move(&mut self, board: &mut Board, color: Color) -> Result<Move, SearchError>;
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// MTD(f) over the memoized alpha-beta search, scored by the heuristic.
pub struct AlphaBetaEngine {
    context: SearchContext,
}

impl AlphaBetaEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            context: SearchContext::new(config),
        }
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn choose_move(&mut self, board: &mut Board, _color: Color) -> Result<Move, SearchError> {
        // every decision starts from an empty table
        self.context.reset();
        let report = mtdf(&mut self.context, board, &HeuristicEvaluator)?;
        debug!(
            "alpha-beta: {} after {} probes, {} positions searched",
            report.best_move,
            report.probes,
            self.context.searched_position_count()
        );
        Ok(report.best_move)
    }
}

pub struct MctsEngine {
    config: MctsConfig,
    rng: StdRng,
}

impl MctsEngine {
    pub fn new(config: MctsConfig) -> Self {
        Self {
            rng: rng_from_seed(config.seed),
            config,
        }
    }
}

impl Engine for MctsEngine {
    fn name(&self) -> &'static str {
        "uct"
    }

    fn choose_move(&mut self, board: &mut Board, color: Color) -> Result<Move, SearchError> {
        uct_search(board, color, &self.config, &mut self.rng)
    }
}

/// Plays a uniformly random legal move, passing only when forced to.
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: rng_from_seed(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, board: &mut Board, _color: Color) -> Result<Move, SearchError> {
        board
            .playable_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoAvailableMoves)
    }
}
