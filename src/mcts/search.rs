//! The UCT loop: selection, expansion, random simulation and backup.
//!
//! Rewards are tile differentials at the end of a random game, always from
//! the searching player's point of view, so every level of the tree
//! accumulates the same value and the final pick is the root child with the
//! best mean.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::alpha_beta_searcher::SearchError;
use crate::board::color::Color;
use crate::board::game_move::Move;
use crate::board::Board;

use super::config::{ExpansionPolicy, MctsConfig};
use super::node::NodeId;
use super::tree::MctsTree;

/// Largest accepted `computational_budget`.
pub const MAX_BUDGET: usize = u32::MAX as usize;

/// Runs `config.computational_budget` UCT iterations from `board` on behalf
/// of `color` and returns the incoming action of the root child with the
/// highest mean reward.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn uct_search<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    config: &MctsConfig,
    rng: &mut R,
) -> Result<Move, SearchError> {
    let tree = build_tree(board, color, config, rng)?;

    let best = tree
        .best_child(tree.root(), 0.)
        .ok_or(SearchError::NoAvailableMoves)?;
    let node = tree.get(best);
    debug!(
        "uct chose {:?} (mean reward {:.2} over {} visits, {} nodes)",
        node.incoming_action,
        node.mean_reward(),
        node.visit_count,
        tree.len()
    );

    node.incoming_action.ok_or(SearchError::NoAvailableMoves)
}

/// Grows the search tree for `board` without picking a move.
pub fn build_tree<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    config: &MctsConfig,
    rng: &mut R,
) -> Result<MctsTree, SearchError> {
    if config.computational_budget == 0 {
        return Err(SearchError::BudgetTooLow);
    }
    // node ids and visit counts are u32
    if config.computational_budget > MAX_BUDGET {
        return Err(SearchError::BudgetTooHigh {
            budget: config.computational_budget,
            max: MAX_BUDGET,
        });
    }
    if board.playable_moves().is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let mut tree = MctsTree::new(board.snapshot());
    for _ in 0..config.computational_budget {
        let leaf = tree_policy(&mut tree, config, rng)?;
        let reward = default_policy(&tree.get(leaf).board, color, rng)?;
        tree.backup(leaf, reward);
    }

    Ok(tree)
}

/// Walks down from the root until it reaches a terminal node or a node the
/// expansion policy wants to grow, in which case the new child is returned.
pub fn tree_policy<R: Rng + ?Sized>(
    tree: &mut MctsTree,
    config: &MctsConfig,
    rng: &mut R,
) -> Result<NodeId, SearchError> {
    let mut current = tree.root();

    loop {
        let node = tree.get(current);
        if node.is_terminal() {
            return Ok(current);
        }

        let grow = match config.expansion {
            ExpansionPolicy::FirstVisit => !node.is_expanded(),
            ExpansionPolicy::Full => !node.is_fully_expanded(),
        };
        if grow {
            return expand(tree, current, rng);
        }

        current = match tree.best_child(current, config.exploration) {
            Some(child) => child,
            None => return Ok(current),
        };
    }
}

/// Adds a child for one untried move of `node_id`, chosen uniformly at
/// random, and returns it.
pub fn expand<R: Rng + ?Sized>(
    tree: &mut MctsTree,
    node_id: NodeId,
    rng: &mut R,
) -> Result<NodeId, SearchError> {
    let node = tree.get(node_id);
    let action = *node
        .untried_moves
        .choose(rng)
        .ok_or(SearchError::NoAvailableMoves)?;

    let mut board = node.board.snapshot();
    board.push(action)?;

    Ok(tree.add_child(node_id, action, board))
}

/// Plays uniformly random moves from `board` until the game ends and returns
/// `black - white` tiles, negated when `color` is white.
pub fn default_policy<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    rng: &mut R,
) -> Result<f64, SearchError> {
    let mut board = board.snapshot();

    while !board.is_game_over() {
        let game_move = *board
            .playable_moves()
            .choose(rng)
            .ok_or(SearchError::NoAvailableMoves)?;
        board.push(game_move)?;
    }

    let (white, black) = board.tile_counts();
    let score = black as f64 - white as f64;
    Ok(match color {
        Color::Black => score,
        Color::White => -score,
    })
}
