//! Static evaluation of reversi positions.
//!
//! The heuristic combines five sub-scores, each computed from the point of
//! view of `player`:
//!
//! * piece, frontier and positional differentials
//! * mobility (legal move counts)
//! * corner occupancy
//! * corner closeness (tiles next to an empty corner)
//! * coin parity (who is expected to play the last move)
//!
//! Terminal positions bypass the heuristic entirely and score
//! `WIN_SCORE`, `-WIN_SCORE` or `0`.

mod weights;

use crate::alpha_beta_searcher::Evaluator;
use crate::board::color::Color;
use crate::board::{Board, DIRECTIONS};

pub const WIN_SCORE: f64 = 1000.0;

const PIECE_WEIGHT: f64 = 10.0;
const PARITY_WEIGHT: f64 = 100.0;
const CORNER_OCCUPANCY_WEIGHT: f64 = 801.724;
const CORNER_CLOSENESS_WEIGHT: f64 = 382.026;
const MOBILITY_WEIGHT: f64 = 78.922;
const FRONTIER_WEIGHT: f64 = 74.396;
const POSITIONAL_WEIGHT: f64 = 10.0;

const CORNER_VALUE: f64 = 25.0;
const CORNER_NEIGHBOR_PENALTY: f64 = 12.5;

/// The static evaluator the alpha-beta search scores its leaves with.
#[derive(Clone, Copy, Default, Debug)]
pub struct HeuristicEvaluator;

impl Evaluator for HeuristicEvaluator {
    #[inline]
    fn evaluate(&self, board: &Board, player: Color) -> f64 {
        score(board, player)
    }
}

/// Scores `board` for `player`; higher is better for `player`.
pub fn score(board: &Board, player: Color) -> f64 {
    if board.is_game_over() {
        return terminal_score(board, player);
    }
    heuristic(board, player)
}

/// `WIN_SCORE` if `player` has more tiles, `-WIN_SCORE` if fewer, 0 on a tie.
pub fn terminal_score(board: &Board, player: Color) -> f64 {
    match board.winner() {
        Some(winner) if winner == player => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0.,
    }
}

/// The weighted heuristic, regardless of whether the game is over.
pub fn heuristic(board: &Board, player: Color) -> f64 {
    let pieces = piece_differentials(board, player);

    PIECE_WEIGHT * pieces.tiles
        + PARITY_WEIGHT * coin_parity(board, player)
        + CORNER_OCCUPANCY_WEIGHT * corner_occupancy(board, player)
        + CORNER_CLOSENESS_WEIGHT * corner_closeness(board, player)
        + MOBILITY_WEIGHT * mobility(board, player)
        + FRONTIER_WEIGHT * pieces.frontier
        + POSITIONAL_WEIGHT * pieces.positional
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceDifferentials {
    /// Percentage-style tile count differential.
    pub tiles: f64,
    /// Percentage-style frontier differential; positive when the opponent
    /// has more frontier tiles.
    pub frontier: f64,
    /// Sum of positional weights, signed by ownership.
    pub positional: f64,
}

pub fn piece_differentials(board: &Board, player: Color) -> PieceDifferentials {
    let size = board.size();
    let mut positional = 0;
    let mut my_tiles = 0;
    let mut opp_tiles = 0;
    let mut my_frontier = 0;
    let mut opp_frontier = 0;

    for row in 0..size {
        for col in 0..size {
            let owner = match board.cell(row, col) {
                Some(owner) => owner,
                None => continue,
            };
            let mine = owner == player;

            if mine {
                positional += weights::weight(size, row, col);
                my_tiles += 1;
            } else {
                positional -= weights::weight(size, row, col);
                opp_tiles += 1;
            }

            if touches_empty_square(board, row, col) {
                if mine {
                    my_frontier += 1;
                } else {
                    opp_frontier += 1;
                }
            }
        }
    }

    PieceDifferentials {
        tiles: percentage_differential(my_tiles, opp_tiles),
        frontier: -percentage_differential(my_frontier, opp_frontier),
        positional: f64::from(positional),
    }
}

/// Mobility differential between `player` and the opponent.
pub fn mobility(board: &Board, player: Color) -> f64 {
    let my_moves = board.count_legal_moves(player);
    let opponent_moves = board.count_legal_moves(player.opposite());
    percentage_differential(my_moves, opponent_moves)
}

/// `25` per corner held by `player`, `-25` per corner held by the opponent.
pub fn corner_occupancy(board: &Board, player: Color) -> f64 {
    let mut difference = 0.;
    for (row, col) in corners(board.size()) {
        match board.cell(row, col) {
            Some(owner) if owner == player => difference += 1.,
            Some(_) => difference -= 1.,
            None => (),
        }
    }
    CORNER_VALUE * difference
}

/// Penalizes tiles sitting next to a corner that is still empty.
pub fn corner_closeness(board: &Board, player: Color) -> f64 {
    let last = board.size() - 1;
    let mut mine = 0.;
    let mut theirs = 0.;

    for (corner_row, corner_col) in corners(board.size()) {
        if board.cell(corner_row, corner_col).is_some() {
            continue;
        }

        let inward_row = if corner_row == 0 { 1 } else { last - 1 };
        let inward_col = if corner_col == 0 { 1 } else { last - 1 };
        let neighbors = [
            (corner_row, inward_col),
            (inward_row, inward_col),
            (inward_row, corner_col),
        ];

        for &(row, col) in neighbors.iter() {
            match board.cell(row, col) {
                Some(owner) if owner == player => mine += 1.,
                Some(_) => theirs += 1.,
                None => (),
            }
        }
    }

    -CORNER_NEIGHBOR_PENALTY * (mine - theirs)
}

/// `1` when `player` is expected to play the last move, `-1` otherwise.
///
/// Without passes the side to move plays last exactly when an odd number of
/// squares is left.
pub fn coin_parity(board: &Board, player: Color) -> f64 {
    let last_mover = if board.empty_count() % 2 == 1 {
        board.turn()
    } else {
        board.turn().opposite()
    };

    if last_mover == player {
        1.
    } else {
        -1.
    }
}

// Returns the share of the larger count, signed in favor of its owner, and
// 0 when the counts are equal (including when both are 0).
fn percentage_differential(mine: usize, theirs: usize) -> f64 {
    let total = (mine + theirs) as f64;
    if mine > theirs {
        100. * mine as f64 / total
    } else if mine < theirs {
        -100. * theirs as f64 / total
    } else {
        0.
    }
}

fn touches_empty_square(board: &Board, row: usize, col: usize) -> bool {
    DIRECTIONS.iter().any(|&(d_row, d_col)| {
        let r = row as isize + d_row;
        let c = col as isize + d_col;
        board.in_bounds(r, c) && board.cell(r as usize, c as usize).is_none()
    })
}

fn corners(size: usize) -> [(usize, usize); 4] {
    let last = size - 1;
    [(0, 0), (0, last), (last, 0), (last, last)]
}
