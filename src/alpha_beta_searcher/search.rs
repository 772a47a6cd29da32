//! Negamax search with alpha-beta pruning and a bound-storing transposition
//! table.
//!
//! # Core Algorithm
//!
//! Every call scores the position from the point of view of the side to move.
//! A child's score is negated on the way back up, so a single function
//! handles both players. The `[alpha, beta]` window holds the range of scores
//! that can still change the decision at the root; once a move scores at
//! least `beta` the remaining siblings cannot matter and are skipped.
//!
//! # Transposition Table
//!
//! Results are cached by board fingerprint as `[lower, upper]` bounds. A
//! result at or below the entry window is an upper bound, one at or above it
//! is a lower bound, anything strictly inside is exact. On a later visit the
//! stored bounds either settle the search immediately or narrow the window.
//! The remaining horizon is not part of the key, so a bound found by a
//! shallow search can be reused by a deeper one.
//!
//! # Board Discipline
//!
//! The board is shared by the whole recursion. Every move is explored through
//! `Board::with_move`, which pops the move again on every exit path, pruning
//! cutoffs and errors included.

use log::trace;

use crate::board::game_move::Move;
use crate::board::Board;

use super::transposition_table::{TranspositionEntry, TranspositionTable};
use super::{Evaluator, SearchConfig, SearchError};

/// A score from the side to move's point of view, with the move reaching it.
/// The move is `None` for leaves and for results answered from the table.
pub type SearchResult = (f64, Option<Move>);

/// Statistics collected during search.
#[derive(Default, Clone, Debug)]
pub struct SearchStats {
    pub position_count: usize,
    pub leaf_count: usize,
    pub cutoff_count: usize,
    pub tt_cutoffs: usize,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
    transposition_table: TranspositionTable,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchContext {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            transposition_table: TranspositionTable::new(config.tt_capacity),
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.transposition_table
    }

    pub fn transposition_table_mut(&mut self) -> &mut TranspositionTable {
        &mut self.transposition_table
    }

    /// Forget everything learned so far, ahead of a new top-level decision.
    pub fn reset(&mut self) {
        self.stats.reset();
        self.transposition_table.clear();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }
}

/// Alpha-beta negamax over `board` with bounds memoized in the context's
/// transposition table. Returns the value of the position for the side to
/// move together with the best move found.
pub fn alpha_beta_memo<E: Evaluator>(
    context: &mut SearchContext,
    board: &mut Board,
    evaluator: &E,
    mut alpha: f64,
    mut beta: f64,
    horizon: u8,
) -> Result<SearchResult, SearchError> {
    context.stats.position_count += 1;

    let fingerprint = board.fingerprint();
    if let Some(entry) = context.transposition_table.probe(fingerprint) {
        if entry.is_exact() {
            context.stats.tt_cutoffs += 1;
            return Ok((entry.lower, None));
        }
        if entry.lower >= beta {
            context.stats.tt_cutoffs += 1;
            return Ok((entry.lower, None));
        }
        if entry.upper <= alpha {
            context.stats.tt_cutoffs += 1;
            return Ok((entry.upper, None));
        }
        alpha = alpha.max(entry.lower);
        beta = beta.min(entry.upper);
    }

    if horizon == 0 || board.is_game_over() {
        context.stats.leaf_count += 1;
        return Ok((evaluator.evaluate(board, board.turn()), None));
    }

    let mut a = alpha;
    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = None;

    for game_move in board.playable_moves() {
        let (child_score, _) = board.with_move(game_move, |board| {
            alpha_beta_memo(context, board, evaluator, -beta, -a, horizon - 1)
        })?;
        let score = -child_score;
        trace!("{} scored {} at horizon {}", game_move, score, horizon);

        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(game_move);
        }
        if score > a {
            a = score;
        }
        if best_score >= beta {
            context.stats.cutoff_count += 1;
            break;
        }
    }

    let entry = if best_score <= alpha {
        TranspositionEntry::upper_bound(best_score, horizon)
    } else if best_score >= beta {
        TranspositionEntry::lower_bound(best_score, horizon)
    } else {
        TranspositionEntry::exact(best_score, horizon)
    };
    context.transposition_table.store(fingerprint, entry);

    Ok((best_score, best_move))
}

/// Plain negamax without pruning or memoization. Exponentially slower than
/// `alpha_beta_memo`; used as the reference the pruned search must agree with.
pub fn negamax<E: Evaluator>(
    board: &mut Board,
    evaluator: &E,
    horizon: u8,
) -> Result<SearchResult, SearchError> {
    if horizon == 0 || board.is_game_over() {
        return Ok((evaluator.evaluate(board, board.turn()), None));
    }

    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = None;

    for game_move in board.playable_moves() {
        let (child_score, _) =
            board.with_move(game_move, |board| negamax(board, evaluator, horizon - 1))?;
        let score = -child_score;

        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(game_move);
        }
    }

    Ok((best_score, best_move))
}
