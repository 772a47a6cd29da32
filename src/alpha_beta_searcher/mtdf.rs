use log::{debug, warn};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::game_move::Move;
use crate::board::Board;

use super::search::{alpha_beta_memo, SearchContext};
use super::{Evaluator, MtdfMode, SearchError};

/// Outcome of one MTD(f) decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MtdfReport {
    /// Value returned by the last probe, from the side to move's point of view.
    pub value: f64,
    pub best_move: Move,
    pub probes: usize,
    /// Whether the lower and upper bounds met. Always false after a single
    /// probe, since one of the bounds is still unbounded.
    pub converged: bool,
}

/// Drives `alpha_beta_memo` with null windows around a running guess of the
/// position's value, starting from `first_guess`.
///
/// In `MtdfMode::SingleProbe` the driver returns after the first probe
/// without waiting for the bounds to meet, which is cheaper but can settle on
/// a move a converged search would reject. `MtdfMode::Converge` keeps probing
/// until the bounds meet or `max_probes` is reached.
///
/// The root position's table entry is evicted after every probe, so each
/// probe expands the root and reports a move, and no root bound leaks into
/// the next decision.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn mtdf<E: Evaluator>(
    context: &mut SearchContext,
    board: &mut Board,
    evaluator: &E,
) -> Result<MtdfReport, SearchError> {
    let config = context.config().clone();
    debug!(
        "mtdf horizon: {}, mode: {}, first guess: {}",
        config.horizon, config.mtdf_mode, config.first_guess
    );

    if config.horizon < 1 {
        return Err(SearchError::HorizonTooLow);
    }
    if board.playable_moves().is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let root = board.fingerprint();
    context.transposition_table_mut().evict(root);

    let mut g = config.first_guess;
    let mut lower_bound = f64::NEG_INFINITY;
    let mut upper_bound = f64::INFINITY;
    let mut best_move = None;
    let mut probes = 0;

    loop {
        let beta = if g == lower_bound { g + 1. } else { g };
        let (value, probe_move) =
            alpha_beta_memo(context, board, evaluator, beta - 1., beta, config.horizon)?;
        context.transposition_table_mut().evict(root);
        probes += 1;

        if probe_move.is_some() {
            best_move = probe_move;
        }
        g = value;
        if g < beta {
            upper_bound = g;
        } else {
            lower_bound = g;
        }
        debug!(
            "probe {} window [{}, {}] -> {} bounds [{}, {}]",
            probes,
            beta - 1.,
            beta,
            g,
            lower_bound,
            upper_bound
        );

        if config.mtdf_mode == MtdfMode::SingleProbe || lower_bound >= upper_bound {
            break;
        }
        if probes >= config.max_probes {
            warn!(
                "mtdf stopped after {} probes with bounds [{}, {}]",
                probes, lower_bound, upper_bound
            );
            break;
        }
    }

    let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
    let stats = context.stats();
    let table = context.transposition_table();
    debug!(
        "mtdf chose {} (value {}, {} positions, {} leaves, {} cutoffs, {} table cutoffs)",
        best_move, g, stats.position_count, stats.leaf_count, stats.cutoff_count, stats.tt_cutoffs
    );
    debug!(
        "table size {}, {} hits, {} stores, {} overwrites",
        table.len(),
        table.hits(),
        table.stores(),
        table.overwrites()
    );

    Ok(MtdfReport {
        value: g,
        best_move,
        probes,
        converged: lower_bound >= upper_bound,
    })
}
