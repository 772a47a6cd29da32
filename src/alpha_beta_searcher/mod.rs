//! Memoized alpha-beta search driven by MTD(f).

mod mtdf;
mod search;
mod transposition_table;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::Board;

pub use mtdf::{mtdf, MtdfReport};
pub use search::{alpha_beta_memo, negamax, SearchContext, SearchResult, SearchStats};
pub use transposition_table::{TranspositionEntry, TranspositionTable};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("horizon must be at least 1")]
    HorizonTooLow,
    #[error("computational budget must be at least 1")]
    BudgetTooLow,
    #[error("computational budget must be at most {max}, got {budget}")]
    BudgetTooHigh { budget: usize, max: usize },
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Evaluates a position and returns a score. Higher scores favor `player`.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: Color) -> f64;
}

/// How many null-window probes the MTD(f) driver runs per decision.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MtdfMode {
    /// Stop after the first probe and play its best move.
    SingleProbe,
    /// Keep probing until the lower and upper bounds meet.
    Converge,
}

impl Default for MtdfMode {
    fn default() -> Self {
        MtdfMode::SingleProbe
    }
}

impl fmt::Display for MtdfMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MtdfMode::SingleProbe => write!(f, "single-probe"),
            MtdfMode::Converge => write!(f, "converge"),
        }
    }
}

// used for parsing cli args
impl FromStr for MtdfMode {
    type Err = &'static str;
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "single-probe" => Ok(MtdfMode::SingleProbe),
            "converge" => Ok(MtdfMode::Converge),
            _ => Err("invalid mtdf mode; options are: single-probe, converge"),
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub horizon: u8,
    pub mtdf_mode: MtdfMode,
    pub first_guess: f64,
    /// Upper limit on probes in `MtdfMode::Converge`.
    pub max_probes: usize,
    /// `None` keeps every entry until the table is cleared.
    pub tt_capacity: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            horizon: 5,
            mtdf_mode: MtdfMode::default(),
            first_guess: 0.,
            max_probes: 64,
            tt_capacity: None,
        }
    }
}
