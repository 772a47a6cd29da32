//! UCT configuration parameters.

use std::fmt;
use std::str::FromStr;

/// When the tree policy grows the tree instead of descending further.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExpansionPolicy {
    /// Expand a node only while it has no children at all; afterwards the
    /// tree policy always descends through its single child.
    FirstVisit,
    /// Expand a node while any of its moves is still untried.
    Full,
}

impl Default for ExpansionPolicy {
    fn default() -> Self {
        ExpansionPolicy::FirstVisit
    }
}

impl fmt::Display for ExpansionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionPolicy::FirstVisit => write!(f, "first-visit"),
            ExpansionPolicy::Full => write!(f, "full"),
        }
    }
}

// used for parsing cli args
impl FromStr for ExpansionPolicy {
    type Err = &'static str;
    fn from_str(policy: &str) -> Result<Self, Self::Err> {
        match policy {
            "first-visit" => Ok(ExpansionPolicy::FirstVisit),
            "full" => Ok(ExpansionPolicy::Full),
            _ => Err("invalid expansion policy; options are: first-visit, full"),
        }
    }
}

/// Configuration for one UCT decision.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of selection/expansion/simulation/backup cycles.
    pub computational_budget: usize,

    /// Exploration constant `C` of the UCB1 score.
    pub exploration: f64,

    pub expansion: ExpansionPolicy,

    /// Seed for the player's random source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            computational_budget: 100,
            exploration: std::f64::consts::FRAC_1_SQRT_2,
            expansion: ExpansionPolicy::default(),
            seed: None,
        }
    }
}
