//! Monte Carlo tree search with UCB1 selection (UCT) and random rollouts.

mod config;
mod node;
mod search;
mod tree;

pub use config::{ExpansionPolicy, MctsConfig};
pub use node::{MctsNode, NodeId};
pub use search::{build_tree, default_policy, expand, tree_policy, uct_search, MAX_BUDGET};
pub use tree::MctsTree;
