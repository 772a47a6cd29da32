//! UCT tree nodes.
//!
//! Each node owns a snapshot of the board it stands for, so the search never
//! has to undo moves while walking the tree.

use crate::board::game_move::Move;
use crate::board::Board;

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct MctsNode {
    /// `None` for the root.
    pub parent: Option<NodeId>,

    /// Move that led here from the parent. `None` for the root.
    pub incoming_action: Option<Move>,

    pub board: Board,

    pub children: Vec<NodeId>,

    /// Moves from this position that have no child yet.
    pub untried_moves: Vec<Move>,

    pub visit_count: u32,

    /// Sum of the rollout rewards backed up through this node, from the
    /// searching player's point of view.
    pub total_sim_reward: f64,
}

impl MctsNode {
    pub fn new_root(board: Board) -> Self {
        Self::new(None, None, board)
    }

    pub fn new_child(parent: NodeId, action: Move, board: Board) -> Self {
        Self::new(Some(parent), Some(action), board)
    }

    fn new(parent: Option<NodeId>, incoming_action: Option<Move>, board: Board) -> Self {
        Self {
            parent,
            incoming_action,
            untried_moves: board.playable_moves(),
            board,
            children: Vec::new(),
            visit_count: 0,
            total_sim_reward: 0.,
        }
    }

    /// Average reward per visit; 0 before the first visit.
    #[inline]
    pub fn mean_reward(&self) -> f64 {
        if self.visit_count == 0 {
            0.
        } else {
            self.total_sim_reward / f64::from(self.visit_count)
        }
    }

    /// UCB1 score of this node as a child of a parent visited
    /// `parent_visits` times: `mean + c * sqrt(2 ln(N) / n)`.
    ///
    /// An unvisited node scores infinity so that it is always tried first.
    #[inline]
    pub fn ucb_score(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visit_count == 0 {
            return f64::INFINITY;
        }
        let visits = f64::from(self.visit_count);
        let exploration_term = (2. * f64::from(parent_visits).ln() / visits).sqrt();
        self.mean_reward() + exploration * exploration_term
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.board.is_game_over()
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty()
    }
}
