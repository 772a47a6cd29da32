//! UCT tree with arena allocation.
//!
//! Nodes live in a contiguous `Vec` and refer to each other by `NodeId`.
//! Children are owned by the arena rather than by their parent, so walking
//! back up to the root during backup needs no shared ownership.

use crate::board::game_move::Move;
use crate::board::Board;

use super::node::{MctsNode, NodeId};

#[derive(Debug)]
pub struct MctsTree {
    nodes: Vec<MctsNode>,
    root: NodeId,
}

impl MctsTree {
    pub fn new(root_board: Board) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_board)],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &MctsNode> + '_ {
        self.get(id).children.iter().map(move |&child| self.get(child))
    }

    /// Creates a child of `parent_id` reached by `action`, holding `board`.
    pub fn add_child(&mut self, parent_id: NodeId, action: Move, board: Board) -> NodeId {
        debug_assert!(self.nodes.len() <= u32::MAX as usize);
        let child_id = NodeId(self.nodes.len() as u32);
        self.nodes.push(MctsNode::new_child(parent_id, action, board));

        let parent = self.get_mut(parent_id);
        parent.children.push(child_id);
        parent.untried_moves.retain(|&untried| untried != action);

        child_id
    }

    /// Adds one visit and `reward` to `leaf_id` and every ancestor up to the
    /// root. The reward is not negated between levels: it is already
    /// expressed for the searching player.
    pub fn backup(&mut self, leaf_id: NodeId, reward: f64) {
        let mut current = Some(leaf_id);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visit_count += 1;
            node.total_sim_reward += reward;
            current = node.parent;
        }
    }

    /// The child of `node_id` with the highest UCB1 score for `exploration`.
    /// The first child wins ties. `None` when the node has no children.
    pub fn best_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let mut best = None;
        let mut best_score = f64::NEG_INFINITY;

        for &child_id in node.children.iter() {
            let score = self.get(child_id).ucb_score(node.visit_count, exploration);
            if best.is_none() || score > best_score {
                best = Some(child_id);
                best_score = score;
            }
        }

        best
    }
}
