//! Arena-based MCTS tree.
//!
//! Nodes live in a flat `Vec` and reference each other by [`NodeId`]
//! indices, avoiding reference-counted links and keeping the tree
//! serializable for inspection.

use serde::{Deserialize, Serialize};

use crate::game::Board;

use super::node::{MctsNode, NodeId};

/// Arena-based MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsTree {
    nodes: Vec<MctsNode>,
}

impl MctsTree {
    /// Create a tree with a root node for `board`.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(MctsNode::root(board));
        Self { nodes }
    }

    /// The root node ID (always 0).
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MctsNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True iff the tree has no nodes. Never true in practice: a tree is
    /// created with its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node.
    #[must_use]
    pub fn root_node(&self) -> &MctsNode {
        self.get(self.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_tree_new() {
        let tree = MctsTree::new(Board::new());
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
        assert!(tree.root_node().parent.is_none());
    }

    #[test]
    fn test_tree_alloc() {
        let mut tree = MctsTree::new(Board::new());

        let mut board = Board::new();
        board.drop_piece(3, Player::Red).unwrap();
        let child = MctsNode::new(tree.root(), Some(Player::Red), board);
        let child_id = tree.alloc(child);

        assert_eq!(child_id, NodeId::new(1));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(child_id).mover, Some(Player::Red));
    }

    #[test]
    fn test_tree_get_mut() {
        let mut tree = MctsTree::new(Board::new());
        let root = tree.root();

        tree.get_mut(root).visits = 100;

        assert_eq!(tree.get(root).visits, 100);
    }

    #[test]
    fn test_tree_serialization() {
        let mut tree = MctsTree::new(Board::new());
        tree.get_mut(tree.root()).visits = 50;

        let json = serde_json::to_string(&tree).unwrap();
        let back: MctsTree = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.root_node().visits, 50);
    }
}
