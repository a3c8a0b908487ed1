//! MCTS node structure.
//!
//! Arena-allocated with index references (NodeId): a node stores its parent
//! as a plain index, never an owning reference, so the tree has no
//! ownership cycles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::game::{Board, Outcome, Player, COLS};

/// Index into the [`super::tree::MctsTree`] node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A node in the MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsNode {
    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// The player whose move created this node (None for the root).
    pub mover: Option<Player>,

    /// Board snapshot at this node.
    pub board: Board,

    /// Visits through this node.
    pub visits: u32,

    /// Accumulated reward from the mover's perspective
    /// (+1 win / 0 draw / -1 loss per rollout).
    pub total_reward: f64,

    /// Moves not yet expanded into children.
    pub untried: SmallVec<[usize; COLS]>,

    /// Expanded children as `(column, node)` pairs.
    pub children: SmallVec<[(usize, NodeId); COLS]>,

    /// Game result if this node is terminal.
    pub outcome: Option<Outcome>,
}

impl MctsNode {
    /// Create a node for `board`, reached by `mover` playing into it.
    #[must_use]
    pub fn new(parent: NodeId, mover: Option<Player>, board: Board) -> Self {
        let outcome = board.outcome();
        // Terminal nodes have no moves to try.
        let untried = if outcome.is_some() {
            SmallVec::new()
        } else {
            board.legal_moves()
        };

        Self {
            parent,
            mover,
            board,
            visits: 0,
            total_reward: 0.0,
            untried,
            children: SmallVec::new(),
            outcome,
        }
    }

    /// Create a root node.
    #[must_use]
    pub fn root(board: Board) -> Self {
        Self::new(NodeId::NONE, None, board)
    }

    /// True iff every legal move has a child.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// True iff the game is over at this node.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Mean reward from the mover's perspective.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / f64::from(self.visits)
        }
    }

    /// UCB1 value of this node as a child: mean reward plus exploration
    /// bonus. Unvisited nodes rank infinitely high so they are tried first.
    #[must_use]
    pub fn ucb1(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let ln_parent = f64::from(parent_visits.max(1)).ln();
        self.mean_reward() + exploration * (ln_parent / f64::from(self.visits)).sqrt()
    }
}
