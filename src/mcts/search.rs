//! The MCTS engine: selection, expansion, simulation, backpropagation.

use std::time::{Duration, Instant};

use crate::error::SearchError;
use crate::game::{Board, Player};
use crate::rng::SearchRng;
use crate::stats::SearchStats;

use super::config::MctsConfig;
use super::node::{MctsNode, NodeId};
use super::policy::{outcome_reward, RandomRollout, RolloutPolicy};
use super::tree::MctsTree;

/// Monte Carlo Tree Search move selection.
///
/// Holds configuration and a rollout policy; the tree, RNG state, and
/// statistics of each search are local to the `select_move` call.
pub struct MctsEngine {
    config: MctsConfig,
    rollout: Box<dyn RolloutPolicy>,
}

impl MctsEngine {
    /// Create an engine with the given configuration and uniformly random
    /// rollouts.
    #[must_use]
    pub fn new(config: MctsConfig) -> Self {
        Self {
            config,
            rollout: Box::new(RandomRollout),
        }
    }

    /// Replace the rollout policy.
    #[must_use]
    pub fn with_rollout<P: RolloutPolicy + 'static>(mut self, rollout: P) -> Self {
        self.rollout = Box::new(rollout);
        self
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Select a column for `player` on `board`, seeding the rollout RNG
    /// from the configuration. Same board, same config: same move.
    ///
    /// # Errors
    ///
    /// [`SearchError::TerminalBoard`] if the board already has a winner;
    /// [`SearchError::NoLegalMove`] if the board is full.
    pub fn select_move(
        &self,
        board: &Board,
        player: Player,
    ) -> Result<(usize, SearchStats), SearchError> {
        let mut rng = SearchRng::new(self.config.seed);
        self.select_move_with(board, player, &mut rng)
    }

    /// Select a column using a caller-provided RNG.
    pub fn select_move_with(
        &self,
        board: &Board,
        player: Player,
        rng: &mut SearchRng,
    ) -> Result<(usize, SearchStats), SearchError> {
        let start = Instant::now();
        let mut stats = SearchStats::new();

        if let Some(winner) = board.check_winner() {
            return Err(SearchError::TerminalBoard { winner });
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMove);
        }

        debug_assert_eq!(board.to_move(), player, "searching out of turn");

        // Forced move: nothing to search.
        if moves.len() == 1 {
            stats.time_us = start.elapsed().as_micros() as u64;
            return Ok((moves[0], stats));
        }

        let budget = self.config.time_budget_ms.map(Duration::from_millis);
        let mut tree = MctsTree::new(*board);

        for _ in 0..self.config.iterations {
            // Budget checks happen between iterations only, so every
            // completed rollout is fully backpropagated.
            if let Some(limit) = budget {
                if start.elapsed() >= limit {
                    break;
                }
            }

            self.iteration(&mut tree, rng)?;
            stats.simulations += 1;
        }

        stats.nodes_visited = tree.len() as u64;
        stats.time_us = start.elapsed().as_micros() as u64;

        // Robust child: the most-visited root child. Strict comparison
        // keeps the first-expanded child on ties.
        let root = tree.root_node();
        let mut best: Option<(usize, u32)> = None;
        for &(col, child_id) in &root.children {
            let visits = tree.get(child_id).visits;
            if best.map_or(true, |(_, v)| visits > v) {
                best = Some((col, visits));
            }
        }

        match best {
            Some((col, _)) => Ok((col, stats)),
            // No iteration ran (zero budget); fall back to the first legal
            // move rather than fail.
            None => Ok((moves[0], stats)),
        }
    }

    /// One four-phase iteration: select, expand, simulate, backpropagate.
    fn iteration(&self, tree: &mut MctsTree, rng: &mut SearchRng) -> Result<(), SearchError> {
        // === SELECTION ===
        // Descend while the node is fully expanded and the game is live.
        let mut current = tree.root();
        while !tree.get(current).is_terminal() && tree.get(current).is_fully_expanded() {
            current = self.best_child(tree, current);
        }

        // === EXPANSION ===
        if !tree.get(current).is_terminal() {
            let node = tree.get_mut(current);
            let idx = rng.gen_range_usize(0..node.untried.len());
            let col = node.untried.swap_remove(idx);

            let mut board = node.board;
            let mover = board.to_move();
            board.drop_piece(col, mover)?;

            let child = MctsNode::new(current, Some(mover), board);
            let child_id = tree.alloc(child);
            tree.get_mut(current).children.push((col, child_id));
            current = child_id;
        }

        // === SIMULATION ===
        let leaf = tree.get(current);
        let outcome = match leaf.outcome {
            Some(outcome) => outcome,
            None => {
                let mut rollout_rng = rng.fork();
                self.rollout.rollout(leaf.board, &mut rollout_rng)?
            }
        };

        // === BACKPROPAGATION ===
        // Each node accumulates the reward from the perspective of the
        // player who moved into it, alternating with depth.
        let mut id = current;
        while !id.is_none() {
            let node = tree.get_mut(id);
            node.visits += 1;
            if let Some(mover) = node.mover {
                node.total_reward += outcome_reward(outcome, mover);
            }
            id = node.parent;
        }

        Ok(())
    }

    /// Child with the highest UCB1 value. Strict comparison keeps the
    /// first child on ties.
    fn best_child(&self, tree: &MctsTree, id: NodeId) -> NodeId {
        let node = tree.get(id);
        let mut best = node.children[0].1;
        let mut best_value = f64::NEG_INFINITY;

        for &(_, child_id) in &node.children {
            let value = tree
                .get(child_id)
                .ucb1(node.visits, self.config.exploration_constant);
            if value > best_value {
                best_value = value;
                best = child_id;
            }
        }

        best
    }
}
