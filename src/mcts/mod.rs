//! Monte Carlo Tree Search.
//!
//! Four-phase UCT search: UCB1 selection down fully-expanded nodes,
//! expansion of one untried move, a rollout from the new leaf, and
//! backpropagation of the result. The final move is the robust child (the
//! most-visited root child), not the highest average reward.
//!
//! Nodes live in an arena indexed by [`NodeId`]; parents are plain indices,
//! never owning references.
//!
//! ## Usage
//!
//! ```rust
//! use connect4_engine::{Board, Player, MctsConfig, MctsEngine};
//!
//! let engine = MctsEngine::new(MctsConfig::default().with_iterations(200));
//! let board = Board::new();
//!
//! let (column, stats) = engine.select_move(&board, Player::Red).unwrap();
//! assert!(board.is_valid_move(column));
//! assert_eq!(stats.simulations, 200);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod tree;

pub use config::MctsConfig;
pub use node::{MctsNode, NodeId};
pub use policy::{outcome_reward, HeuristicRollout, RandomRollout, RolloutPolicy};
pub use search::MctsEngine;
pub use tree::MctsTree;
