//! # connect4-engine
//!
//! A two-player, perfect-information search engine for Connect Four.
//!
//! ## Design Principles
//!
//! 1. **Stateless engines**: `MinimaxEngine` and `MctsEngine` hold only
//!    configuration. Every `select_move` call returns fresh statistics and
//!    leaves nothing behind.
//!
//! 2. **Explicit randomness**: all MCTS randomness flows through a seedable
//!    [`SearchRng`]; the same seed produces the same move.
//!
//! 3. **Copy board, arena tree**: the board is a small `Copy` value; minimax
//!    searches it with drop/undo stack discipline, MCTS snapshots it into an
//!    index-based node arena (no pointer-linked trees).
//!
//! ## Modules
//!
//! - `game`: board state, move legality, win/draw detection
//! - `eval`: handcrafted window-based evaluation with tunable weights
//! - `minimax`: depth-bounded adversarial search with alpha-beta pruning
//! - `mcts`: Monte Carlo Tree Search with pluggable rollout policies
//! - `difficulty`: Easy/Medium/Hard presets for both engines
//!
//! ## Usage
//!
//! ```rust
//! use connect4_engine::{Board, Player, MinimaxEngine, MinimaxConfig};
//!
//! let board = Board::new();
//! let engine = MinimaxEngine::new(MinimaxConfig::default());
//! let (column, stats) = engine.select_move(&board, Player::Red).unwrap();
//! assert!(board.is_valid_move(column));
//! assert!(stats.nodes_visited > 0);
//! ```

pub mod difficulty;
pub mod error;
pub mod eval;
pub mod game;
pub mod mcts;
pub mod minimax;
pub mod rng;
pub mod stats;

// Re-export commonly used types
pub use crate::difficulty::Difficulty;
pub use crate::error::{MoveError, SearchError};
pub use crate::eval::{evaluate, evaluate_with, EvalWeights, WIN_SCORE};
pub use crate::game::{Board, Outcome, Player, COLS, ROWS};
pub use crate::mcts::{HeuristicRollout, MctsConfig, MctsEngine, RandomRollout, RolloutPolicy};
pub use crate::minimax::{MinimaxConfig, MinimaxEngine};
pub use crate::rng::SearchRng;
pub use crate::stats::SearchStats;
