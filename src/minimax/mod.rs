//! Depth-bounded adversarial search with alpha-beta pruning.
//!
//! The engine owns only its configuration; each [`MinimaxEngine::select_move`]
//! call searches a scratch copy of the caller's board with drop/undo stack
//! discipline and returns the chosen column plus fresh statistics.
//!
//! ## Usage
//!
//! ```rust
//! use connect4_engine::{Board, Player, MinimaxConfig, MinimaxEngine};
//!
//! let engine = MinimaxEngine::new(MinimaxConfig::default().with_depth(4));
//! let board = Board::new();
//!
//! let (column, stats) = engine.select_move(&board, Player::Red).unwrap();
//! assert!(board.is_valid_move(column));
//! println!("searched {} nodes, {} cutoffs", stats.nodes_visited, stats.prunes);
//! ```

pub mod config;
pub mod search;

pub use config::MinimaxConfig;
pub use search::MinimaxEngine;
