//! Per-call search statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `select_move` call.
///
/// Created fresh per call and returned to the caller; nothing persists
/// inside the engines. Minimax fills `nodes_visited` and `prunes`; MCTS
/// fills `nodes_visited` (tree nodes allocated) and `simulations`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search nodes entered (minimax) or tree nodes allocated (MCTS).
    pub nodes_visited: u64,

    /// Alpha-beta cutoffs taken (minimax only).
    pub prunes: u64,

    /// Rollouts completed (MCTS only).
    pub simulations: u64,

    /// Wall-clock time spent in the call, in microseconds.
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Elapsed wall-clock time in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.time_us as f64 / 1_000_000.0
    }

    /// Nodes visited per second, 0 if no time elapsed.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / self.elapsed_seconds()
        }
    }

    /// Simulations per second, 0 if no time elapsed.
    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.simulations as f64 / self.elapsed_seconds()
        }
    }
}
