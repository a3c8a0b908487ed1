//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Simulation budget per move (iterations of the four-phase loop).
    /// Difficulty presets use 500 / 1000 / 2000.
    pub iterations: u32,

    /// Optional wall-clock budget in milliseconds. Checked between
    /// iterations only, so the search stops cleanly with consistent
    /// statistics.
    pub time_budget_ms: Option<u64>,

    /// UCB1 exploration constant (default: sqrt(2)).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Seed for the rollout RNG. Same seed produces the same move.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            time_budget_ms: None,
            exploration_constant: std::f64::consts::SQRT_2,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Set the simulation budget.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set a wall-clock budget in milliseconds.
    #[must_use]
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = Some(ms);
        self
    }

    /// Set the exploration constant.
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
