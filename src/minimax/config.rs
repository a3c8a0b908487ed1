//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

use crate::eval::EvalWeights;

/// Minimax configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Search depth in plies. Difficulty presets use 2 / 4 / 6.
    pub depth: u32,

    /// Alpha-beta pruning toggle. Disabling it yields the pure minimax
    /// baseline: same chosen move and score, strictly more nodes visited.
    pub pruning: bool,

    /// Evaluation weights applied at cutoff nodes.
    pub weights: EvalWeights,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            pruning: true,
            weights: EvalWeights::default(),
        }
    }
}

impl MinimaxConfig {
    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Disable alpha-beta pruning (pure minimax baseline).
    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Set the evaluation weights.
    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinimaxConfig::default();
        assert_eq!(config.depth, 4);
        assert!(config.pruning);
        assert_eq!(config.weights, EvalWeights::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MinimaxConfig::default().with_depth(6).without_pruning();
        assert_eq!(config.depth, 6);
        assert!(!config.pruning);
    }

    #[test]
    fn test_serialization() {
        let config = MinimaxConfig::default().with_depth(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: MinimaxConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
