//! Difficulty presets.
//!
//! External configuration mapping difficulty levels to engine parameters.
//! The engines themselves only ever see a depth or a simulation budget.

use serde::{Deserialize, Serialize};

use crate::mcts::MctsConfig;
use crate::minimax::MinimaxConfig;

/// Difficulty level for either engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Minimax search depth (in plies) for this level.
    #[must_use]
    pub fn search_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// MCTS simulation budget for this level.
    #[must_use]
    pub fn simulations(self) -> u32 {
        match self {
            Difficulty::Easy => 500,
            Difficulty::Medium => 1000,
            Difficulty::Hard => 2000,
        }
    }

    /// A minimax configuration tuned to this level.
    #[must_use]
    pub fn minimax_config(self) -> MinimaxConfig {
        MinimaxConfig::default().with_depth(self.search_depth())
    }

    /// An MCTS configuration tuned to this level.
    #[must_use]
    pub fn mcts_config(self) -> MctsConfig {
        MctsConfig::default().with_iterations(self.simulations())
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Error for unrecognized difficulty names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty: {0:?} (expected easy, medium, or hard)")]
pub struct ParseDifficultyError(String);

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_mapping() {
        assert_eq!(Difficulty::Easy.search_depth(), 2);
        assert_eq!(Difficulty::Medium.search_depth(), 4);
        assert_eq!(Difficulty::Hard.search_depth(), 6);
    }

    #[test]
    fn test_simulation_mapping() {
        assert_eq!(Difficulty::Easy.simulations(), 500);
        assert_eq!(Difficulty::Medium.simulations(), 1000);
        assert_eq!(Difficulty::Hard.simulations(), 2000);
    }

    #[test]
    fn test_configs() {
        assert_eq!(Difficulty::Hard.minimax_config().depth, 6);
        assert_eq!(Difficulty::Easy.mcts_config().iterations, 500);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Easy).unwrap();
        assert_eq!(json, "\"easy\"");
    }
}
