use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_SEEDS_PER_HOLE, MAX_SEEDS_PER_HOLE};
use crate::error::GameError;
use crate::types::{Difficulty, GameMode};

/// Options for starting a game. Every field may be omitted from JS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seeds placed in every hole at the start, from 1 to [`MAX_SEEDS_PER_HOLE`].
    pub seeds_per_hole: u32,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Seed for the AI's random choices. Taken from the clock when absent.
    pub ai_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seeds_per_hole: DEFAULT_SEEDS_PER_HOLE,
            mode: GameMode::PlayerVsComputer,
            difficulty: Difficulty::Medium,
            ai_seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seeds_per_hole(mut self, seeds: u32) -> Self {
        self.seeds_per_hole = seeds;
        self
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_ai_seed(mut self, seed: u64) -> Self {
        self.ai_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        validate_seeds_per_hole(self.seeds_per_hole)
    }
}

pub fn validate_seeds_per_hole(seeds: u32) -> Result<(), GameError> {
    if seeds == 0 {
        return Err(GameError::InvalidConfig(
            "seeds_per_hole must be at least 1".to_string(),
        ));
    }
    if seeds > MAX_SEEDS_PER_HOLE {
        return Err(GameError::InvalidConfig(format!(
            "seeds_per_hole must be at most {MAX_SEEDS_PER_HOLE}, got {seeds}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_four_seeds_against_medium_computer() {
        let config = GameConfig::default();

        assert_eq!(config.seeds_per_hole, 4);
        assert_eq!(config.mode, GameMode::PlayerVsComputer);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_seeds_per_hole_is_rejected() {
        let err = GameConfig::default()
            .with_seeds_per_hole(0)
            .validate()
            .unwrap_err();

        assert!(err.to_string().contains("seeds_per_hole"));
    }

    #[test]
    fn seeds_per_hole_above_limit_is_rejected() {
        assert!(
            GameConfig::default()
                .with_seeds_per_hole(MAX_SEEDS_PER_HOLE)
                .validate()
                .is_ok()
        );

        let err = GameConfig::default()
            .with_seeds_per_hole(400_000_000)
            .validate()
            .unwrap_err();

        assert!(matches!(err, GameError::InvalidConfig(_)));
        assert!(err.to_string().contains("at most"));
    }

    #[test]
    fn builders_set_fields() {
        let config = GameConfig::default()
            .with_seeds_per_hole(6)
            .with_mode(GameMode::PlayerVsPlayer)
            .with_difficulty(Difficulty::Easy)
            .with_ai_seed(3);

        assert_eq!(config.seeds_per_hole, 6);
        assert_eq!(config.mode, GameMode::PlayerVsPlayer);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.ai_seed, Some(3));
    }
}
