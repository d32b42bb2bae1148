//! Game configuration.
//!
//! A game is configured only by its starting pile sizes. The default is the
//! classic four-pile board `[1, 3, 5, 7]`.

use serde::{Deserialize, Serialize};

use super::error::{NimError, Result};
use super::piles::Piles;

/// Starting piles used when nothing else is configured.
pub const DEFAULT_PILES: [u32; 4] = [1, 3, 5, 7];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pile sizes at the start of every game.
    pub initial_piles: Piles,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_piles: Piles::from(DEFAULT_PILES),
        }
    }
}

impl GameConfig {
    /// Create a new game configuration with the default piles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting piles.
    #[must_use]
    pub fn with_piles(mut self, piles: impl Into<Piles>) -> Self {
        self.initial_piles = piles.into();
        self
    }

    /// Check that a game built from this configuration can be played.
    ///
    /// Rejects an empty pile list and an all-zero board, either of which
    /// would start the game already over.
    pub fn validate(&self) -> Result<()> {
        if self.initial_piles.is_empty() {
            return Err(NimError::InvalidConfig {
                message: "at least one pile is required".to_string(),
            });
        }
        if self.initial_piles.is_exhausted() {
            return Err(NimError::InvalidConfig {
                message: format!("piles {} are already empty", self.initial_piles),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_piles() {
        let config = GameConfig::default();
        assert_eq!(config.initial_piles.as_slice(), &[1, 3, 5, 7]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_piles() {
        let config = GameConfig::new().with_piles([2, 2]);
        assert_eq!(config.initial_piles, Piles::from([2, 2]));
    }

    #[test]
    fn test_validate_rejects_unplayable_boards() {
        let empty = GameConfig::new().with_piles(Vec::<u32>::new());
        assert!(matches!(empty.validate(), Err(NimError::InvalidConfig { .. })));

        let zeros = GameConfig::new().with_piles([0, 0]);
        assert!(matches!(zeros.validate(), Err(NimError::InvalidConfig { .. })));

        // Some empty piles are fine as long as one has objects.
        assert!(GameConfig::new().with_piles([0, 0, 0, 1]).validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_piles([3, 4, 5]);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
