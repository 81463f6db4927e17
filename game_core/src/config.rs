use crate::error::GameResult;
use crate::Arena;

/// Startup configuration
///
/// Only describes the environment the game starts in. The rules themselves
/// live in [`crate::Params`] and are fixed.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    /// RNG seed for serves after a goal. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            seed: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same defaults, fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_arena(mut self, width: f32, height: f32) -> Self {
        self.arena_width = width;
        self.arena_height = height;
        self
    }

    /// Check the startup arena and build it
    pub fn validate(&self) -> GameResult<Arena> {
        Arena::new(self.arena_width, self.arena_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameError;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.arena_width, 800.0);
        assert_eq!(config.arena_height, 600.0);
        assert!(config.seed.is_none(), "Default config should use entropy");
    }

    #[test]
    fn test_config_validate_rejects_zero_height() {
        let config = Config::seeded(1).with_arena(800.0, 0.0);
        assert_eq!(
            config.validate().unwrap_err(),
            GameError::InvalidArena {
                width: 800.0,
                height: 0.0
            }
        );
    }

    #[test]
    fn test_config_validate_builds_arena() {
        let arena = Config::seeded(1).with_arena(1024.0, 768.0).validate().unwrap();
        assert_eq!(arena.width, 1024.0);
        assert_eq!(arena.height, 768.0);
    }
}
