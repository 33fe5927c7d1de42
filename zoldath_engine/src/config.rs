//! Game configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use zoldath_rules::Location;

/// Errors while loading a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables for a play session. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Health the player starts with and returns to on reset.
    pub initial_health: i32,

    /// Where the player starts and returns to on reset.
    pub spawn: Location,

    /// Damage dealt with no sword in hand. Each sword carried adds to a
    /// total of at least this much.
    pub unarmed_damage: i32,

    /// Upper bound on hearts drawn in the health bar.
    pub max_display_hearts: i32,

    /// Fixed seed for random placement; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_health: 3,
            spawn: Location::new(1, 1),
            unarmed_damage: 1,
            max_display_hearts: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Player damage given the number of swords carried.
    pub fn player_damage(&self, swords: usize) -> i32 {
        (swords as i32).max(self.unarmed_damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.initial_health, 3);
        assert_eq!(config.spawn, Location::new(1, 1));
        assert_eq!(config.max_display_hearts, 10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            initial_health = 5
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_health, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.spawn, Location::new(1, 1));
    }

    #[test]
    fn test_spawn_table() {
        let config = GameConfig::from_toml_str("spawn = { row = 4, col = 2 }").unwrap();
        assert_eq!(config.spawn, Location::new(4, 2));
    }

    #[test]
    fn test_invalid_toml() {
        let result = GameConfig::from_toml_str("initial_health = \"lots\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = GameConfig::load("/definitely/not/here/zoldath.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_player_damage() {
        let config = GameConfig::default();
        assert_eq!(config.player_damage(0), 1);
        assert_eq!(config.player_damage(1), 1);
        assert_eq!(config.player_damage(3), 3);

        let strict = GameConfig {
            unarmed_damage: 0,
            ..GameConfig::default()
        };
        assert_eq!(strict.player_damage(0), 0);
    }
}
