// src/config.rs
use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const DEFAULT_CONFIG_FILENAME: &str = "quantum_chess.json";
pub const DEFAULT_LOG_FILTER: &str = "quantum_chess=info";

/// How strictly the session checks a move before applying it.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MovePolicy {
    /// Any piece of either colour may go to any square on the board.
    #[default]
    Permissive,
    /// The piece must belong to the side to move and the destination must be generated for it.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: i32,
    /// Seed for collapse sampling; entropy when absent.
    pub seed: Option<u64>,
    pub policy: MovePolicy,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
            policy: MovePolicy::Permissive,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::load`], but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {}..={}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("quantum_chess_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.policy, MovePolicy::Permissive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "seed": 7, "policy": "strict" }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.policy, MovePolicy::Strict);
        assert_eq!(config.board_size, 10);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_board_size_validation() {
        for bad in [0, 3, 27] {
            let config = GameConfig { board_size: bad, ..GameConfig::default() };
            assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("load");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "board_size": 12 }}"#).unwrap();
        drop(file);

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.board_size, 12);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let path = temp_path("invalid");
        std::fs::write(&path, r#"{ "board_size": 2 }"#).unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Validation(_))));
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::JsonParse(_))));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = temp_path("missing");
        assert_eq!(GameConfig::load_or_default(&path).unwrap(), GameConfig::default());
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::FileRead { .. })));
    }
}
