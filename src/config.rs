use std::path::Path;

use log::warn;

use crate::arena::ArenaConfig;
use crate::error::ConfigError;

/// Deepest lookahead accepted from configuration. Cost grows as 7^depth.
pub const MAX_SEARCH_DEPTH: usize = 8;

/// Lookahead settings for the AI.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies simulated before falling back to the heuristic.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 5 }
    }
}

/// Interactive game settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Let the AI make the opening move.
    pub ai_first: bool,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be >= 1".into(),
            ));
        }
        if self.search.depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_SEARCH_DEPTH}"
            )));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation(
                "arena.games must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
