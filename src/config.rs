use std::path::Path;

use tracing::warn;

use crate::ai::StrategyKind;
use crate::error::ConfigError;
use crate::game::{Game, Geometry, Player};

/// Largest board the exhaustive searches finish on in reasonable time.
const EXHAUSTIVE_SEARCH_LIMIT: usize = 2;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub play: PlayConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Side length of the triangular board
    pub size: usize,
    /// Cell labels in row order; `A`, `B`, ... when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            size: 2,
            labels: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub p1: StrategyKind,
    pub p2: StrategyKind,
    /// Player who moves first
    pub first: Player,
    /// Seed for the random strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            p1: StrategyKind::Interactive,
            p2: StrategyKind::Iterative,
            first: Player::One,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub games: usize,
    /// Print the board after every move of a single game
    pub show_board: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            games: 1,
            show_board: true,
        }
    }
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.size == 0 {
            return Err(ConfigError::Validation("board.size must be >= 1".into()));
        }
        if self.play.games == 0 {
            return Err(ConfigError::Validation("play.games must be > 0".into()));
        }
        if let Some(labels) = &self.board.labels {
            Geometry::with_labels(self.board.size, labels.clone())?;
        }

        for (name, kind) in [("p1", self.players.p1), ("p2", self.players.p2)] {
            if kind.is_exhaustive() && self.board.size > EXHAUSTIVE_SEARCH_LIMIT {
                warn!(
                    player = name,
                    strategy = %kind,
                    board_size = self.board.size,
                    "exhaustive search on a large board may not finish"
                );
            }
        }
        if self.play.games > 1
            && (self.players.p1 == StrategyKind::Interactive
                || self.players.p2 == StrategyKind::Interactive)
        {
            warn!(games = self.play.games, "match includes an interactive player");
        }

        Ok(())
    }

    /// Starting position described by this configuration.
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        let game = match &self.board.labels {
            Some(labels) => Game::with_labels(self.board.size, labels.clone(), self.players.first)?,
            None => Game::new(self.board.size, self.players.first)?,
        };
        Ok(game)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
