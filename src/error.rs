use std::path::PathBuf;

/// Errors raised while building a board geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("board size must be at least 1")]
    ZeroBoardSize,

    #[error("board needs {needed} cell labels but only {got} were supplied")]
    NotEnoughLabels { needed: usize, got: usize },

    #[error("cell label '{0}' is used more than once")]
    DuplicateLabel(String),

    #[error("cell labels must not be empty")]
    EmptyLabel,

    #[error("leyline refers to unknown cell '{0}'")]
    UnknownLabel(String),

    #[error("cell '{0}' appears in more than one leyline of the same family")]
    RepeatedInFamily(String),
}

/// Errors raised when a move cannot be applied to a state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("unknown cell '{0}'")]
    UnknownCell(String),

    #[error("illegal move '{label}' (legal: {legal:?})")]
    IllegalMove { label: String, legal: Vec<String> },
}

/// Errors raised by the search entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("game is already over, there is no move to choose")]
    GameOver,
}

/// Errors raised while a strategy chooses a move.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a move was entered")]
    InputClosed,
}

/// A strategy name that matches no known strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected interactive, random, recursive, iterative or rough)")]
pub struct UnknownStrategy(pub String);

/// Errors raised while driving a game between two strategies.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("strategy '{strategy}' chose an illegal move: {source}")]
    IllegalMove { strategy: String, source: MoveError },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid board: {0}")]
    Geometry(#[from] GeometryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::IllegalMove {
            label: "A".to_string(),
            legal: vec!["B".to_string(), "C".to_string()],
        };
        assert_eq!(err.to_string(), r#"illegal move 'A' (legal: ["B", "C"])"#);
    }

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::NotEnoughLabels { needed: 7, got: 3 };
        assert_eq!(
            err.to_string(),
            "board needs 7 cell labels but only 3 were supplied"
        );
    }

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::GameOver.to_string(),
            "game is already over, there is no move to choose"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("play.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: play.games must be > 0"
        );
    }
}
