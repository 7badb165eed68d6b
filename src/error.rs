use std::path::PathBuf;

/// Errors surfaced by the environment itself. An occupied cell is not one of
/// them: that is an expected, recoverable condition reported through the
/// step result.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("action {action} is outside the 9-cell action space")]
    InvalidAction { action: usize },

    #[error("no empty cell left to move to (check the terminal flag first)")]
    NoLegalMove,
}

/// Errors that can occur while driving rollouts.
#[derive(Debug, thiserror::Error)]
pub enum RolloutError {
    #[error("environment error: {0}")]
    Env(#[from] EnvError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_error_display() {
        let err = EnvError::InvalidAction { action: 12 };
        assert_eq!(
            err.to_string(),
            "action 12 is outside the 9-cell action space"
        );
    }

    #[test]
    fn test_rollout_error_wraps_env_error() {
        let err = RolloutError::from(EnvError::NoLegalMove);
        assert!(err.to_string().starts_with("environment error:"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rewards.win must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: rewards.win must be > 0"
        );
    }
}
