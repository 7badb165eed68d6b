use std::path::Path;

use crate::env::RewardConfig;
use crate::error::ConfigError;
use crate::training::RolloutConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rewards: RewardConfig,
    pub rollout: RolloutConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values. The reward magnitudes are free tuning
    /// knobs; only their signs and the loop counters are checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rewards.win <= 0.0 {
            return Err(ConfigError::Validation("rewards.win must be > 0".into()));
        }
        if self.rewards.lose > 0.0 {
            return Err(ConfigError::Validation("rewards.lose must be <= 0".into()));
        }
        if self.rewards.draw > 0.0 {
            return Err(ConfigError::Validation("rewards.draw must be <= 0".into()));
        }
        if self.rewards.step > 0.0 {
            return Err(ConfigError::Validation("rewards.step must be <= 0".into()));
        }
        if self.rollout.num_episodes == 0 {
            return Err(ConfigError::Validation(
                "rollout.num_episodes must be > 0".into(),
            ));
        }
        if self.rollout.log_interval == 0 {
            return Err(ConfigError::Validation(
                "rollout.log_interval must be > 0".into(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[rewards]
win = 10.0
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!((config.rewards.win - 10.0).abs() < 1e-6);
        // Other fields should be defaults
        assert!((config.rewards.lose - (-2.0)).abs() < 1e-6);
        assert_eq!(config.rollout.num_episodes, 1_000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!((config.rewards.win - 20.0).abs() < 1e-6);
        assert!((config.rewards.step - (-1.0)).abs() < 1e-6);
        assert_eq!(config.rollout.log_interval, 100);
    }

    #[test]
    fn test_validation_rejects_non_positive_win() {
        let mut config = AppConfig::default();
        config.rewards.win = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_positive_lose() {
        let mut config = AppConfig::default();
        config.rewards.lose = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_episodes() {
        let mut config = AppConfig::default();
        config.rollout.num_episodes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_log_interval() {
        let mut config = AppConfig::default();
        config.rollout.log_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.rollout.num_episodes, 1_000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[rollout]
num_episodes = 500

[rewards]
win = 5.0
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.rollout.num_episodes, 500);
        assert!((config.rewards.win - 5.0).abs() < 1e-6);
        // Others are defaults
        assert!((config.rewards.draw - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[rewards]
win = -3.0
"#
        )
        .unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
