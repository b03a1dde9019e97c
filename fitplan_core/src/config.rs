//! Configuration file support for fitplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitplan/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub adaptation: AdaptationConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Intensity adaptation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Consecutive workout days required before volume escalates
    #[serde(default = "default_streak_required")]
    pub streak_required: u32,

    /// Sets added per adaptation
    #[serde(default = "default_set_increase")]
    pub set_increase: u32,

    /// Reps added per adaptation (applied through the rep-notation engine)
    #[serde(default = "default_rep_increase")]
    pub rep_increase: i32,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            streak_required: default_streak_required(),
            set_increase: default_set_increase(),
            rep_increase: default_rep_increase(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("fitplan")
}

fn default_streak_required() -> u32 {
    2
}

fn default_set_increase() -> u32 {
    1
}

fn default_rep_increase() -> i32 {
    2
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        if config.adaptation.streak_required == 0 {
            return Err(Error::Config(
                "adaptation.streak_required must be at least 1".into(),
            ));
        }

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("fitplan").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.adaptation.streak_required, 2);
        assert_eq!(config.adaptation.set_increase, 1);
        assert_eq!(config.adaptation.rep_increase, 2);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            config.adaptation.streak_required,
            parsed.adaptation.streak_required
        );
        assert_eq!(config.data.data_dir, parsed.data.data_dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[adaptation]
streak_required = 3
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.adaptation.streak_required, 3);
        assert_eq!(config.adaptation.rep_increase, 2); // default
    }

    #[test]
    fn test_zero_streak_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[adaptation]\nstreak_required = 0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
