//! Analytics configuration.
//!
//! Zone thresholds and model horizons are read from a TOML file; a missing
//! file yields the defaults.

use crate::metrics::analytics::ImpulseResponseModel;
use crate::metrics::zones::HeartRateZoneConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Impulse-response model settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Fitness time constant in days
    pub fitness_days: u32,
    /// Fatigue window in days
    pub fatigue_days: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            fitness_days: 42,
            fatigue_days: 7,
        }
    }
}

impl ModelSettings {
    /// Build the model these settings describe.
    pub fn model(&self) -> ImpulseResponseModel {
        ImpulseResponseModel::with_constants(self.fitness_days, self.fatigue_days)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainloadConfig {
    /// Heart rate zone settings
    pub zones: HeartRateZoneConfig,
    /// Fitness/fatigue model settings
    pub model: ModelSettings,
}

/// Get the application config directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "trainload", "Trainload")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load configuration from the default path.
pub fn load_config() -> Result<TrainloadConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from a file, falling back to defaults if it does not exist.
pub fn load_config_from(path: &Path) -> Result<TrainloadConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(TrainloadConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: TrainloadConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config
        .zones
        .validate()
        .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

    Ok(config)
}

/// Save configuration to the default path.
pub fn save_config(config: &TrainloadConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to a file.
pub fn save_config_to(config: &TrainloadConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
