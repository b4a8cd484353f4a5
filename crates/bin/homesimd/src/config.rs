//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homesim.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use homesim_app::runtime::LoopIntervals;
use homesim_domain::automation::AutomationStatus;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sensor log file settings.
    pub log: LogConfig,
    /// Background automation settings.
    pub automation: AutomationConfig,
    /// Diagnostic logging settings.
    pub logging: LoggingConfig,
}

/// Sensor log file configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Path of the append-only sensor log.
    pub path: PathBuf,
}

/// Background automation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AutomationConfig {
    /// Whether automation starts enabled.
    pub enabled: bool,
    /// Seconds between timer cycles while automation is on.
    pub active_interval_secs: u64,
    /// Seconds between polls while automation is off.
    pub idle_interval_secs: u64,
}

/// Diagnostic logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `homesim.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homesim.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMESIM_LOG_PATH") {
            self.log.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("HOMESIM_AUTOMATION") {
            self.automation.enabled = matches!(val.to_ascii_lowercase().as_str(), "on" | "true" | "1");
        }
        if let Ok(val) = std::env::var("HOMESIM_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.automation.active_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "active interval must be non-zero".to_string(),
            ));
        }
        if self.automation.idle_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "idle interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Initial automation status for the controller.
    #[must_use]
    pub fn automation_status(&self) -> AutomationStatus {
        if self.automation.enabled {
            AutomationStatus::On
        } else {
            AutomationStatus::Off
        }
    }

    /// Timer cadence for the background automation loop.
    #[must_use]
    pub fn intervals(&self) -> LoopIntervals {
        LoopIntervals {
            active: Duration::from_secs(self.automation.active_interval_secs),
            idle: Duration::from_secs(self.automation.idle_interval_secs),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("sensor_data.txt"),
        }
    }
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            active_interval_secs: 4,
            idle_interval_secs: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homesimd=info,homesim=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
