//! Configuration module for the virtual file system.

use serde::Deserialize;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;

use crate::{Result, VfsError};

/// Registry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Maximum folder/file description length (in characters).
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,
}

fn default_max_description_length() -> usize {
    500
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_description_length: default_max_description_length(),
        }
    }
}

/// Listing display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Timezone for displaying creation times (e.g., "UTC", "Asia/Taipei").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// strftime format for creation times.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_time_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            time_format: default_time_format(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_file() -> String {
    "logs/vfs.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Help configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct HelpConfig {
    /// Path to a man page shown by `help`. The built-in text is used when unset.
    #[serde(default)]
    pub man_page: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Registry configuration.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Help configuration.
    #[serde(default)]
    pub help: HelpConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(VfsError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| VfsError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `VFS_LOG_LEVEL`: Override the log level
    /// - `VFS_TIMEZONE`: Override the display timezone
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("VFS_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
        if let Ok(timezone) = std::env::var("VFS_TIMEZONE") {
            if !timezone.is_empty() {
                self.display.timezone = timezone;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The display timezone is not a known IANA name
    /// - The time format contains an invalid strftime specifier
    /// - The description limit is zero
    pub fn validate(&self) -> Result<()> {
        if self.display.timezone.parse::<Tz>().is_err() {
            return Err(VfsError::Config(format!(
                "unknown timezone: {}",
                self.display.timezone
            )));
        }
        if StrftimeItems::new(&self.display.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(VfsError::Config(format!(
                "invalid time format: {}",
                self.display.time_format
            )));
        }
        if self.registry.max_description_length == 0 {
            return Err(VfsError::Config(
                "max_description_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
