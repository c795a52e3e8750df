//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PARKADE_RECORDS_PATH=/var/lib/parkade/records.txt                  │
//! │     PARKADE_SLOTS=20                                                   │
//! │     PARKADE_RESTORE_SLOTS=false                                        │
//! │     PARKADE_LOG=debug                                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $PARKADE_CONFIG, or                                                │
//! │     ~/.config/parkade/parkade.toml (Linux)                             │
//! │     ~/Library/Application Support/com.parkade.parkade/parkade.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ./parking_records.txt, 10 slots, restore on                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! records_path = "parking_records.txt"
//! slots = 10
//! restore_slots = true
//! currency_symbol = "$"
//! log_filter = "warn"
//! ```
//!
//! The hourly rate is not configurable.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use parkade_core::{Money, MAX_SLOTS};
use parkade_store::DEFAULT_RECORDS_FILE;

/// Largest lot the console will manage.
const MAX_CONFIGURED_SLOTS: u32 = 999;

/// Application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigState {
    /// Path of the record file.
    pub records_path: PathBuf,

    /// Number of slots in the lot. Fixed for the life of the process.
    pub slots: u32,

    /// Rebuild slot occupancy from open records on startup.
    pub restore_slots: bool,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Default for ConfigState {
    /// Returns the configuration used when nothing is set.
    ///
    /// ## Default Values
    /// - Records: `./parking_records.txt`
    /// - Slots: 10
    /// - Restore slots: on
    /// - Currency: `$`
    /// - Log filter: `warn`
    fn default() -> Self {
        ConfigState {
            records_path: PathBuf::from(DEFAULT_RECORDS_FILE),
            slots: MAX_SLOTS,
            restore_slots: true,
            currency_symbol: "$".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else `PARKADE_CONFIG`, else platform dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`ConfigState::load`] with an explicit variable lookup.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        let path = config_path
            .or_else(|| lookup("PARKADE_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.is_file() {
                info!(?path, "Loading config from file");
                let contents =
                    std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadFailed {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots == 0 || self.slots > MAX_CONFIGURED_SLOTS {
            return Err(ConfigError::Invalid(format!(
                "slots must be between 1 and {}, got {}",
                MAX_CONFIGURED_SLOTS, self.slots
            )));
        }

        if self.records_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("records_path must not be empty".into()));
        }

        Ok(())
    }

    /// Applies `PARKADE_*` overrides.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("PARKADE_RECORDS_PATH") {
            debug!(path = %path, "Overriding records path from environment");
            self.records_path = PathBuf::from(path);
        }

        if let Some(slots) = lookup("PARKADE_SLOTS") {
            self.slots = slots.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PARKADE_SLOTS".to_string(),
                value: slots.clone(),
            })?;
        }

        if let Some(restore) = lookup("PARKADE_RESTORE_SLOTS") {
            self.restore_slots = match restore.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "PARKADE_RESTORE_SLOTS".to_string(),
                        value: restore,
                    })
                }
            };
        }

        if let Some(filter) = lookup("PARKADE_LOG") {
            self.log_filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "parkade", "parkade")
            .map(|dirs| dirs.config_dir().join("parkade.toml"))
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(5000)), "$50.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}
