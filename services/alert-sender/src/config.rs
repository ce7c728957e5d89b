//! Configuration types for the alert sender

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::event_list::EventFormat;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub channel: ChannelConfig,
    /// IANA time zone used when formatting event timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// strftime format for event timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: ChannelConfig::default(),
            timezone: default_timezone(),
            timestamp_format: default_timestamp_format(),
            entity: String::new(),
            source: default_source(),
        }
    }
}

/// Length limits imposed by the notification channel, in code points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    #[serde(default = "default_title_limit")]
    pub title_limit: usize,
    /// Negative means unlimited
    #[serde(default = "default_body_limit")]
    pub body_limit: i64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            title_limit: default_title_limit(),
            body_limit: default_body_limit(),
        }
    }
}

impl Config {
    /// Resolve the configured time zone name
    pub fn timezone(&self) -> crate::Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|e| {
            crate::SenderError::Config(format!("Unknown timezone '{}': {}", self.timezone, e))
        })
    }

    /// Build the event line format from the configured zone and pattern
    pub fn event_format(&self) -> crate::Result<EventFormat> {
        Ok(EventFormat::new(self.timezone()?, &self.timestamp_format))
    }

    /// Check the configuration for values that cannot be used at send time
    pub fn validate(&self) -> crate::Result<()> {
        self.timezone()?;
        if self.timestamp_format.is_empty() {
            return Err(crate::SenderError::Config(
                "timestamp_format must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}

fn default_source() -> String {
    "Moira".to_string()
}

fn default_title_limit() -> usize {
    130
}

fn default_body_limit() -> i64 {
    15000
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::SenderError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
