//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub sim: SimConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            sim: SimConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// chrono format string for log entry timestamps.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Maximum entries retained in the event feed; oldest are dropped.
    #[serde(default = "default_max_log_entries")]
    pub max_log_entries: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_log_entries: default_max_log_entries(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_max_log_entries() -> usize {
    200
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seconds between simulator readings.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Initial presence sensor value.
    #[serde(default)]
    pub start_presence: bool,
    /// Initial obstruction sensor value.
    #[serde(default)]
    pub start_obstruction: bool,
    /// Randomly flip the presence sensor on some polls, so the dashboard
    /// shows activity without anyone at the keyboard.
    #[serde(default)]
    pub noise: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            start_presence: false,
            start_obstruction: false,
            noise: false,
        }
    }
}

fn default_poll_interval_secs() -> u64 {
    2
}
