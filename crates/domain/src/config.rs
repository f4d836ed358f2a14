//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_CONNECT_DELAY_MS, DEFAULT_CREATE_LATENCY_MS, DEFAULT_DELETE_LATENCY_MS,
    DEFAULT_GET_ALL_LATENCY_MS, DEFAULT_GET_BY_ID_LATENCY_MS, DEFAULT_UPDATE_LATENCY_MS,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

/// In-memory store configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Optional JSON file with initial calendars, goals, events and
    /// notifications.
    pub seed_path: Option<String>,
    pub latency: LatencyConfig,
}

/// Artificial per-operation latency standing in for network I/O
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub get_all_ms: u64,
    pub get_by_id_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl LatencyConfig {
    /// No artificial delay at all; used by tests and batch tooling.
    #[must_use]
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            get_all_ms: DEFAULT_GET_ALL_LATENCY_MS,
            get_by_id_ms: DEFAULT_GET_BY_ID_LATENCY_MS,
            create_ms: DEFAULT_CREATE_LATENCY_MS,
            update_ms: DEFAULT_UPDATE_LATENCY_MS,
            delete_ms: DEFAULT_DELETE_LATENCY_MS,
        }
    }
}

/// Calendar connector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Simulated provider handshake before a calendar is stored.
    pub connect_delay_ms: u64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { connect_delay_ms: DEFAULT_CALENDAR_CONNECT_DELAY_MS }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
