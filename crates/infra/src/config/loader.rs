//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from `YEARFLOW_*` environment variables
//! 2. If none are set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file anywhere, the built-in defaults apply
//!
//! ## Environment Variables
//! Every variable is optional; unset ones keep their default.
//! - `YEARFLOW_SEED_PATH`: JSON seed file loaded into the stores
//! - `YEARFLOW_LATENCY_ENABLED`: Simulated storage latency on/off
//! - `YEARFLOW_LATENCY_GET_ALL_MS`, `YEARFLOW_LATENCY_GET_BY_ID_MS`,
//!   `YEARFLOW_LATENCY_CREATE_MS`, `YEARFLOW_LATENCY_UPDATE_MS`,
//!   `YEARFLOW_LATENCY_DELETE_MS`: Per-operation latency in milliseconds
//! - `YEARFLOW_CALENDAR_CONNECT_DELAY_MS`: Simulated connect handshake
//! - `YEARFLOW_LOG_LEVEL`: Default log filter directive
//! - `YEARFLOW_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./yearflow.json` or `./yearflow.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use yearflow_domain::{Config, Result, YearFlowError};

use crate::errors::InfraError;

const ENV_SEED_PATH: &str = "YEARFLOW_SEED_PATH";
const ENV_LATENCY_ENABLED: &str = "YEARFLOW_LATENCY_ENABLED";
const ENV_LATENCY_GET_ALL: &str = "YEARFLOW_LATENCY_GET_ALL_MS";
const ENV_LATENCY_GET_BY_ID: &str = "YEARFLOW_LATENCY_GET_BY_ID_MS";
const ENV_LATENCY_CREATE: &str = "YEARFLOW_LATENCY_CREATE_MS";
const ENV_LATENCY_UPDATE: &str = "YEARFLOW_LATENCY_UPDATE_MS";
const ENV_LATENCY_DELETE: &str = "YEARFLOW_LATENCY_DELETE_MS";
const ENV_CONNECT_DELAY: &str = "YEARFLOW_CALENDAR_CONNECT_DELAY_MS";
const ENV_LOG_LEVEL: &str = "YEARFLOW_LOG_LEVEL";
const ENV_LOG_JSON: &str = "YEARFLOW_LOG_JSON";

/// Every variable [`load_from_env`] understands.
pub const ENV_KEYS: &[&str] = &[
    ENV_SEED_PATH,
    ENV_LATENCY_ENABLED,
    ENV_LATENCY_GET_ALL,
    ENV_LATENCY_GET_BY_ID,
    ENV_LATENCY_CREATE,
    ENV_LATENCY_UPDATE,
    ENV_LATENCY_DELETE,
    ENV_CONNECT_DELAY,
    ENV_LOG_LEVEL,
    ENV_LOG_JSON,
];

/// Load configuration with automatic fallback strategy
///
/// Environment variables win when any is set. Otherwise the first probed
/// config file is used, and without one the defaults apply.
///
/// # Errors
/// Returns `YearFlowError::Config` if a variable or file holds an invalid
/// value.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Environment configuration unavailable, trying file");
        }
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Starts from the defaults and overrides each field whose variable is set.
///
/// # Errors
/// Returns `YearFlowError::Config` if no `YEARFLOW_*` variable is set, or if
/// a numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    if !ENV_KEYS.iter().any(|key| std::env::var_os(key).is_some()) {
        return Err(YearFlowError::Config("No YEARFLOW_* environment variables set".to_string()));
    }

    let mut config = Config::default();

    if let Ok(seed_path) = std::env::var(ENV_SEED_PATH) {
        config.storage.seed_path = Some(seed_path).filter(|p| !p.trim().is_empty());
    }

    let latency = &mut config.storage.latency;
    latency.enabled = env_bool(ENV_LATENCY_ENABLED, latency.enabled);
    latency.get_all_ms = env_parse(ENV_LATENCY_GET_ALL)?.unwrap_or(latency.get_all_ms);
    latency.get_by_id_ms = env_parse(ENV_LATENCY_GET_BY_ID)?.unwrap_or(latency.get_by_id_ms);
    latency.create_ms = env_parse(ENV_LATENCY_CREATE)?.unwrap_or(latency.create_ms);
    latency.update_ms = env_parse(ENV_LATENCY_UPDATE)?.unwrap_or(latency.update_ms);
    latency.delete_ms = env_parse(ENV_LATENCY_DELETE)?.unwrap_or(latency.delete_ms);

    config.calendar.connect_delay_ms =
        env_parse(ENV_CONNECT_DELAY)?.unwrap_or(config.calendar.connect_delay_ms);

    if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing sections and fields keep their defaults.
///
/// # Errors
/// Returns `YearFlowError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(YearFlowError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            YearFlowError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| YearFlowError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `YearFlowError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => serde_json::from_str(contents)
            .map_err(|e| YearFlowError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(YearFlowError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./yearflow.{json,toml}`)
/// 2. Parent directory
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("yearflow.json"),
        dir.join("yearflow.toml"),
    ]
}

/// Parse an optional numeric environment variable
///
/// # Errors
/// Returns `YearFlowError::Config` if the variable is set but not a number.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| YearFlowError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("YEARFLOW_TEST_BOOL_YES", "yes");
        std::env::set_var("YEARFLOW_TEST_BOOL_UPPER", "TRUE");
        std::env::set_var("YEARFLOW_TEST_BOOL_OFF", "off");

        assert!(env_bool("YEARFLOW_TEST_BOOL_YES", false));
        assert!(env_bool("YEARFLOW_TEST_BOOL_UPPER", false));
        assert!(!env_bool("YEARFLOW_TEST_BOOL_OFF", true));
        assert!(env_bool("YEARFLOW_TEST_BOOL_MISSING", true));

        std::env::remove_var("YEARFLOW_TEST_BOOL_YES");
        std::env::remove_var("YEARFLOW_TEST_BOOL_UPPER");
        std::env::remove_var("YEARFLOW_TEST_BOOL_OFF");
    }

    #[test]
    fn test_load_from_env_requires_some_variable() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, YearFlowError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_overrides_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_LATENCY_ENABLED, "false");
        std::env::set_var(ENV_LATENCY_CREATE, "25");
        std::env::set_var(ENV_SEED_PATH, "/tmp/seed.json");
        std::env::set_var(ENV_LOG_JSON, "1");

        let config = load_from_env().unwrap();
        assert!(!config.storage.latency.enabled);
        assert_eq!(config.storage.latency.create_ms, 25);
        assert_eq!(config.storage.latency.get_all_ms, 300);
        assert_eq!(config.storage.seed_path.as_deref(), Some("/tmp/seed.json"));
        assert_eq!(config.calendar.connect_delay_ms, 2000);
        assert!(config.logging.json);

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_CONNECT_DELAY, "soon");
        let err = load_from_env().unwrap_err();
        assert!(matches!(err, YearFlowError::Config(message) if message.contains(ENV_CONNECT_DELAY)));

        clear_env();
    }

    #[test]
    fn test_parse_config_partial_json_keeps_defaults() {
        let json = r#"{ "storage": { "latency": { "enabled": false } } }"#;
        let config = parse_config(json, Path::new("config.json")).unwrap();
        assert!(!config.storage.latency.enabled);
        assert_eq!(config.storage.latency.delete_ms, 300);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_content = r#"
[calendar]
connect_delay_ms = 0

[logging]
level = "debug"
"#;
        let config = parse_config(toml_content, Path::new("yearflow.toml")).unwrap();
        assert_eq!(config.calendar.connect_delay_ms, 0);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_config_invalid_toml() {
        let err = parse_config("[storage", Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, YearFlowError::Config(_)));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", Path::new("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(matches!(result, Err(YearFlowError::Config(_))));
    }
}
