use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use yearflow_domain::{LoggingConfig, YearFlowError};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level`. Calling this twice is harmless: the
/// second install fails and is ignored.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_ok() {
        info!(level = %config.level, json = config.json, "Logging initialised");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"goals::create_goal"`,
/// never user data.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&YearFlowError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = error_label(err),
            error = %err,
            "command_execution_failure"
        ),
    }
}

/// Convert a `YearFlowError` into a stable label suitable for logging.
#[inline]
#[must_use]
pub fn error_label(error: &YearFlowError) -> &'static str {
    match error {
        YearFlowError::NotFound(_) => "not_found",
        YearFlowError::Validation(_) => "validation",
        YearFlowError::LoadFailure(_) => "load_failure",
        YearFlowError::InvalidInput(_) => "invalid_input",
        YearFlowError::Config(_) => "config",
        YearFlowError::Storage(_) => "storage",
        YearFlowError::Internal(_) => "internal",
    }
}
