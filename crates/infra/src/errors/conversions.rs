//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use serde_json::Error as JsonError;
use toml::de::Error as TomlError;
use yearflow_domain::YearFlowError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub YearFlowError);

impl From<InfraError> for YearFlowError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<YearFlowError> for InfraError {
    fn from(value: YearFlowError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoYearFlowError {
    fn into_yearflow(self) -> YearFlowError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → YearFlowError */
/* -------------------------------------------------------------------------- */

impl IntoYearFlowError for IoError {
    fn into_yearflow(self) -> YearFlowError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => YearFlowError::Storage(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                YearFlowError::Storage(format!("permission denied: {self}"))
            }
            _ => YearFlowError::Storage(format!("I/O error: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_yearflow())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → YearFlowError */
/* -------------------------------------------------------------------------- */

impl IntoYearFlowError for JsonError {
    fn into_yearflow(self) -> YearFlowError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => YearFlowError::Storage(format!("failed to read JSON: {self}")),
            Category::Syntax | Category::Eof => {
                YearFlowError::InvalidInput(format!("malformed JSON: {self}"))
            }
            Category::Data => {
                YearFlowError::InvalidInput(format!("unexpected JSON content: {self}"))
            }
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_yearflow())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → YearFlowError */
/* -------------------------------------------------------------------------- */

impl IntoYearFlowError for TomlError {
    fn into_yearflow(self) -> YearFlowError {
        YearFlowError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_yearflow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_maps_to_storage() {
        let err = IoError::new(std::io::ErrorKind::NotFound, "seed.json");
        let mapped: YearFlowError = InfraError::from(err).into();
        assert!(matches!(mapped, YearFlowError::Storage(message) if message.contains("file not found")));
    }

    #[test]
    fn json_syntax_maps_to_invalid_input() {
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let mapped: YearFlowError = InfraError::from(err).into();
        assert!(matches!(mapped, YearFlowError::InvalidInput(_)));
    }

    #[test]
    fn toml_errors_map_to_config() {
        let err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let mapped: YearFlowError = InfraError::from(err).into();
        assert!(matches!(mapped, YearFlowError::Config(_)));
    }

    #[test]
    fn domain_errors_round_trip_through_newtype() {
        let original = YearFlowError::not_found("goal", "g-1");
        let back: YearFlowError = InfraError::from(original.clone()).into();
        assert_eq!(back.to_string(), original.to_string());
    }
}
