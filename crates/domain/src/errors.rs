//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Main error type for YearFlow
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum YearFlowError {
    /// Update or delete addressed an id the store does not know.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A draft was refused because of field-level validation errors.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The batched startup read failed; the whole batch is discarded.
    #[error("Failed to load planning data: {0}")]
    LoadFailure(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl YearFlowError {
    /// Build a `NotFound` error for an entity kind and id.
    #[must_use]
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::NotFound(format!("{kind} {id}"))
    }

    /// Field errors carried by a `Validation` failure, if any.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for YearFlowError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias for YearFlow operations
pub type Result<T> = std::result::Result<T, YearFlowError>;
