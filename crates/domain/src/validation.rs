//! Field-level validation results
//!
//! Validation never throws: validators return a [`ValidationErrors`] mapping
//! from field name to error, and an empty mapping means the input is valid.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::errors::{Result, YearFlowError};

/// Kind of problem found on a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub enum ValidationIssue {
    /// Text field is blank after trimming.
    EmptyField,
    /// Required field was not supplied.
    MissingField,
    /// Date text could not be parsed.
    InvalidDate,
    /// Date lies before today (date-only comparison).
    PastDate,
    /// Numeric value lies outside its allowed range.
    OutOfRange,
    /// Notification message is blank.
    EmptyMessage,
    /// Identifier does not match the expected shape.
    InvalidFormat,
}

/// Error attached to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct FieldError {
    pub issue: ValidationIssue,
    pub message: String,
}

/// Mapping from field name to its error, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. A field keeps only its latest error.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        issue: ValidationIssue,
        message: impl Into<String>,
    ) {
        self.errors.insert(field.into(), FieldError { issue, message: message.into() });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Issue recorded for `field`, if any.
    #[must_use]
    pub fn issue(&self, field: &str) -> Option<ValidationIssue> {
        self.errors.get(field).map(|e| e.issue)
    }

    /// Field names with errors, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.errors.iter().map(|(field, error)| (field.as_str(), error))
    }

    /// Merge another mapping into this one; later errors win per field.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// `Ok(())` when empty.
    ///
    /// # Errors
    /// `YearFlowError::Validation(self)` when any field has an error.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(YearFlowError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            0 => write!(f, "Validation error with no specific field errors"),
            1 => {
                let (field, error) = self.iter().next().ok_or(fmt::Error)?;
                write!(f, "Validation failed: {field}: {}", error.message)
            }
            n => {
                write!(f, "Validation failed with {n} errors: ")?;
                for (i, (field, error)) in self.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{field}: {}", error.message)?;
                }
                Ok(())
            }
        }
    }
}
