//! # YearFlow Domain
//!
//! Business domain types and models for YearFlow.
//!
//! This crate contains:
//! - Entities (goals, notifications, calendar events, calendars)
//! - Filter state and validation error mappings
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other YearFlow crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod entity;
pub mod errors;
pub mod macros;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use config::*;
pub use entity::Entity;
pub use errors::*;
pub use types::*;
pub use validation::{FieldError, ValidationErrors, ValidationIssue};
