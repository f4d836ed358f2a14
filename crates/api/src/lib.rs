//! # YearFlow App
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Commands (the frontend → backend bridge)
//! - Application context (dependency injection)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Every command logs its name, duration and outcome

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
