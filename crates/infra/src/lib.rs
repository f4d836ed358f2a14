//! # YearFlow Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Latency-simulating in-memory repositories
//! - Seed file loading
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `yearflow-core`
//! - Contains all "impure" code (file I/O, timers)

pub mod config;
pub mod errors;
pub mod memory;

// Re-export commonly used items
pub use errors::InfraError;
pub use memory::{InMemoryStore, MemoryStores, SeedData, StoreLatency};
