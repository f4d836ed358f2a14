//! Shared helpers for the pure derivations

pub mod dates;
