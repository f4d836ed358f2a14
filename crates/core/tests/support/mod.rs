//! Shared test helpers for `yearflow-core` integration tests.
//!
//! Lightweight in-memory repositories and fixtures so service tests can
//! focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
