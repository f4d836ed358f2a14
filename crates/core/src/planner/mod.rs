//! Planner snapshot: the startup read and the derived views over it

pub mod service;

pub use service::{PlannerService, PlannerSnapshot};
