//! Goal use cases
//!
//! Goals own no stored notification list; [`GoalWithNotifications`] is
//! assembled from the notification store on read.

pub mod service;

pub use service::{GoalService, GoalWithNotifications};
