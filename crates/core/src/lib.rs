//! # YearFlow Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (repository traits, clock)
//! - Pure derivations: goal filtering, month bucketing, reminder scheduling,
//!   draft validation
//! - Use cases and services built on the ports
//!
//! ## Architecture Principles
//! - Only depends on `yearflow-domain`
//! - No storage or platform code
//! - All external dependencies via traits
//! - Every time-dependent derivation takes the reference instant as a
//!   parameter

pub mod calendar;
pub mod clock;
pub mod filtering;
pub mod goals;
pub mod planner;
pub mod reminders;
pub mod storage;
pub mod timeline;
pub mod utils;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use calendar::{CalendarService, ConnectCalendarRequest};
pub use clock::{Clock, FixedClock, SystemClock};
pub use filtering::{filter_goals, DateRangePreset, GoalStats};
pub use goals::{GoalService, GoalWithNotifications};
pub use planner::{PlannerService, PlannerSnapshot};
pub use reminders::{active_notifications, days_until, DueLabel, ScheduledReminder, Urgency};
pub use storage::ports::{CalendarRepository, NotificationRepository, Repository};
pub use timeline::{months_of_year, MonthMarker, TimelineMonth};
pub use validation::{validate_goal_draft, validate_notification_draft};
