//! Reminder scheduling
//!
//! Decides which notifications are due for a reference instant and how the
//! notification panel labels them. Nothing here reads the clock; callers pass
//! `now` on every call.

pub mod scheduler;

pub use scheduler::{
    active_notifications, days_until, is_active, reminder_digest, DueLabel, ScheduledReminder,
    Urgency,
};
