//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Goal progress
pub const MIN_PROGRESS: i32 = 0;
pub const MAX_PROGRESS: i32 = 100;
pub const PROGRESS_STEP: i32 = 10;

// Notification scheduling
pub const ACTIVE_NOTIFICATION_HORIZON_DAYS: i64 = 7;
pub const URGENCY_CRITICAL_DAYS: i64 = 0;
pub const URGENCY_HIGH_DAYS: i64 = 1;
pub const URGENCY_ELEVATED_DAYS: i64 = 3;
pub const MIN_BEFORE_DAYS: i32 = 1;
pub const MAX_BEFORE_DAYS: i32 = 365;
pub const DEFAULT_BEFORE_DAYS: i32 = 7;

// Simulated storage latency (milliseconds)
pub const DEFAULT_GET_ALL_LATENCY_MS: u64 = 300;
pub const DEFAULT_GET_BY_ID_LATENCY_MS: u64 = 200;
pub const DEFAULT_CREATE_LATENCY_MS: u64 = 400;
pub const DEFAULT_UPDATE_LATENCY_MS: u64 = 300;
pub const DEFAULT_DELETE_LATENCY_MS: u64 = 300;
pub const DEFAULT_CALENDAR_CONNECT_DELAY_MS: u64 = 2000;

// Calendar ids
pub const GOOGLE_GROUP_CALENDAR_SUFFIX: &str = "@group.calendar.google.com";
pub const GMAIL_SUFFIX: &str = "@gmail.com";
pub const MIN_APPLE_CALENDAR_ID_LENGTH: usize = 10;
pub const APPLE_NAME_PREFIX_CHARS: usize = 8;

// Validation field keys (match the form field names)
pub const FIELD_TITLE: &str = "title";
pub const FIELD_TARGET_DATE: &str = "targetDate";
pub const FIELD_PROGRESS: &str = "progress";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_DAYS: &str = "days";
pub const FIELD_CALENDAR_ID: &str = "calendarId";
