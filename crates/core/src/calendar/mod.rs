//! Calendar connection use cases

pub mod service;

pub use service::{CalendarService, ConnectCalendarRequest};
