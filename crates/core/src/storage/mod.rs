//! Storage ports

pub mod ports;

pub use ports::{CalendarRepository, NotificationRepository, Repository};
