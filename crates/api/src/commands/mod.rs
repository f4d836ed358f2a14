//! Commands - the entry points a frontend would call

// Commands surface the errors of the service they wrap, documented there.
#![allow(clippy::missing_errors_doc)]

mod calendar;
mod goals;
mod planner;
mod reminders;
mod timeline;

pub use calendar::*;
pub use goals::*;
pub use planner::*;
pub use reminders::*;
pub use timeline::*;
