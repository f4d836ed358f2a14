//! Domain types and models

pub mod calendar;
pub mod event;
pub mod filter;
pub mod goal;
pub mod notification;

pub use calendar::{Calendar, CalendarKind, CalendarPatch, NewCalendar};
pub use event::{CalendarEvent, CalendarEventPatch, NewCalendarEvent};
pub use filter::{DateRange, GoalFilter, StatusFilter};
pub use goal::{
    clamp_progress, parse_target_date, Goal, GoalCategory, GoalDraft, GoalPatch, GoalStatus,
    NewGoal, ProgressStep,
};
pub use notification::{
    NewNotification, Notification, NotificationDraft, NotificationKind, NotificationPatch,
    NotificationTiming,
};
