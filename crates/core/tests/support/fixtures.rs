//! Entity builders and a wired-up service harness

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use yearflow_core::{CalendarService, FixedClock, GoalService, PlannerService};
use yearflow_domain::{
    Calendar, CalendarEvent, Goal, GoalCategory, GoalDraft, GoalStatus, Notification,
    NotificationDraft, NotificationKind, NotificationTiming,
};

use super::repositories::MockRepository;

/// Reference instant used across the service tests: 2026-03-10 09:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
}

pub fn today() -> NaiveDate {
    now().date_naive()
}

pub fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn goal(id: &str, category: GoalCategory, status: GoalStatus, date: NaiveDate) -> Goal {
    Goal {
        id: id.into(),
        title: format!("Goal {id}"),
        description: String::new(),
        target_date: date.and_hms_opt(0, 0, 0).unwrap().and_utc(),
        category,
        progress: 50,
        status,
    }
}

pub fn notification(id: &str, goal_id: &str, offset_days: i64, enabled: bool) -> Notification {
    Notification {
        id: id.into(),
        goal_id: Some(goal_id.into()),
        kind: NotificationKind::Before,
        timing: NotificationTiming { days: Some(7), date: today() + Duration::days(offset_days) },
        message: format!("Reminder {id}"),
        enabled,
    }
}

pub fn event(id: &str, date: NaiveDate) -> CalendarEvent {
    CalendarEvent { id: id.into(), title: format!("Event {id}"), date }
}

pub fn goal_draft(title: &str, target: NaiveDate) -> GoalDraft {
    GoalDraft {
        title: title.into(),
        target_date: Some(date_string(target)),
        category: GoalCategory::Career,
        status: GoalStatus::Active,
        progress: 20,
        ..GoalDraft::default()
    }
}

pub fn reminder_draft(message: &str, days: i32) -> NotificationDraft {
    NotificationDraft { message: message.into(), days: Some(days), ..NotificationDraft::default() }
}

/// Services over shared mock stores and a fixed clock.
pub struct Harness {
    pub clock: Arc<FixedClock>,
    pub goals: MockRepository<Goal>,
    pub events: MockRepository<CalendarEvent>,
    pub notifications: MockRepository<Notification>,
    pub calendars: MockRepository<Calendar>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(FixedClock::new(now())),
            goals: MockRepository::default(),
            events: MockRepository::default(),
            notifications: MockRepository::default(),
            calendars: MockRepository::default(),
        }
    }

    pub fn goal_service(&self) -> GoalService {
        GoalService::new(
            Arc::new(self.goals.clone()),
            Arc::new(self.notifications.clone()),
            self.clock.clone(),
        )
    }

    pub fn calendar_service(&self) -> CalendarService {
        CalendarService::new(Arc::new(self.calendars.clone()), self.clock.clone())
    }

    pub fn planner_service(&self) -> PlannerService {
        PlannerService::new(
            Arc::new(self.goals.clone()),
            Arc::new(self.events.clone()),
            Arc::new(self.notifications.clone()),
        )
    }
}
