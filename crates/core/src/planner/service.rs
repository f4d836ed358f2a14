//! Planner service - concurrent startup read and derived views

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use yearflow_domain::{
    CalendarEvent, Goal, GoalCategory, GoalFilter, Notification, Result, YearFlowError,
};

use crate::filtering::{available_categories, filter_goals, GoalStats};
use crate::reminders::{active_notifications, reminder_digest, ScheduledReminder};
use crate::storage::ports::{NotificationRepository, Repository};
use crate::timeline::{month_detail, timeline_summary, MonthDetail, MonthMarker, TimelineMonth};

/// Everything the planner screen shows, read in one batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    pub goals: Vec<Goal>,
    pub events: Vec<CalendarEvent>,
    pub notifications: Vec<Notification>,
}

impl PlannerSnapshot {
    #[must_use]
    pub fn filtered_goals(&self, filter: &GoalFilter) -> Vec<&Goal> {
        filter_goals(&self.goals, filter)
    }

    #[must_use]
    pub fn stats(&self) -> GoalStats {
        GoalStats::from_goals(&self.goals)
    }

    #[must_use]
    pub fn available_categories(&self) -> Vec<GoalCategory> {
        available_categories(&self.goals)
    }

    #[must_use]
    pub fn timeline(&self, year: i32, today: NaiveDate) -> Vec<TimelineMonth> {
        timeline_summary(year, &self.goals, &self.events, today)
    }

    #[must_use]
    pub fn month_detail(&self, marker: MonthMarker) -> MonthDetail {
        month_detail(marker, &self.goals, &self.events)
    }

    #[must_use]
    pub fn active_notifications(&self, now: DateTime<Utc>) -> Vec<&Notification> {
        active_notifications(&self.notifications, now)
    }

    #[must_use]
    pub fn reminders(&self, now: DateTime<Utc>) -> Vec<ScheduledReminder> {
        reminder_digest(&self.notifications, now)
    }
}

/// Loads the planner snapshot from the goal, event and notification stores
pub struct PlannerService {
    goals: Arc<dyn Repository<Goal>>,
    events: Arc<dyn Repository<CalendarEvent>>,
    notifications: Arc<dyn NotificationRepository>,
}

impl PlannerService {
    #[must_use]
    pub fn new(
        goals: Arc<dyn Repository<Goal>>,
        events: Arc<dyn Repository<CalendarEvent>>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self { goals, events, notifications }
    }

    /// Read all three collections concurrently.
    ///
    /// # Errors
    /// `YearFlowError::LoadFailure` when any read fails; partial results are
    /// discarded.
    pub async fn load_snapshot(&self) -> Result<PlannerSnapshot> {
        let loaded = tokio::try_join!(
            self.goals.get_all(),
            self.events.get_all(),
            self.notifications.get_all(),
        );

        match loaded {
            Ok((goals, events, notifications)) => {
                info!(
                    goals = goals.len(),
                    events = events.len(),
                    notifications = notifications.len(),
                    "Planner data loaded"
                );
                Ok(PlannerSnapshot { goals, events, notifications })
            }
            Err(err) => {
                warn!(error = %err, "Planner data load failed");
                Err(match err {
                    YearFlowError::LoadFailure(message) => YearFlowError::LoadFailure(message),
                    other => YearFlowError::LoadFailure(other.to_string()),
                })
            }
        }
    }
}
